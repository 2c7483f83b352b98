use clap::Parser;
use image_optimizer::cli::Args;
use image_optimizer::logger::{set_quiet_mode, set_verbose_mode};
use image_optimizer::{run, RunReport};

// Failures are reported on the console; the exit code stays 0.
fn main() {
    let args = Args::parse();
    set_quiet_mode(args.quiet);
    set_verbose_mode(args.verbose);

    let config = args.into_config();
    image_optimizer::verbose!("Running with {:?}", config);

    match run(&config) {
        RunReport::Single(outcome) => {
            image_optimizer::verbose!("Single file finished, success: {}", outcome.is_success());
        }
        RunReport::Batch(report) => {
            image_optimizer::verbose!(
                "{} optimized, {} failed, {} directories",
                report.optimized_count(),
                report.failed_count(),
                report.directories.len()
            );
        }
    }
}
