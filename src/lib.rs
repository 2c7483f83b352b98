pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;
pub mod svg;

pub use batch::{batch_optimize, mirror_path, BatchReport};
pub use config::{OptimizeConfig, RunMode};
pub use error::{OptimizeError, Result};
pub use formats::{is_image_file, ImageKind};
pub use processing::{
    encode_jpeg, encode_png, minify_svg_file, optimize_image, optimize_to_path, FileOutcome,
    FileStatus,
};

/// What a run did, by mode.
#[derive(Debug)]
pub enum RunReport {
    Single(FileOutcome),
    Batch(BatchReport),
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        match self {
            RunReport::Single(outcome) => outcome.is_success(),
            RunReport::Batch(report) => report.is_success(),
        }
    }
}

/// Optimize one file or a whole tree, as `config` says.
///
/// In single-file mode the output directory is created on demand, the same
/// as in batch mode.
pub fn run(config: &OptimizeConfig) -> RunReport {
    match &config.mode {
        RunMode::SingleFile(file) => {
            let input = batch::absolute_path(file).unwrap_or_else(|_| file.clone());
            let output_dir = batch::absolute_path(&config.output_dir).unwrap_or_else(|_| config.output_dir.clone());
            RunReport::Single(optimize_image(&input, &output_dir, config.quality))
        }
        RunMode::Batch(directory) => RunReport::Batch(batch_optimize(directory, &config.output_dir, config.quality)),
    }
}
