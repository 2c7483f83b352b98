use crate::config::{OptimizeConfig, RunMode};
use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "image-optimizer",
    about = "CLI to optimize images (JPG, PNG, SVG) for web performance",
    long_about = "image-optimizer rewrites JPEG, PNG and SVG files into smaller equivalents. \
                  Given a directory it walks the tree recursively and mirrors its layout under \
                  the output directory; given --file it optimizes just that file. \
                  JPEGs are re-encoded lossily at the chosen quality, PNGs are recompressed \
                  losslessly and SVGs are minified.",
    version,
    after_help = "EXAMPLES:\n  \
    image-optimizer\n  \
    image-optimizer -d ./assets -o ./public/assets -q 70\n  \
    image-optimizer -f ./logo.svg -o ./dist"
)]
pub struct Args {
    #[arg(
        short = 'f',
        long,
        help = "Path to the image file to optimize",
        long_help = "Optimize a single file instead of walking --directory. \
                     The result is written into --output under the same file name."
    )]
    pub file: Option<PathBuf>,

    #[arg(
        short = 'd',
        long,
        default_value = DEFAULT_INPUT_DIR,
        help = "Directory to optimize images in"
    )]
    pub directory: PathBuf,

    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory to save optimized images"
    )]
    pub output: PathBuf,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range((MIN_QUALITY as i64)..=(MAX_QUALITY as i64)),
        help = "Quality for JPG compression (0-100)",
        long_help = "JPEG quality from 0 (smallest) to 100 (best). \
                     PNG files are always recompressed losslessly and SVG files are minified, \
                     so this setting has no effect on them."
    )]
    pub quality: u8,

    #[arg(long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print extra detail for each file")]
    pub verbose: bool,
}

impl Args {
    pub fn into_config(self) -> OptimizeConfig {
        let mode = match self.file {
            Some(file) => RunMode::SingleFile(file),
            None => RunMode::Batch(self.directory),
        };
        OptimizeConfig::new(mode, self.output, Some(self.quality))
    }
}
