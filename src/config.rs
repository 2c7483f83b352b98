use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_QUALITY};
use std::path::{Path, PathBuf};

/// What a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Optimize exactly one file
    SingleFile(PathBuf),
    /// Walk a directory tree and mirror it under the output directory
    Batch(PathBuf),
}

/// Settings for one optimization run.
///
/// Built once from the command line and passed by reference into the walker
/// and the codec dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeConfig {
    pub mode: RunMode,
    pub output_dir: PathBuf,
    /// JPEG quality. PNG and SVG ignore it.
    pub quality: u8,
}

impl OptimizeConfig {
    pub fn new(mode: RunMode, output_dir: PathBuf, quality: Option<u8>) -> Self {
        Self {
            mode,
            output_dir,
            quality: quality.unwrap_or(DEFAULT_QUALITY),
        }
    }

    pub fn batch(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, quality: u8) -> Self {
        Self::new(RunMode::Batch(input_dir.into()), output_dir.into(), Some(quality))
    }

    pub fn single_file(file: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, quality: u8) -> Self {
        Self::new(RunMode::SingleFile(file.into()), output_dir.into(), Some(quality))
    }

    /// The file (single-file mode) or directory (batch mode) being read.
    pub fn input(&self) -> &Path {
        match &self.mode {
            RunMode::SingleFile(path) | RunMode::Batch(path) => path,
        }
    }
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self::new(
            RunMode::Batch(PathBuf::from(DEFAULT_INPUT_DIR)),
            PathBuf::from(DEFAULT_OUTPUT_DIR),
            None,
        )
    }
}
