use crate::constants::{COMPLETE_PREFIX, COMPLETION_MESSAGE, DIRECTORY_PREFIX};
use crate::error::{OptimizeError, Result};
use crate::formats::is_image_file;
use crate::processing::{optimize_image, FileOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Everything a directory walk did.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per recognized image, in processing order
    pub files: Vec<FileOutcome>,
    /// Source directories that were fully processed, each directory after its contents
    pub directories: Vec<PathBuf>,
    /// Walk errors (unreadable directories, symlink loops), reported and skipped
    pub walk_errors: Vec<String>,
    pub missing_source: bool,
}

impl BatchReport {
    pub fn optimized_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.files.len() - self.optimized_count()
    }

    pub fn is_success(&self) -> bool {
        !self.missing_source && self.walk_errors.is_empty() && self.failed_count() == 0
    }
}

/// Resolve a path against the current directory without touching the
/// file system, so it works for paths that do not exist yet.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Map a path under `source_root` to the same relative path under `output_root`.
pub fn mirror_path(source_root: &Path, output_root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(source_root) {
        Ok(relative) if relative.as_os_str().is_empty() => output_root.to_path_buf(),
        Ok(relative) => output_root.join(relative),
        Err(_) => output_root.to_path_buf(),
    }
}

/// Optimize every recognized image under `input_dir` into a mirrored tree
/// under `output_dir`.
///
/// The walk is depth-first and strictly sequential, with siblings taken in
/// file-name order. Each directory gets its mirror before any file beneath
/// it is written, and a completion notice once all of its entries are done.
/// Nothing propagates: a missing source directory, an unreadable directory
/// or a file that fails to encode is reported and recorded in the returned
/// report, and the walk moves on.
pub fn batch_optimize(input_dir: &Path, output_dir: &Path, quality: u8) -> BatchReport {
    let mut report = BatchReport::default();

    let (source_root, output_root) = match (absolute_path(input_dir), absolute_path(output_dir)) {
        (Ok(source), Ok(output)) => (source, output),
        (Err(e), _) | (_, Err(e)) => {
            crate::error!("Failed to resolve paths: {}", e);
            report.walk_errors.push(e.to_string());
            return report;
        }
    };

    if !source_root.is_dir() {
        crate::error!("{}", OptimizeError::DirectoryNotFound(source_root));
        report.missing_source = true;
        return report;
    }

    if let Err(e) = ensure_dir(&output_root) {
        crate::error!("{}", e);
        report.walk_errors.push(e.to_string());
        return report;
    }

    // Outputs written inside the source tree must not be walked again.
    let skip_output = output_root.starts_with(&source_root) && output_root != source_root;
    if skip_output {
        crate::warn!(
            "Output directory {} is inside the input directory; it will be skipped",
            output_root.display()
        );
    }

    crate::verbose!("{} {} -> {}", DIRECTORY_PREFIX, source_root.display(), output_root.display());

    // contents_first: a directory entry arrives after everything beneath it
    let walker = WalkDir::new(&source_root)
        .follow_links(true)
        .sort_by_file_name()
        .contents_first(true)
        .into_iter()
        .filter_entry(|entry| !(skip_output && entry.path() == output_root.as_path()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let e = OptimizeError::from(e);
                crate::error!("{}", e);
                report.walk_errors.push(e.to_string());
                continue;
            }
        };

        let path = entry.path();
        let mirror = mirror_path(&source_root, &output_root, path);

        if entry.file_type().is_dir() {
            // Covers directories with no images: they are mirrored empty.
            if let Err(e) = ensure_dir(&mirror) {
                crate::error!("{}", e);
                report.walk_errors.push(e.to_string());
            }
            crate::info!("{} {}", COMPLETE_PREFIX, COMPLETION_MESSAGE);
            crate::verbose!("{} Finished {}", DIRECTORY_PREFIX, path.display());
            report.directories.push(path.to_path_buf());
        } else if is_image_file(path) {
            let target_dir = mirror.parent().unwrap_or(&output_root);
            report.files.push(optimize_image(path, target_dir, quality));
        }
    }

    report
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(|_| OptimizeError::DirectoryCreationFailed(dir.to_path_buf()))?;
    }
    Ok(())
}
