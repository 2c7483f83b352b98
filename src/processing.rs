use crate::constants::{
    LIBDEFLATER_MAX_LEVEL, MAX_JPEG_DIMENSION, MIN_JPEG_QUALITY, OXIPNG_PRESET, SUCCESS_PREFIX,
};
use crate::error::{OptimizeError, Result};
use crate::formats::ImageKind;
use crate::logger::create_progress_spinner;
use crate::svg;
use image::ImageReader;
use jpeg_encoder::{ColorType, Encoder};
use oxipng::{Deflaters, Options, StripChunks};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of one read-transform-write attempt.
#[derive(Debug)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    Optimized { output: PathBuf },
    Failed { message: String },
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Optimized { .. })
    }

    /// Where the optimized file was written, if it was.
    pub fn output(&self) -> Option<&Path> {
        match &self.status {
            FileStatus::Optimized { output } => Some(output),
            FileStatus::Failed { .. } => None,
        }
    }
}

/// Optimize one file into `output_dir`, keeping its file name.
///
/// Never fails: any error is reported on the console and returned as a
/// `FileStatus::Failed` so a batch can carry on with the next file.
///
/// # Arguments
/// * `input_path` - The image to optimize; its extension picks the codec
/// * `output_dir` - Directory receiving the result, created if missing
/// * `quality` - JPEG quality; PNG and SVG ignore it
pub fn optimize_image(input_path: &Path, output_dir: &Path, quality: u8) -> FileOutcome {
    let pb = create_progress_spinner(&format!("Optimizing {}...", input_path.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = output_path_for(input_path, output_dir)
        .and_then(|output_path| optimize_to_path(input_path, &output_path, quality));
    pb.finish_and_clear();

    let status = match result {
        Ok(output) => {
            crate::info!("{} Optimized {}", SUCCESS_PREFIX, file_name_of(input_path));
            crate::verbose!("{} -> {}", input_path.display(), output.display());
            FileStatus::Optimized { output }
        }
        Err(e) => {
            crate::error!("Failed to optimize {}: {}", input_path.display(), e);
            FileStatus::Failed {
                message: e.to_string(),
            }
        }
    };

    FileOutcome {
        source: input_path.to_path_buf(),
        status,
    }
}

/// `output_dir/<file name of input_path>`
pub fn output_path_for(input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input_path
        .file_name()
        .ok_or_else(|| OptimizeError::UnsupportedFormat(format!("Invalid file name: {}", input_path.display())))?;
    Ok(output_dir.join(file_name))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run the codec chosen by `input_path`'s extension and write the result
/// to `output_path`, overwriting anything already there.
pub fn optimize_to_path(input_path: &Path, output_path: &Path, quality: u8) -> Result<PathBuf> {
    let kind = ImageKind::from_path(input_path)
        .ok_or_else(|| OptimizeError::UnsupportedFormat(input_path.display().to_string()))?;

    if !input_path.is_file() {
        return Err(OptimizeError::FileNotFound(input_path.to_path_buf()));
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|_| OptimizeError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }

    match kind {
        ImageKind::Jpeg => {
            let data = encode_jpeg(input_path, quality)?;
            fs::write(output_path, data)?;
        }
        ImageKind::Png => {
            crate::verbose!("Quality {} does not apply to PNG; recompressing losslessly", quality);
            let data = encode_png(input_path)?;
            fs::write(output_path, data)?;
        }
        ImageKind::Svg => {
            let text = minify_svg_file(input_path)?;
            fs::write(output_path, text)?;
        }
    }

    Ok(output_path.to_path_buf())
}

/// Decode any raster image and re-encode it as a progressive JPEG with
/// optimized Huffman tables.
///
/// The decoder guesses the format from the file contents, so a PNG saved
/// under a `.jpg` name still converts. Alpha is dropped, and grayscale
/// sources stay single-channel.
pub fn encode_jpeg(input_path: &Path, quality: u8) -> Result<Vec<u8>> {
    let img = ImageReader::open(input_path)?.with_guessed_format()?.decode()?;
    let (width, height) = (img.width(), img.height());

    if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(OptimizeError::InvalidDimensions(width, height, MAX_JPEG_DIMENSION));
    }

    let (pixels, color_type) = if img.color().has_color() {
        (img.to_rgb8().into_raw(), ColorType::Rgb)
    } else {
        (img.to_luma8().into_raw(), ColorType::Luma)
    };

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, quality.max(MIN_JPEG_QUALITY));
    encoder.set_progressive(true);
    encoder.set_optimized_huffman_tables(true);
    encoder.encode(&pixels, width as u16, height as u16, color_type)?;

    Ok(buffer)
}

/// Recompress a PNG losslessly at maximum effort.
///
/// Every row filter is tried per image, and bit depth, color type and
/// palette reductions are applied whenever they are lossless. There is no
/// quality knob: the same input always yields the same bytes.
pub fn encode_png(input_path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(input_path)?;
    oxipng::optimize_from_memory(&data, &png_options())
        .map_err(|e| OptimizeError::PngOptimization(e.to_string()))
}

fn png_options() -> Options {
    let mut options = Options::from_preset(OXIPNG_PRESET);
    options.deflate = Deflaters::Libdeflater {
        compression: LIBDEFLATER_MAX_LEVEL,
    };
    options.palette_reduction = true;
    options.color_type_reduction = true;
    options.bit_depth_reduction = true;
    options.strip = StripChunks::Safe;
    options
}

/// Read an SVG as UTF-8 text and return its minified markup.
pub fn minify_svg_file(input_path: &Path) -> Result<String> {
    let source = fs::read_to_string(input_path)?;
    svg::minify(&source)
}
