#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: hand written -->
<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32">
  <metadata>sample</metadata>
  <g>
    <rect x="4" y="4" width="24" height="24" fill="#FFFFFF" stroke="#000000"/>
  </g>
</svg>
"##;

/// Noisy enough that JPEG quality has a visible effect on size.
pub fn sample_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let noise = (x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(40_503)) % 64;
        Rgb([
            ((x * 4 + noise) % 256) as u8,
            ((y * 4 + noise) % 256) as u8,
            (((x + y) * 2) % 256) as u8,
        ])
    })
}

pub fn write_jpeg(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    sample_image(96, 64).save_with_format(path, ImageFormat::Jpeg).unwrap();
}

pub fn write_png(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    sample_image(48, 48).save_with_format(path, ImageFormat::Png).unwrap();
}

pub fn write_svg(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, SAMPLE_SVG).unwrap();
}

pub fn write_text(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// images/a.jpg, images/sub/b.png, images/notes.txt
pub fn create_sample_tree(root: &Path) -> PathBuf {
    let images = root.join("images");
    write_jpeg(&images.join("a.jpg"));
    write_png(&images.join("sub/b.png"));
    write_text(&images.join("notes.txt"), "not an image");
    images
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Directory paths under `root`, relative to it, sorted.
pub fn relative_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    dirs.sort();
    dirs
}
