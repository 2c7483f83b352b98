pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 100;
// jpeg-encoder has no quality-0 table
pub const MIN_JPEG_QUALITY: u8 = 1;

pub const DEFAULT_INPUT_DIR: &str = "./images";
pub const DEFAULT_OUTPUT_DIR: &str = "./optimized";

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "svg"];

// JPEG dimensions are 16-bit in the frame header
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

pub const OXIPNG_PRESET: u8 = 6;
pub const LIBDEFLATER_MAX_LEVEL: u8 = 12;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const COMPLETE_PREFIX: &str = "🎉";
pub const DIRECTORY_PREFIX: &str = "📁";

pub const COMPLETION_MESSAGE: &str = "Image optimization complete.";
