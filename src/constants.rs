pub const MIN_RATIO_PERCENT: u8 = 5;
pub const MAX_RATIO_PERCENT: u8 = 95;

/// Encoder quality for lossy output written by the compressor.
pub const COMPRESSED_JPEG_QUALITY: u8 = 95;

pub const COMPRESSED_FOLDER: &str = "compressed_images";
pub const RENAMED_FOLDER: &str = "renamed_images";
pub const FINAL_FOLDER: &str = "final_images";

pub const RULE_SEPARATOR: &str = "_";
pub const DATE_FORMAT: &str = "%Y%m%d";
pub const KIB: u64 = 1024;

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];
pub const PICKER_TITLE: &str = "Select images";
pub const PICKER_FILTER_NAME: &str = "Image files";

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";
pub const PROGRESS_BAR_CHARS: &str = "=>-";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const FOLDER_PREFIX: &str = "📁";
pub const SIZE_PREFIX: &str = "📊";
pub const RATIO_PREFIX: &str = "🎯";
