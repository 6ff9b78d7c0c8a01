use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Invalid choice: {0:?}. Expected 1, 2 or 3")]
    InvalidChoice(String),

    #[error("Invalid compression ratio: {0:?} is not a whole number")]
    InvalidRatio(String),

    #[error("Compression ratio out of range: {0}. Must be between {1} and {2}")]
    RatioOutOfRange(i64, u8, u8),

    #[error("Unknown naming rule: {0:?}")]
    UnknownRule(String),

    #[error("No valid naming rules were given")]
    EmptyRuleSet,

    #[error("Input closed while waiting for an answer")]
    InputClosed,

    #[error("No images selected")]
    NoImagesSelected,

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("Failed to create output directory {0}: {1}")]
    FolderCreationFailed(PathBuf, std::io::Error),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("File picker error: {0}")]
    Picker(String),
}

pub type Result<T> = std::result::Result<T, BatchError>;
