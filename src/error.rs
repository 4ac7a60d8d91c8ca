//! Error types for bookmark-pages.
//!
//! Only the outer layers fail: file handling and output serialization. The
//! walker and normalizer degrade silently on malformed markup.

use std::path::PathBuf;

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not exist.
    #[error("文件不存在：{}", .0.display())]
    InputNotFound(PathBuf),

    /// The input path does not carry an `.html`/`.htm` extension.
    #[error("文件类型不是HTML文件：{}", .0.display())]
    UnsupportedExtension(PathBuf),

    /// The input contained no bytes at all.
    #[error("书签文件为空")]
    EmptyInput,

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of the category list failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
