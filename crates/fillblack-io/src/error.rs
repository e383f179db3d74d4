//! I/O error types
//!
//! Maps TIFF decoder/encoder failures and core model errors into one
//! error type so callers only need to handle `IoError`.

use thiserror::Error;

/// Error type for stack I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file or image type cannot be represented
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The TIFF decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The TIFF encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the image stack model
    #[error("core error: {0}")]
    Core(#[from] fillblack_core::Error),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
