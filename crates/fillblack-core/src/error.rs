//! Error types for fillblack-core
//!
//! Provides a unified error type for the image stack model and for the
//! filter built on top of it. Each variant captures enough context for
//! diagnostics without exposing internal implementation details.

use crate::ImageType;
use thiserror::Error;

/// fillblack error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The image type has no zeroing routine
    #[error("image type not supported: {0}")]
    UnsupportedPixelType(ImageType),

    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Slice buffer does not hold width x height elements
    #[error("slice {slice} holds {actual} pixels, expected {expected}")]
    BufferLengthMismatch {
        slice: usize,
        expected: usize,
        actual: usize,
    },

    /// Slice storage does not match the declared image type
    #[error("{image_type} image cannot use {storage} storage")]
    StorageMismatch {
        image_type: ImageType,
        storage: &'static str,
    },

    /// 1-based slice index outside of 1..=len
    #[error("slice index out of range: {index} not in 1..={len}")]
    SliceOutOfRange { index: usize, len: usize },

    /// A stack needs at least one slice
    #[error("image stack has no slices")]
    EmptyStack,
}

/// Result type alias for fillblack operations
pub type Result<T> = std::result::Result<T, Error>;
