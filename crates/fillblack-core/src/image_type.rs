//! Image type tags
//!
//! [`ImageType`] is the tag a host attaches to an image. [`PixelType`] is
//! the subset of those tags that the filter knows how to process.

use crate::error::{Error, Result};
use std::fmt;

/// Type tag of a host image.
///
/// Host codes follow the viewer's numbering: 0 = 8-bit gray, 1 = 16-bit
/// gray, 2 = 32-bit float gray, 3 = 8-bit indexed color, 4 = packed RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// 8-bit unsigned grayscale
    Gray8,
    /// 16-bit unsigned grayscale
    Gray16,
    /// 32-bit float grayscale
    Gray32,
    /// 8-bit indexed color with a lookup table
    Color256,
    /// Packed 32-bit RGB
    ColorRgb,
    /// Code the host does not recognize
    Unknown(i32),
}

impl ImageType {
    /// Map a host type code to an `ImageType`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Gray8,
            1 => Self::Gray16,
            2 => Self::Gray32,
            3 => Self::Color256,
            4 => Self::ColorRgb,
            other => Self::Unknown(other),
        }
    }

    /// Host type code for this tag.
    pub fn code(self) -> i32 {
        match self {
            Self::Gray8 => 0,
            Self::Gray16 => 1,
            Self::Gray32 => 2,
            Self::Color256 => 3,
            Self::ColorRgb => 4,
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gray8 => write!(f, "8-bit grayscale"),
            Self::Gray16 => write!(f, "16-bit grayscale"),
            Self::Gray32 => write!(f, "32-bit float grayscale"),
            Self::Color256 => write!(f, "8-bit indexed color"),
            Self::ColorRgb => write!(f, "RGB color"),
            Self::Unknown(code) => write!(f, "unknown type {code}"),
        }
    }
}

/// Pixel types the filter can zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    /// 8-bit unsigned grayscale
    Gray8,
    /// 16-bit unsigned grayscale
    Gray16,
    /// 32-bit float grayscale
    Gray32Float,
    /// Packed 32-bit RGB
    ColorRgb,
}

impl PixelType {
    /// All supported pixel types.
    pub const ALL: [PixelType; 4] = [
        PixelType::Gray8,
        PixelType::Gray16,
        PixelType::Gray32Float,
        PixelType::ColorRgb,
    ];

    /// The host tag corresponding to this pixel type.
    pub fn image_type(self) -> ImageType {
        match self {
            Self::Gray8 => ImageType::Gray8,
            Self::Gray16 => ImageType::Gray16,
            Self::Gray32Float => ImageType::Gray32,
            Self::ColorRgb => ImageType::ColorRgb,
        }
    }
}

impl TryFrom<ImageType> for PixelType {
    type Error = Error;

    fn try_from(image_type: ImageType) -> Result<Self> {
        match image_type {
            ImageType::Gray8 => Ok(Self::Gray8),
            ImageType::Gray16 => Ok(Self::Gray16),
            ImageType::Gray32 => Ok(Self::Gray32Float),
            ImageType::ColorRgb => Ok(Self::ColorRgb),
            ImageType::Color256 | ImageType::Unknown(_) => {
                Err(Error::UnsupportedPixelType(image_type))
            }
        }
    }
}
