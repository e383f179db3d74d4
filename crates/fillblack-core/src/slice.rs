//! Slice storage and mutable pixel views
//!
//! A [`SliceData`] owns the pixels of one slice in the storage kind the
//! host uses for its type (bytes, shorts, floats or packed ints).
//! [`PixelsMut`] is the borrowed, typed view handed to pixel routines.
//!
//! # Memory layout
//!
//! Pixels are stored row-major with no padding. The pixel at (x, y) is at
//! index `y * width + x`.

use crate::error::{Error, Result};
use crate::{ImageType, PixelType};

/// Owned pixel storage for one slice.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceData {
    /// 8-bit samples (gray or indexed color)
    Bytes(Vec<u8>),
    /// 16-bit samples
    Shorts(Vec<u16>),
    /// 32-bit float samples
    Floats(Vec<f32>),
    /// Packed 32-bit RGB
    Ints(Vec<u32>),
}

impl SliceData {
    /// Create zero-filled storage of `len` elements for an image type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPixelType`] for [`ImageType::Unknown`],
    /// whose storage kind is not known.
    pub fn zeroed(image_type: ImageType, len: usize) -> Result<Self> {
        Ok(match image_type {
            ImageType::Gray8 | ImageType::Color256 => Self::Bytes(vec![0; len]),
            ImageType::Gray16 => Self::Shorts(vec![0; len]),
            ImageType::Gray32 => Self::Floats(vec![0.0; len]),
            ImageType::ColorRgb => Self::Ints(vec![0; len]),
            ImageType::Unknown(_) => return Err(Error::UnsupportedPixelType(image_type)),
        })
    }

    /// Number of pixels held.
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(v) => v.len(),
            Self::Shorts(v) => v.len(),
            Self::Floats(v) => v.len(),
            Self::Ints(v) => v.len(),
        }
    }

    /// Check if the slice holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the storage kind, for diagnostics.
    pub fn storage_name(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "byte",
            Self::Shorts(_) => "short",
            Self::Floats(_) => "float",
            Self::Ints(_) => "int",
        }
    }

    /// Check whether this storage kind is what `image_type` uses.
    ///
    /// Unknown types accept any storage.
    pub fn matches(&self, image_type: ImageType) -> bool {
        matches!(
            (image_type, self),
            (ImageType::Gray8 | ImageType::Color256, Self::Bytes(_))
                | (ImageType::Gray16, Self::Shorts(_))
                | (ImageType::Gray32, Self::Floats(_))
                | (ImageType::ColorRgb, Self::Ints(_))
                | (ImageType::Unknown(_), _)
        )
    }

    /// Check whether every pixel is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Bytes(v) => v.iter().all(|&p| p == 0),
            Self::Shorts(v) => v.iter().all(|&p| p == 0),
            Self::Floats(v) => v.iter().all(|&p| p == 0.0),
            Self::Ints(v) => v.iter().all(|&p| p == 0),
        }
    }

    /// Borrow the storage as a typed mutable view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageMismatch`] if the storage kind does not
    /// match `pixel_type`.
    pub fn pixels_mut(&mut self, pixel_type: PixelType) -> Result<PixelsMut<'_>> {
        PixelsMut::new(pixel_type, self)
    }
}

/// Borrowed mutable view over one slice's pixels, tagged by pixel type.
#[derive(Debug)]
pub enum PixelsMut<'a> {
    /// 8-bit grayscale
    Gray8(&'a mut [u8]),
    /// 16-bit grayscale
    Gray16(&'a mut [u16]),
    /// 32-bit float grayscale
    Gray32Float(&'a mut [f32]),
    /// Packed RGB
    ColorRgb(&'a mut [u32]),
}

impl<'a> PixelsMut<'a> {
    /// Build a typed view over `data` for the declared pixel type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageMismatch`] if the storage kind does not
    /// match `pixel_type`.
    pub fn new(pixel_type: PixelType, data: &'a mut SliceData) -> Result<Self> {
        match (pixel_type, data) {
            (PixelType::Gray8, SliceData::Bytes(v)) => Ok(Self::Gray8(v)),
            (PixelType::Gray16, SliceData::Shorts(v)) => Ok(Self::Gray16(v)),
            (PixelType::Gray32Float, SliceData::Floats(v)) => Ok(Self::Gray32Float(v)),
            (PixelType::ColorRgb, SliceData::Ints(v)) => Ok(Self::ColorRgb(v)),
            (pixel_type, data) => Err(Error::StorageMismatch {
                image_type: pixel_type.image_type(),
                storage: data.storage_name(),
            }),
        }
    }

    /// Number of pixels in the view.
    pub fn len(&self) -> usize {
        match self {
            Self::Gray8(p) => p.len(),
            Self::Gray16(p) => p.len(),
            Self::Gray32Float(p) => p.len(),
            Self::ColorRgb(p) => p.len(),
        }
    }

    /// Check if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
