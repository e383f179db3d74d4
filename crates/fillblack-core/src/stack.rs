//! ImageStack - host-owned image with one or more slices
//!
//! An `ImageStack` is the image handle a filter receives: dimensions, a
//! type tag, and one [`SliceData`] per slice. Slices are addressed with
//! 1-based indices, following the host viewer's convention.
//!
//! # Examples
//!
//! ```
//! use fillblack_core::{ImageStack, ImageType, SliceData};
//!
//! let stack = ImageStack::new(
//!     2,
//!     2,
//!     ImageType::Gray8,
//!     vec![SliceData::Bytes(vec![1, 2, 3, 4]), SliceData::Bytes(vec![5; 4])],
//! )
//! .unwrap();
//! assert_eq!(stack.slice_count(), 2);
//! assert_eq!(stack.current_slice_index(), 1);
//! ```

use crate::error::{Error, Result};
use crate::{ImageType, SliceData};

/// Image stack
///
/// Invariant: every slice holds exactly `width * height` pixels in the
/// storage kind used by `image_type`, and there is at least one slice.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStack {
    width: u32,
    height: u32,
    image_type: ImageType,
    slices: Vec<SliceData>,
    /// 1-based index of the active slice
    current: usize,
    /// Number of redraw requests received
    redraws: usize,
}

impl ImageStack {
    /// Create a stack from existing slice data.
    ///
    /// Zero width or height is allowed; such slices are empty.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyStack`] if `slices` is empty
    /// - [`Error::InvalidDimension`] if `width * height` overflows `usize`
    /// - [`Error::BufferLengthMismatch`] if a slice has the wrong length
    /// - [`Error::StorageMismatch`] if a slice's storage does not fit `image_type`
    pub fn new(
        width: u32,
        height: u32,
        image_type: ImageType,
        slices: Vec<SliceData>,
    ) -> Result<Self> {
        if slices.is_empty() {
            return Err(Error::EmptyStack);
        }
        let expected = Self::pixel_count(width, height)?;
        for (i, slice) in slices.iter().enumerate() {
            if slice.len() != expected {
                return Err(Error::BufferLengthMismatch {
                    slice: i + 1,
                    expected,
                    actual: slice.len(),
                });
            }
            if !slice.matches(image_type) {
                return Err(Error::StorageMismatch {
                    image_type,
                    storage: slice.storage_name(),
                });
            }
        }
        Ok(ImageStack {
            width,
            height,
            image_type,
            slices,
            current: 1,
            redraws: 0,
        })
    }

    /// Create a stack of `depth` zero-filled slices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if `depth` is 0, or
    /// [`Error::UnsupportedPixelType`] for an unknown image type.
    pub fn new_blank(width: u32, height: u32, image_type: ImageType, depth: usize) -> Result<Self> {
        let len = Self::pixel_count(width, height)?;
        let slices = (0..depth)
            .map(|_| SliceData::zeroed(image_type, len))
            .collect::<Result<Vec<_>>>()?;
        Self::new(width, height, image_type, slices)
    }

    fn pixel_count(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image type tag.
    #[inline]
    pub fn image_type(&self) -> ImageType {
        self.image_type
    }

    /// Number of pixels per slice.
    #[inline]
    pub fn pixels_per_slice(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of slices (stack size), always >= 1.
    #[inline]
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// 1-based index of the active slice.
    #[inline]
    pub fn current_slice_index(&self) -> usize {
        self.current
    }

    /// Make slice `index` (1-based) the active slice.
    pub fn set_current_slice(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.current = index;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.slices.len() {
            return Err(Error::SliceOutOfRange {
                index,
                len: self.slices.len(),
            });
        }
        Ok(index - 1)
    }

    /// Get slice `index` (1-based).
    pub fn slice(&self, index: usize) -> Result<&SliceData> {
        let i = self.check_index(index)?;
        Ok(&self.slices[i])
    }

    /// Get mutable access to slice `index` (1-based).
    pub fn slice_mut(&mut self, index: usize) -> Result<&mut SliceData> {
        let i = self.check_index(index)?;
        Ok(&mut self.slices[i])
    }

    /// Get the active slice.
    pub fn current_slice(&self) -> &SliceData {
        &self.slices[self.current - 1]
    }

    /// Get mutable access to the active slice.
    pub fn current_slice_mut(&mut self) -> &mut SliceData {
        &mut self.slices[self.current - 1]
    }

    /// All slices in stack order.
    pub fn slices(&self) -> &[SliceData] {
        &self.slices
    }

    /// Request that the host redraw the image after its pixels changed.
    pub fn update_and_draw(&mut self) {
        self.redraws += 1;
    }

    /// Number of redraw requests received so far.
    #[inline]
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }
}
