//! fillblack Core - Image stack model for the fillblack filter
//!
//! This crate provides the data structures a filter works on:
//!
//! - [`ImageType`] - Host type tag of an image
//! - [`PixelType`] - The pixel types a filter can process
//! - [`SliceData`] / [`PixelsMut`] - Owned slice storage and typed mutable views
//! - [`ImageStack`] - Host-owned image with one or more slices

pub mod error;
pub mod image_type;
pub mod slice;
pub mod stack;

pub use error::{Error, Result};
pub use image_type::{ImageType, PixelType};
pub use slice::{PixelsMut, SliceData};
pub use stack::ImageStack;

/// Channel helpers for packed RGB pixels.
///
/// # Pixel format
///
/// Packed pixels are stored as `0x00RRGGBB` (red in bits 16-23, blue in
/// the low byte). The top byte carries no channel data.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a packed RGB pixel. The top byte is left clear.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Split packed pixels into separate R, G and B planes.
    pub fn split_planes(pixels: &[u32]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let mut r = Vec::with_capacity(pixels.len());
        let mut g = Vec::with_capacity(pixels.len());
        let mut b = Vec::with_capacity(pixels.len());
        for &p in pixels {
            r.push(red(p));
            g.push(green(p));
            b.push(blue(p));
        }
        (r, g, b)
    }

    /// Write R, G and B planes back into packed pixels.
    ///
    /// Any bits above the blue, green and red bytes are discarded.
    ///
    /// # Panics
    ///
    /// Panics if a plane is shorter than `pixels`.
    pub fn merge_planes(pixels: &mut [u32], r: &[u8], g: &[u8], b: &[u8]) {
        for (i, p) in pixels.iter_mut().enumerate() {
            *p = compose_rgb(r[i], g[i], b[i]);
        }
    }

}
