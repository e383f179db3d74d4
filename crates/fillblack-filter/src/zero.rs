//! Per-type zeroing routines
//!
//! [`zero_pixels`] is the single dispatch point over [`PixelsMut`]. Each
//! routine writes the zero value of its element type to every pixel of the
//! borrowed buffer; empty buffers are left as they are.

use fillblack_core::{PixelsMut, color};

/// Set every 8-bit pixel to 0.
pub fn zero_gray8(pixels: &mut [u8]) {
    pixels.fill(0);
}

/// Set every 16-bit pixel to 0.
pub fn zero_gray16(pixels: &mut [u16]) {
    pixels.fill(0);
}

/// Set every float pixel to 0.0.
pub fn zero_gray32(pixels: &mut [f32]) {
    pixels.fill(0.0);
}

/// Zero packed RGB pixels channel by channel.
///
/// The pixels are split into R, G and B planes, each plane is zeroed as
/// 8-bit gray, and the planes are packed back. Repacking keeps only the
/// three color bytes, so every pixel ends up `0x000000` whatever its top
/// byte held.
pub fn zero_rgb(pixels: &mut [u32]) {
    let (mut r, mut g, mut b) = color::split_planes(pixels);
    zero_gray8(&mut r);
    zero_gray8(&mut g);
    zero_gray8(&mut b);
    color::merge_planes(pixels, &r, &g, &b);
}

/// Zero a slice of any supported pixel type.
pub fn zero_pixels(pixels: PixelsMut<'_>) {
    match pixels {
        PixelsMut::Gray8(p) => zero_gray8(p),
        PixelsMut::Gray16(p) => zero_gray16(p),
        PixelsMut::Gray32Float(p) => zero_gray32(p),
        PixelsMut::ColorRgb(p) => zero_rgb(p),
    }
}
