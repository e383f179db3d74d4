//! Synthetic image stacks for tests
//!
//! Pixel values are derived from position and slice number so that every
//! slice starts out non-zero and distinguishable from its neighbours.

use fillblack_core::{ImageStack, ImageType, SliceData, color};

/// Build one slice of ramp data for `image_type`.
///
/// `slice` is the 1-based slice number mixed into each value.
///
/// # Panics
///
/// Panics for [`ImageType::Unknown`].
pub fn ramp_slice(image_type: ImageType, len: usize, slice: usize) -> SliceData {
    let value = |i: usize| (i * 7 + slice * 13) % 250 + 1;
    match image_type {
        ImageType::Gray8 | ImageType::Color256 => {
            SliceData::Bytes((0..len).map(|i| value(i) as u8).collect())
        }
        ImageType::Gray16 => SliceData::Shorts((0..len).map(|i| (value(i) * 257) as u16).collect()),
        ImageType::Gray32 => SliceData::Floats((0..len).map(|i| value(i) as f32 * 0.5).collect()),
        ImageType::ColorRgb => SliceData::Ints(
            (0..len)
                .map(|i| {
                    let v = value(i) as u8;
                    color::compose_rgb(v, v.wrapping_add(40), 255 - v)
                })
                .collect(),
        ),
        ImageType::Unknown(code) => panic!("no ramp storage for unknown image type {code}"),
    }
}

/// Build a `width` x `height` stack of `depth` ramp slices.
///
/// # Panics
///
/// Panics if the stack cannot be built (unknown type, zero depth).
pub fn ramp_stack(width: u32, height: u32, image_type: ImageType, depth: usize) -> ImageStack {
    let len = width as usize * height as usize;
    let slices = (1..=depth).map(|s| ramp_slice(image_type, len, s)).collect();
    ImageStack::new(width, height, image_type, slices).expect("ramp stack")
}

/// Build a single-slice RGB stack holding exactly `pixels`, one row high.
pub fn rgb_stack(pixels: &[u32]) -> ImageStack {
    ImageStack::new(
        pixels.len() as u32,
        1,
        ImageType::ColorRgb,
        vec![SliceData::Ints(pixels.to_vec())],
    )
    .expect("rgb stack")
}
