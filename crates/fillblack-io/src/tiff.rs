//! TIFF stack support
//!
//! Each TIFF page holds one slice. All pages of a stack must share
//! dimensions and color type.

use crate::{IoError, IoResult};
use fillblack_core::{ImageStack, ImageType, SliceData, color};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::TiffEncoder;
use tiff::encoder::colortype::{Gray8, Gray16, Gray32Float, RGB8};

/// Read every page of a TIFF file into an image stack.
pub fn read_stack<R: Read + Seek>(reader: R) -> IoResult<ImageStack> {
    let mut decoder = Decoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("TIFF decode error: {}", e)))?;

    let (width, height, image_type, first) = decode_page(&mut decoder)?;
    let mut slices = vec![first];

    while decoder.more_images() {
        decoder
            .next_image()
            .map_err(|e| IoError::DecodeError(format!("TIFF page navigation error: {}", e)))?;
        let (w, h, t, slice) = decode_page(&mut decoder)?;
        if (w, h, t) != (width, height, image_type) {
            return Err(IoError::InvalidData(format!(
                "page {} is {}x{} {}, expected {}x{} {}",
                slices.len() + 1,
                w,
                h,
                t,
                width,
                height,
                image_type
            )));
        }
        slices.push(slice);
    }

    log::debug!(
        "read {}x{} {} stack with {} slice(s)",
        width,
        height,
        image_type,
        slices.len()
    );
    Ok(ImageStack::new(width, height, image_type, slices)?)
}

/// Read a TIFF stack from a file path.
pub fn read_stack_file<P: AsRef<Path>>(path: P) -> IoResult<ImageStack> {
    let file = File::open(path)?;
    read_stack(BufReader::new(file))
}

fn decode_page<R: Read + Seek>(
    decoder: &mut Decoder<R>,
) -> IoResult<(u32, u32, ImageType, SliceData)> {
    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("Failed to get TIFF dimensions: {}", e)))?;
    let color_type = decoder
        .colortype()
        .map_err(|e| IoError::DecodeError(format!("Failed to get TIFF color type: {}", e)))?;

    let image_data = decoder
        .read_image()
        .map_err(|e| IoError::DecodeError(format!("Failed to read TIFF image data: {}", e)))?;

    let (image_type, slice) = match (color_type, image_data) {
        (ColorType::Gray(8), DecodingResult::U8(data)) => (ImageType::Gray8, SliceData::Bytes(data)),
        (ColorType::Gray(16), DecodingResult::U16(data)) => {
            (ImageType::Gray16, SliceData::Shorts(data))
        }
        (ColorType::Gray(32), DecodingResult::F32(data)) => {
            (ImageType::Gray32, SliceData::Floats(data))
        }
        (ColorType::RGB(8), DecodingResult::U8(data)) => {
            let packed = data
                .chunks_exact(3)
                .map(|px| color::compose_rgb(px[0], px[1], px[2]))
                .collect();
            (ImageType::ColorRgb, SliceData::Ints(packed))
        }
        (color_type, _) => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported TIFF color type: {:?}",
                color_type
            )));
        }
    };

    Ok((width, height, image_type, slice))
}

/// Write every slice of `image` as one TIFF page.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for image types without a TIFF
/// page layout (indexed color, unknown).
pub fn write_stack<W: Write + Seek>(image: &ImageStack, writer: W) -> IoResult<()> {
    let mut encoder = TiffEncoder::new(writer)
        .map_err(|e| IoError::EncodeError(format!("TIFF encoder error: {}", e)))?;

    let (width, height) = (image.width(), image.height());
    for slice in image.slices() {
        let written = match (image.image_type(), slice) {
            (ImageType::Gray8, SliceData::Bytes(data)) => {
                encoder.write_image::<Gray8>(width, height, data)
            }
            (ImageType::Gray16, SliceData::Shorts(data)) => {
                encoder.write_image::<Gray16>(width, height, data)
            }
            (ImageType::Gray32, SliceData::Floats(data)) => {
                encoder.write_image::<Gray32Float>(width, height, data)
            }
            (ImageType::ColorRgb, SliceData::Ints(data)) => {
                let rgb: Vec<u8> = data
                    .iter()
                    .flat_map(|&p| <[u8; 3]>::from(color::extract_rgb(p)))
                    .collect();
                encoder.write_image::<RGB8>(width, height, &rgb)
            }
            (image_type, _) => {
                return Err(IoError::UnsupportedFormat(format!(
                    "cannot write {} image as TIFF",
                    image_type
                )));
            }
        };
        written.map_err(|e| IoError::EncodeError(format!("TIFF write error: {}", e)))?;
    }

    Ok(())
}

/// Write a TIFF stack to a file path.
pub fn write_stack_file<P: AsRef<Path>>(image: &ImageStack, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_stack(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}
