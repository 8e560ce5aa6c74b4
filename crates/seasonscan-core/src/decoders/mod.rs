//! Image decoding.
//!
//! Turns raw encoded bytes (JPEG, PNG) into the in-memory RGB8 buffer the
//! pipeline works on. Camera orientation metadata is applied and oversized
//! inputs are downscaled before any analysis, so every later stage sees an
//! upright image of bounded size. Buffers live only for the duration of one
//! analysis; nothing is written to disk.

use std::io::Cursor;

use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::error::{Error, Result};

/// Decoded image data
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGB8 data (3 bytes per pixel, row-major)
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Grayscale rendition of the image for the face detector, using the
    /// BT.601 luma weights.
    pub fn to_gray(&self) -> Vec<u8> {
        self.data
            .chunks_exact(3)
            .map(|px| {
                let y = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
                y.round().clamp(0.0, 255.0) as u8
            })
            .collect()
    }
}

/// Decode encoded image bytes into an RGB8 buffer.
///
/// Applies the EXIF orientation recorded by the camera, then downscales so
/// the longest edge does not exceed `max_dimension`. Bytes that do not
/// decode as a supported image format are rejected with
/// [`Error::InvalidImage`].
pub fn decode_image(bytes: &[u8], max_dimension: u32) -> Result<DecodedImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::InvalidImage(e.to_string()))?;

    let mut decoder = reader
        .into_decoder()
        .map_err(|e| Error::InvalidImage(e.to_string()))?;

    // Orientation metadata is optional; a missing or unreadable tag means
    // the pixels are already upright.
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);

    let mut image =
        DynamicImage::from_decoder(decoder).map_err(|e| Error::InvalidImage(e.to_string()))?;
    image.apply_orientation(orientation);

    if image.width().max(image.height()) > max_dimension {
        image = image.resize(max_dimension, max_dimension, FilterType::Triangle);
    }

    let rgb = image.to_rgb8();
    Ok(DecodedImage {
        width: rgb.width(),
        height: rgb.height(),
        data: rgb.into_raw(),
    })
}
