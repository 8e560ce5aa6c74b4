//! Color space conversions.
//!
//! Provides the sRGB <-> Lab conversion the pipeline measures skin tone in,
//! including the 8-bit Lab encoding the skin envelope and classification
//! thresholds are expressed in.

mod lab;


pub use lab::Lab;

pub use lab::{
    decode_lab8, encode_lab8, lab8_to_srgb, lab_to_srgb, rgb_buffer_to_lab8, srgb_to_lab,
    srgb_to_lab8, split_lab_planes,
};
