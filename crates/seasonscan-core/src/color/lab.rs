//! Lab (CIE L*a*b*) color space conversions and the 8-bit Lab encoding.
//!
//! Skin measurement happens in Lab because it separates lightness from the
//! two chroma axes far better than device RGB. Pixels arrive as 8-bit sRGB,
//! pass through linear light and XYZ, and end up on an 8-bit-equivalent Lab
//! scale: L mapped from 0-100 onto 0-255, a and b shifted so 128 is neutral.
//! All skin-envelope and classifier constants are expressed on that scale.

use rayon::prelude::*;

/// Lab color representation (CIE L*a*b*)
/// - L: 0.0-100.0 (lightness)
/// - a: approximately -128 to +128 (green-red axis)
/// - b: approximately -128 to +128 (blue-yellow axis)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// D65 standard illuminant reference white point
const D65_X: f32 = 0.95047;
const D65_Y: f32 = 1.00000;
const D65_Z: f32 = 1.08883;

/// sRGB to XYZ matrix (D65)
const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.119_192, 0.9503041],
];

/// XYZ to sRGB matrix (D65)
const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.969_266, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// sRGB transfer function: encoded 0.0-1.0 to linear light
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse sRGB transfer function: linear light to encoded 0.0-1.0
#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// LAB f(t) function
#[inline]
fn lab_f(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;
    const DELTA_CUBED: f32 = DELTA * DELTA * DELTA; // ~0.008856

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// LAB f^-1(t) inverse function
#[inline]
fn lab_f_inv(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;

    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// Convert an 8-bit sRGB color to CIE Lab (D65 illuminant).
///
/// Output: Lab where L is 0-100, a and b are approximately -128 to +128.
#[inline]
pub fn srgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let r = srgb_to_linear(r as f32 / 255.0);
    let g = srgb_to_linear(g as f32 / 255.0);
    let b = srgb_to_linear(b as f32 / 255.0);

    let m = &SRGB_TO_XYZ;
    let x = m[0][0] * r + m[0][1] * g + m[0][2] * b;
    let y = m[1][0] * r + m[1][1] * g + m[1][2] * b;
    let z = m[2][0] * r + m[2][1] * g + m[2][2] * b;

    // Normalize by reference white
    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIE Lab back to an 8-bit sRGB color (D65 illuminant).
///
/// Out-of-gamut values clamp to the valid 8-bit range.
#[inline]
pub fn lab_to_srgb(lab: Lab) -> (u8, u8, u8) {
    let Lab { l, a, b } = lab;

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = D65_X * lab_f_inv(fx);
    let y = D65_Y * lab_f_inv(fy);
    let z = D65_Z * lab_f_inv(fz);

    let m = &XYZ_TO_SRGB;
    let r = m[0][0] * x + m[0][1] * y + m[0][2] * z;
    let g = m[1][0] * x + m[1][1] * y + m[1][2] * z;
    let b = m[2][0] * x + m[2][1] * y + m[2][2] * z;

    let quantize = |c: f32| (linear_to_srgb(c.max(0.0)) * 255.0).round().clamp(0.0, 255.0) as u8;
    (quantize(r), quantize(g), quantize(b))
}

/// Encode a Lab value onto the 8-bit Lab scale: L scaled from 0-100 to
/// 0-255, a and b shifted so 128 reads as neutral.
#[inline]
pub fn encode_lab8(lab: Lab) -> [u8; 3] {
    [
        (lab.l * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8,
        (lab.a + 128.0).round().clamp(0.0, 255.0) as u8,
        (lab.b + 128.0).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Decode an 8-bit Lab triple back to CIE Lab ranges.
#[inline]
pub fn decode_lab8(lab8: [u8; 3]) -> Lab {
    Lab {
        l: lab8[0] as f32 * 100.0 / 255.0,
        a: lab8[1] as f32 - 128.0,
        b: lab8[2] as f32 - 128.0,
    }
}

/// Convert an 8-bit sRGB color directly to the 8-bit Lab encoding.
#[inline]
pub fn srgb_to_lab8(r: u8, g: u8, b: u8) -> [u8; 3] {
    encode_lab8(srgb_to_lab(r, g, b))
}

/// Convert an 8-bit Lab triple back to 8-bit sRGB.
#[inline]
pub fn lab8_to_srgb(lab8: [u8; 3]) -> (u8, u8, u8) {
    lab_to_srgb(decode_lab8(lab8))
}

/// Convert an interleaved RGB8 buffer to 8-bit Lab triples.
///
/// Large buffers convert in parallel.
pub fn rgb_buffer_to_lab8(rgb: &[u8]) -> Vec<[u8; 3]> {
    const PARALLEL_THRESHOLD: usize = 100_000;
    let num_pixels = rgb.len() / 3;

    if num_pixels >= PARALLEL_THRESHOLD {
        rgb.par_chunks_exact(3)
            .map(|px| srgb_to_lab8(px[0], px[1], px[2]))
            .collect()
    } else {
        rgb.chunks_exact(3)
            .map(|px| srgb_to_lab8(px[0], px[1], px[2]))
            .collect()
    }
}

/// Split interleaved Lab triples into separate L, a, b planes.
///
/// The lighting normalizer operates on the L plane alone and the mask and
/// feature stages read channels independently, so planar layout is the
/// working format past this point.
pub fn split_lab_planes(lab: &[[u8; 3]]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut l = Vec::with_capacity(lab.len());
    let mut a = Vec::with_capacity(lab.len());
    let mut b = Vec::with_capacity(lab.len());

    for px in lab {
        l.push(px[0]);
        a.push(px[1]);
        b.push(px[2]);
    }

    (l, a, b)
}
