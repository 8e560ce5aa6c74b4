//! Face zone segmentation.
//!
//! Cuts the two fixed analysis zones out of the face box by proportional
//! geometry. The T-zone covers the forehead and nose; the U-zone covers the
//! cheek band. Both are computed independently from the same face box and
//! may overlap.

use serde::Serialize;

use crate::config::ZoneGeometry;
use crate::decoders::DecodedImage;
use crate::detect::FaceRegion;
use crate::error::{Error, Result};

/// The two sampling zones within a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    TZone,
    UZone,
}

impl ZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::TZone => "t_zone",
            ZoneKind::UZone => "u_zone",
        }
    }
}

/// A zone's rectangle in absolute image coordinates.
///
/// Offsets are recorded so the per-zone diagnostics in the result can point
/// back at the exact pixels that were sampled.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZoneRegion {
    pub kind: ZoneKind,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ZoneRegion {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Cut the T-zone and U-zone out of a face box.
///
/// A degenerate face box (zero width or height) cannot come out of a valid
/// detection, so it is an internal invariant violation rather than a
/// user-facing error.
pub fn segment(face: &FaceRegion, geometry: &ZoneGeometry) -> Result<[ZoneRegion; 2]> {
    if face.width == 0 || face.height == 0 {
        return Err(Error::Internal(format!(
            "degenerate face region {}x{}",
            face.width, face.height
        )));
    }

    let fw = face.width as f32;
    let fh = face.height as f32;

    let t_zone = zone_from_fractions(
        ZoneKind::TZone,
        face,
        geometry.t_left * fw,
        0.0,
        geometry.t_right * fw,
        geometry.t_bottom * fh,
    )?;

    let u_zone = zone_from_fractions(
        ZoneKind::UZone,
        face,
        0.0,
        geometry.u_top * fh,
        fw,
        geometry.u_bottom * fh,
    )?;

    Ok([t_zone, u_zone])
}

fn zone_from_fractions(
    kind: ZoneKind,
    face: &FaceRegion,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
) -> Result<ZoneRegion> {
    let x0 = left as u32;
    let y0 = top as u32;
    let x1 = (right as u32).min(face.width);
    let y1 = (bottom as u32).min(face.height);

    if x1 <= x0 || y1 <= y0 {
        return Err(Error::Internal(format!(
            "empty {} for face {}x{}",
            kind.as_str(),
            face.width,
            face.height
        )));
    }

    Ok(ZoneRegion {
        kind,
        x: face.x + x0,
        y: face.y + y0,
        width: x1 - x0,
        height: y1 - y0,
    })
}

/// Copy a zone's pixels out of the image as an interleaved RGB8 buffer.
pub fn extract_rgb(image: &DecodedImage, region: &ZoneRegion) -> Vec<u8> {
    let mut out = Vec::with_capacity(region.pixel_count() * 3);
    let stride = image.width as usize * 3;

    for row in region.y..region.y + region.height {
        let start = row as usize * stride + region.x as usize * 3;
        let end = start + region.width as usize * 3;
        out.extend_from_slice(&image.data[start..end]);
    }

    out
}
