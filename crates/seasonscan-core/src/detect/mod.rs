//! Face localization.
//!
//! The detector behind [`FaceDetector`] is an injected dependency: the
//! production backend wraps a pre-trained cascade-style model loaded once at
//! startup, while tests substitute a fake that returns fixed regions. The
//! locator itself only selects and validates the primary face.

mod seeta;

pub use seeta::SeetaDetector;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::decoders::DecodedImage;
use crate::error::{Error, Result};

/// Bounding box and confidence for one detected face, in image coordinates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub confidence: f32,
}

impl FaceRegion {
    /// Pixel area of the bounding box.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A face detector over 8-bit grayscale pixel data.
///
/// Implementations must be pure with respect to the image: the same pixels
/// always produce the same detections.
pub trait FaceDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceRegion>;
}

/// Locate the primary face in a decoded image.
///
/// When the detector reports several faces, the largest one wins (a portrait
/// subject dominates the frame). Zero detections are a failure, never a
/// guess; so is a face covering less than the configured fraction of the
/// image. The returned region is clamped to the image bounds.
pub fn locate_primary_face(
    image: &DecodedImage,
    detector: &dyn FaceDetector,
    config: &AnalysisConfig,
) -> Result<FaceRegion> {
    let gray = image.to_gray();
    let faces = detector.detect(&gray, image.width, image.height);

    let largest = faces
        .into_iter()
        .max_by_key(FaceRegion::area)
        .ok_or(Error::NoFaceDetected)?;

    let face = clamp_to_image(largest, image.width, image.height);

    let min_area = image.pixel_count() as f64 * config.min_face_area_fraction as f64;
    if (face.area() as f64) < min_area {
        return Err(Error::FaceTooSmall);
    }

    Ok(face)
}

/// Clip a detection to the image rectangle. Cascade detectors may report
/// boxes that extend past the frame edge.
fn clamp_to_image(face: FaceRegion, width: u32, height: u32) -> FaceRegion {
    let x = face.x.min(width.saturating_sub(1));
    let y = face.y.min(height.saturating_sub(1));
    FaceRegion {
        x,
        y,
        width: face.width.min(width - x),
        height: face.height.min(height - y),
        confidence: face.confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector(Vec<FaceRegion>);

    impl FaceDetector for FixedDetector {
        fn detect(&self, _gray: &[u8], _width: u32, _height: u32) -> Vec<FaceRegion> {
            self.0.clone()
        }
    }

    fn test_image(width: u32, height: u32) -> DecodedImage {
        DecodedImage {
            width,
            height,
            data: vec![128; (width * height * 3) as usize],
        }
    }

    fn region(x: u32, y: u32, width: u32, height: u32) -> FaceRegion {
        FaceRegion {
            x,
            y,
            width,
            height,
            confidence: 1.0,
        }
    }

    #[test]
    fn test_no_detection_is_a_failure() {
        let image = test_image(100, 100);
        let detector = FixedDetector(vec![]);
        let result = locate_primary_face(&image, &detector, &AnalysisConfig::default());

        assert!(matches!(result, Err(Error::NoFaceDetected)));
    }

    #[test]
    fn test_largest_face_wins() {
        let image = test_image(200, 200);
        let detector = FixedDetector(vec![region(0, 0, 30, 30), region(50, 50, 90, 90)]);
        let face = locate_primary_face(&image, &detector, &AnalysisConfig::default()).unwrap();

        assert_eq!((face.x, face.y), (50, 50));
        assert_eq!((face.width, face.height), (90, 90));
    }

    #[test]
    fn test_tiny_face_is_rejected() {
        // 5x5 face in a 200x200 image is 0.06% of the area, well under 1%.
        let image = test_image(200, 200);
        let detector = FixedDetector(vec![region(10, 10, 5, 5)]);
        let result = locate_primary_face(&image, &detector, &AnalysisConfig::default());

        assert!(matches!(result, Err(Error::FaceTooSmall)));
    }

    #[test]
    fn test_out_of_bounds_detection_is_clamped() {
        let image = test_image(100, 100);
        let detector = FixedDetector(vec![region(60, 60, 80, 80)]);
        let face = locate_primary_face(&image, &detector, &AnalysisConfig::default()).unwrap();

        assert_eq!(face.x + face.width, 100);
        assert_eq!(face.y + face.height, 100);
    }
}
