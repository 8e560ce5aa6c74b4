//! SeetaFace cascade detector backend.

use std::path::Path;
use std::sync::Mutex;

use rustface::{Detector, ImageData};

use crate::error::{Error, Result};

use super::{FaceDetector, FaceRegion};

/// Detection window parameters. The score threshold and pyramid settings
/// follow the SeetaFace frontal model's recommended operating point.
const MIN_FACE_SIZE: u32 = 20;
const SCORE_THRESH: f64 = 2.0;
const PYRAMID_SCALE_FACTOR: f32 = 0.8;
const SLIDE_WINDOW_STEP: u32 = 4;

/// Face detector backed by the pre-trained SeetaFace frontal cascade model.
///
/// The model weights are loaded once, at construction, and are read-only
/// afterwards; construct a single instance at process startup and share it
/// across analyses. The underlying detector keeps per-detection scratch
/// buffers, so calls are serialized on an internal lock while every other
/// pipeline stage stays lock-free.
pub struct SeetaDetector {
    inner: Mutex<Box<dyn Detector>>,
}

impl SeetaDetector {
    /// Load the detection model from disk.
    pub fn from_file<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        let path = model_path
            .as_ref()
            .to_str()
            .ok_or_else(|| Error::ModelLoad("model path is not valid UTF-8".to_string()))?;

        let mut detector =
            rustface::create_detector(path).map_err(|e| Error::ModelLoad(e.to_string()))?;
        detector.set_min_face_size(MIN_FACE_SIZE);
        detector.set_score_thresh(SCORE_THRESH);
        detector.set_pyramid_scale_factor(PYRAMID_SCALE_FACTOR);
        detector.set_slide_window_step(SLIDE_WINDOW_STEP, SLIDE_WINDOW_STEP);

        Ok(Self {
            inner: Mutex::new(detector),
        })
    }
}

impl FaceDetector for SeetaDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Vec<FaceRegion> {
        let image = ImageData::new(gray, width, height);

        let mut detector = match self.inner.lock() {
            Ok(guard) => guard,
            // A poisoned lock means a previous detection panicked; the
            // model weights themselves are untouched, so keep going.
            Err(poisoned) => poisoned.into_inner(),
        };

        detector
            .detect(&image)
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceRegion {
                    x: bbox.x().max(0) as u32,
                    y: bbox.y().max(0) as u32,
                    width: bbox.width(),
                    height: bbox.height(),
                    confidence: face.score() as f32,
                }
            })
            .collect()
    }
}
