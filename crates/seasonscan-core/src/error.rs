//! Engine error taxonomy.
//!
//! Every failure the engine can report to a caller is one of these variants.
//! All of them are terminal for the request: the engine never retries, and it
//! never substitutes a default result for a failed analysis.

use thiserror::Error;

/// Failures reported by the analysis engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The input bytes could not be decoded as a supported image format.
    #[error("image could not be decoded: {0}")]
    InvalidImage(String),

    /// The detector found no face in the image.
    #[error("no face detected in the image")]
    NoFaceDetected,

    /// A face was found but it covers too little of the image for the
    /// skin sampling to be trustworthy.
    #[error("detected face is too small for reliable analysis")]
    FaceTooSmall,

    /// The skin mask selected too few pixels in both analysis zones.
    #[error("insufficient skin-colored pixels in both analysis zones")]
    InsufficientSkinSignal,

    /// The face detection model could not be loaded.
    #[error("failed to load detection model: {0}")]
    ModelLoad(String),

    /// An internal invariant was violated. This indicates a defect in the
    /// engine, not a problem with the input.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl Error {
    /// Stable machine-readable tag for the error record returned to callers.
    pub fn error_type(&self) -> &'static str {
        match self {
            Error::InvalidImage(_) => "INVALID_IMAGE",
            Error::NoFaceDetected => "NO_FACE_DETECTED",
            Error::FaceTooSmall => "FACE_TOO_SMALL",
            Error::InsufficientSkinSignal => "INSUFFICIENT_SKIN_SIGNAL",
            Error::ModelLoad(_) => "MODEL_LOAD_FAILED",
            Error::Internal(_) => "INTERNAL",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_tags() {
        assert_eq!(
            Error::InvalidImage("bad".into()).error_type(),
            "INVALID_IMAGE"
        );
        assert_eq!(Error::NoFaceDetected.error_type(), "NO_FACE_DETECTED");
        assert_eq!(Error::FaceTooSmall.error_type(), "FACE_TOO_SMALL");
        assert_eq!(
            Error::InsufficientSkinSignal.error_type(),
            "INSUFFICIENT_SKIN_SIGNAL"
        );
    }
}
