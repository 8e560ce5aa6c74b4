//! Season analysis pipeline.
//!
//! A strict linear flow: decode, locate the face, cut the two zones,
//! normalize lighting, mask skin pixels, reduce to tone features, classify.
//! No stage re-enters an earlier one, a failure anywhere is terminal for the
//! request, and every buffer is dropped when the result record is returned.
//!
//! This module is organized into submodules:
//! - `zones`: Proportional T-zone / U-zone geometry
//! - `lighting`: Adaptive lightness normalization (CLAHE)
//! - `skin_mask`: Skin-envelope pixel isolation
//! - `features`: IQR-trimmed channel means and the feature scalars

mod features;
mod lighting;
mod skin_mask;
mod zones;

pub use features::{LabAggregate, ToneFeatures, ZoneAggregate};
pub use lighting::normalize_lightness;
pub use skin_mask::SkinMask;
pub use zones::{ZoneKind, ZoneRegion};

use crate::classify;
use crate::color;
use crate::config::AnalysisConfig;
use crate::decoders;
use crate::detect::{self, FaceDetector};
use crate::error::Result;
use crate::models::{AnalysisResult, ZoneDiagnostics};

/// Run one complete analysis over encoded image bytes.
///
/// The detector is injected so a single model loaded at process startup can
/// serve any number of concurrent analyses, and so tests can substitute a
/// fake. Each call owns all of its intermediate state; two calls with
/// byte-identical input produce identical results.
pub fn analyze(
    bytes: &[u8],
    detector: &dyn FaceDetector,
    config: &AnalysisConfig,
) -> Result<AnalysisResult> {
    let image = decoders::decode_image(bytes, config.max_dimension)?;
    let face = detect::locate_primary_face(&image, detector, config)?;
    let regions = zones::segment(&face, &config.zones)?;

    let mut aggregates = Vec::with_capacity(regions.len());
    let mut diagnostics = Vec::with_capacity(regions.len());

    for region in &regions {
        let rgb = zones::extract_rgb(&image, region);
        let lab = color::rgb_buffer_to_lab8(&rgb);
        let (mut l_plane, a_plane, b_plane) = color::split_lab_planes(&lab);

        lighting::normalize_lightness(
            &mut l_plane,
            region.width as usize,
            region.height as usize,
            &config.lighting,
        );

        let mask = skin_mask::extract(&l_plane, &a_plane, &b_plane, &config.skin);
        let aggregate =
            features::zone_aggregate(region.kind, &l_plane, &a_plane, &b_plane, &mask, config);

        diagnostics.push(ZoneDiagnostics::new(region, &aggregate));
        aggregates.push(aggregate);
    }

    let (lab, tone) = features::combine(&aggregates[0], &aggregates[1], config)?;
    let classification = classify::classify(&tone, &config.thresholds);

    Ok(AnalysisResult::assemble(
        face,
        diagnostics,
        lab,
        tone,
        classification,
        &config.thresholds,
    ))
}
