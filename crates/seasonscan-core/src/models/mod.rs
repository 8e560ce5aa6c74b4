//! Result contract.
//!
//! The structured record a successful analysis returns to the caller. Field
//! names follow the wire contract consumed by UI layers, so several structs
//! carry the same level names in more than one place on purpose. Everything
//! serializes to JSON; nothing here is retained by the engine after the
//! record is handed back.

use serde::Serialize;

use crate::classify::{self, Classification};
use crate::config::ThresholdTable;
use crate::detect::FaceRegion;
use crate::pipeline::{LabAggregate, ToneFeatures, ZoneAggregate, ZoneRegion};

/// A named color recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteColor {
    pub name: String,
    pub value: String,
}

impl From<&classify::PaletteEntry> for PaletteColor {
    fn from(entry: &classify::PaletteEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            value: entry.value.to_string(),
        }
    }
}

/// Measured skin tone features plus their level names.
#[derive(Debug, Clone, Serialize)]
pub struct SkinTone {
    pub brightness: f32,
    pub warmth: f32,
    pub contrast: f32,
    pub brightness_level: String,
    pub warmth_level: String,
    pub contrast_level: String,
}

/// Face-level Lab aggregate on the 8-bit Lab scale.
#[derive(Debug, Clone, Serialize)]
pub struct LabValues {
    #[serde(rename = "L")]
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// Level names alone, for callers that only render the buckets.
#[derive(Debug, Clone, Serialize)]
pub struct ToneAnalysis {
    pub brightness_level: String,
    pub warmth_level: String,
    pub contrast_level: String,
}

/// Where one zone was sampled and what it measured.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneDiagnostics {
    pub zone: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub pixels: usize,
    pub mask_coverage: f32,
    pub samples: usize,
    pub reliable: bool,
    pub mean_l: f32,
    pub mean_a: f32,
    pub mean_b: f32,
}

impl ZoneDiagnostics {
    pub fn new(region: &ZoneRegion, aggregate: &ZoneAggregate) -> Self {
        Self {
            zone: region.kind.as_str().to_string(),
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            pixels: region.pixel_count(),
            mask_coverage: aggregate.mask_coverage,
            samples: aggregate.samples,
            reliable: aggregate.reliable,
            mean_l: aggregate.l,
            mean_a: aggregate.a,
            mean_b: aggregate.b,
        }
    }
}

/// Intermediate values exposed for diagnostic transparency. Callers render
/// or log these; they are not meant for re-deriving the decision.
#[derive(Debug, Clone, Serialize)]
pub struct DebugInfo {
    pub face: FaceRegion,
    pub zones: Vec<ZoneDiagnostics>,
    pub thresholds: ThresholdTable,
}

/// The complete result of one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub season: String,
    pub characteristics: Vec<String>,
    pub skin_tone: SkinTone,
    pub lab_values: LabValues,
    pub best_colors: Vec<PaletteColor>,
    pub worst_colors: Vec<PaletteColor>,
    pub tone_analysis: ToneAnalysis,
    pub debug_info: DebugInfo,
}

impl AnalysisResult {
    /// Assemble the result record from the pipeline's terminal values.
    pub fn assemble(
        face: FaceRegion,
        zones: Vec<ZoneDiagnostics>,
        lab: LabAggregate,
        features: ToneFeatures,
        classification: Classification,
        thresholds: &ThresholdTable,
    ) -> Self {
        Self {
            season: classification.season.label().to_string(),
            characteristics: classification.characteristics(),
            skin_tone: SkinTone {
                brightness: features.brightness,
                warmth: features.warmth,
                contrast: features.contrast,
                brightness_level: classification.brightness_level.to_string(),
                warmth_level: classification.warmth_level.to_string(),
                contrast_level: classification.contrast_level.to_string(),
            },
            lab_values: LabValues {
                l: lab.l,
                a: lab.a,
                b: lab.b,
            },
            best_colors: classify::best_colors(classification.season)
                .iter()
                .map(PaletteColor::from)
                .collect(),
            worst_colors: classify::worst_colors(classification.season)
                .iter()
                .map(PaletteColor::from)
                .collect(),
            tone_analysis: ToneAnalysis {
                brightness_level: classification.brightness_level.to_string(),
                warmth_level: classification.warmth_level.to_string(),
                contrast_level: classification.contrast_level.to_string(),
            },
            debug_info: DebugInfo {
                face,
                zones,
                thresholds: thresholds.clone(),
            },
        }
    }
}
