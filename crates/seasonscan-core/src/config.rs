//! Analysis configuration.
//!
//! Every tunable constant of the pipeline lives in [`AnalysisConfig`]: input
//! limits, zone geometry, lighting normalization parameters, the skin-color
//! envelope, zone weighting, and the classification threshold table. The
//! defaults are the canonical values; they are defined once here and nowhere
//! else, so the decision cuts and the human-readable level buckets can never
//! drift apart.

use serde::{Deserialize, Serialize};

/// Complete configuration for one analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Longest image edge after decoding; larger inputs are downscaled.
    pub max_dimension: u32,

    /// Minimum face area as a fraction of the image area. Faces smaller
    /// than this are rejected rather than analyzed.
    pub min_face_area_fraction: f32,

    /// Fractional geometry of the two analysis zones within the face box.
    pub zones: ZoneGeometry,

    /// Adaptive lightness normalization parameters.
    pub lighting: LightingParams,

    /// Fixed Lab-range envelope for skin-colored pixels.
    pub skin: SkinEnvelope,

    /// Minimum fraction of a zone's pixels the skin mask must select for
    /// the zone to count as reliable.
    pub min_mask_fraction: f32,

    /// IQR multiplier for outlier trimming of masked samples.
    pub outlier_iqr_factor: f32,

    /// Relative weight of each zone in the face-level aggregate.
    pub zone_weights: ZoneWeights,

    /// Decision cuts and level buckets for the season classifier.
    pub thresholds: ThresholdTable,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_dimension: 800,
            min_face_area_fraction: 0.01,
            zones: ZoneGeometry::default(),
            lighting: LightingParams::default(),
            skin: SkinEnvelope::default(),
            min_mask_fraction: 0.05,
            outlier_iqr_factor: 1.5,
            zone_weights: ZoneWeights::default(),
            thresholds: ThresholdTable::default(),
        }
    }
}

/// Fractional offsets of the T-zone and U-zone within the face box.
///
/// The T-zone is the forehead-and-nose band: the top portion of the face,
/// horizontally centered. The U-zone is the cheek band: a middle horizontal
/// slice spanning the full face width. The zones overlap; both are cut
/// independently from the same face box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneGeometry {
    /// T-zone extends from the top of the face down to this height fraction.
    pub t_bottom: f32,
    /// T-zone left edge as a fraction of face width.
    pub t_left: f32,
    /// T-zone right edge as a fraction of face width.
    pub t_right: f32,
    /// U-zone top edge as a fraction of face height.
    pub u_top: f32,
    /// U-zone bottom edge as a fraction of face height.
    pub u_bottom: f32,
}

impl Default for ZoneGeometry {
    fn default() -> Self {
        Self {
            t_bottom: 0.6,
            t_left: 0.3,
            t_right: 0.7,
            u_top: 0.3,
            u_bottom: 0.7,
        }
    }
}

/// Parameters for adaptive local contrast normalization of the L channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingParams {
    /// Number of tile columns the zone is partitioned into.
    pub tile_cols: u32,
    /// Number of tile rows the zone is partitioned into.
    pub tile_rows: u32,
    /// Relative histogram clip limit bounding per-bin amplification.
    pub clip_limit: f32,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            tile_cols: 8,
            tile_rows: 8,
            clip_limit: 3.0,
        }
    }
}

/// Inclusive skin-color range in the 8-bit Lab encoding.
///
/// L spans the full 0-255 lightness scale; a and b are centered at 128
/// (neutral), so the envelope selects pixels with a mild warm cast at any
/// plausible skin lightness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinEnvelope {
    pub l_min: u8,
    pub l_max: u8,
    pub a_min: u8,
    pub a_max: u8,
    pub b_min: u8,
    pub b_max: u8,
}

impl Default for SkinEnvelope {
    fn default() -> Self {
        Self {
            l_min: 40,
            l_max: 220,
            a_min: 130,
            a_max: 150,
            b_min: 130,
            b_max: 150,
        }
    }
}

/// Zone weights for the face-level aggregate.
///
/// The U-zone (cheeks) is weighted higher than the T-zone because the
/// forehead and nose pick up more specular highlight. When only one zone is
/// reliable its weight renormalizes to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneWeights {
    pub t_zone: f32,
    pub u_zone: f32,
}

impl Default for ZoneWeights {
    fn default() -> Self {
        Self {
            t_zone: 0.4,
            u_zone: 0.6,
        }
    }
}

/// The canonical classification threshold table.
///
/// All comparisons in the classifier are strict `>` against these cuts: a
/// value exactly at a cut always falls on the cool / deep / muted side.
/// The three decision cuts coincide with bucket boundaries of the level
/// tables below, so the human-readable levels and the decision tree can
/// never disagree about which side of a boundary a value is on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdTable {
    /// Warmth above this is a warm undertone; at or below is cool.
    pub warmth_neutral: f32,
    /// Brightness above this selects the bright lineage (spring/summer);
    /// at or below selects the deep lineage (autumn/winter).
    pub brightness_bright: f32,
    /// Contrast above this selects the vivid sub-variant (bright/deep);
    /// at or below selects the soft sub-variant (light/mute).
    pub contrast_vivid: f32,

    /// Brightness level buckets, highest cut first: very bright / bright /
    /// medium, with everything at or below the last cut reading as dark.
    pub brightness_levels: [f32; 3],
    /// Warmth level buckets, highest cut first: very warm / warm / slightly
    /// warm / slightly cool / cool, then very cool.
    pub warmth_levels: [f32; 5],
    /// Contrast level buckets, highest cut first: very vivid / vivid /
    /// medium, then muted.
    pub contrast_levels: [f32; 3],
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            warmth_neutral: 140.0,
            brightness_bright: 160.0,
            contrast_vivid: 142.5,
            brightness_levels: [168.0, 164.0, 160.0],
            warmth_levels: [145.0, 142.5, 140.0, 137.5, 135.0],
            contrast_levels: [145.0, 142.5, 140.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_cuts_align_with_level_buckets() {
        let t = ThresholdTable::default();

        // The decision cuts must coincide with bucket boundaries so the
        // reported level names never contradict the season decision.
        assert_eq!(t.warmth_neutral, t.warmth_levels[2]);
        assert_eq!(t.brightness_bright, t.brightness_levels[2]);
        assert_eq!(t.contrast_vivid, t.contrast_levels[1]);
    }

    #[test]
    fn test_zone_weights_sum_to_one() {
        let w = ZoneWeights::default();
        assert!((w.t_zone + w.u_zone - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_dimension, config.max_dimension);
        assert_eq!(
            back.thresholds.warmth_neutral,
            config.thresholds.warmth_neutral
        );
    }
}
