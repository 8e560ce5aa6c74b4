//! Season classification.
//!
//! The decision is an ordered, total tree over the three tone features:
//! warmth picks the tone, brightness picks the lineage, contrast picks the
//! sub-variant. The tree is written out as a declarative table indexed by
//! the three boolean outcomes, so the thresholds live in one place and every
//! feature triple maps to exactly one of the eight seasons; there is no
//! "unclassified" branch.

mod levels;
mod palette;
mod season;

pub use levels::{brightness_level, contrast_level, warmth_level};
pub use palette::{best_colors, worst_colors, PaletteEntry};
pub use season::{Season, SeasonFamily};

use crate::config::ThresholdTable;
use crate::pipeline::ToneFeatures;

/// One row of the decision table: the three boolean outcomes and the season
/// they select.
struct DecisionRow {
    warm: bool,
    bright: bool,
    vivid: bool,
    season: Season,
}

const fn row(warm: bool, bright: bool, vivid: bool, season: Season) -> DecisionRow {
    DecisionRow {
        warm,
        bright,
        vivid,
        season,
    }
}

/// The full eight-way decision table, indexed by
/// `warm << 2 | bright << 1 | vivid`.
///
/// Warm + bright is the spring lineage, warm + deep autumn, cool + bright
/// summer, cool + deep winter; the contrast outcome picks the vivid variant
/// (bright/deep) over the soft one (light/mute).
const DECISION_TABLE: [DecisionRow; 8] = [
    row(false, false, false, Season::WinterCoolMute),
    row(false, false, true, Season::WinterCoolDeep),
    row(false, true, false, Season::SummerCoolLight),
    row(false, true, true, Season::SummerCoolBright),
    row(true, false, false, Season::AutumnWarmMute),
    row(true, false, true, Season::AutumnWarmDeep),
    row(true, true, false, Season::SpringWarmLight),
    row(true, true, true, Season::SpringWarmBright),
];

/// Outcome of the classification: the season plus the level names that
/// accompany it in the result.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub season: Season,
    pub brightness_level: &'static str,
    pub warmth_level: &'static str,
    pub contrast_level: &'static str,
}

impl Classification {
    /// Descriptive tags reported alongside the season, ending with the
    /// season's palette guidance.
    pub fn characteristics(&self) -> Vec<String> {
        vec![
            format!("{} skin tone", self.brightness_level),
            format!("{} undertone", self.warmth_level),
            format!("{} contrast", self.contrast_level),
            self.season.summary().to_string(),
        ]
    }
}

/// Classify a face-level feature triple.
///
/// Every comparison is a strict `>` against the canonical cuts; a feature
/// exactly at a cut falls on the cool / deep / muted side.
pub fn classify(features: &ToneFeatures, table: &ThresholdTable) -> Classification {
    let warm = features.warmth > table.warmth_neutral;
    let bright = features.brightness > table.brightness_bright;
    let vivid = features.contrast > table.contrast_vivid;

    let index = (usize::from(warm) << 2) | (usize::from(bright) << 1) | usize::from(vivid);
    let decision = &DECISION_TABLE[index];
    debug_assert!(
        decision.warm == warm && decision.bright == bright && decision.vivid == vivid,
        "decision table rows out of order"
    );

    Classification {
        season: decision.season,
        brightness_level: levels::brightness_level(features.brightness, table),
        warmth_level: levels::warmth_level(features.warmth, table),
        contrast_level: levels::contrast_level(features.contrast, table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(brightness: f32, warmth: f32, contrast: f32) -> ToneFeatures {
        ToneFeatures {
            brightness,
            warmth,
            contrast,
        }
    }

    #[test]
    fn test_table_index_matches_row_flags() {
        for (index, row) in DECISION_TABLE.iter().enumerate() {
            let expected =
                (usize::from(row.warm) << 2) | (usize::from(row.bright) << 1) | usize::from(row.vivid);
            assert_eq!(index, expected, "row for {:?} misplaced", row.season);
        }
    }

    #[test]
    fn test_table_covers_all_eight_seasons() {
        let mut seen: Vec<&str> = DECISION_TABLE.iter().map(|r| r.season.label()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_every_feature_triple_classifies() {
        // Sweep a grid across and beyond the threshold neighborhood; every
        // triple must land on exactly one season.
        let table = ThresholdTable::default();
        for brightness in [0.0, 100.0, 160.0, 160.1, 200.0, 255.0] {
            for warmth in [0.0, 128.0, 140.0, 140.1, 146.0, 255.0] {
                for contrast in [0.0, 128.0, 142.5, 142.6, 146.0, 255.0] {
                    let c = classify(&features(brightness, warmth, contrast), &table);
                    assert!(Season::ALL.contains(&c.season));
                }
            }
        }
    }

    #[test]
    fn test_decision_table_rows() {
        // Table-driven check of all eight combinations, using values
        // comfortably on each side of the cuts.
        let table = ThresholdTable::default();
        let cases = [
            (150.0, 130.0, 130.0, Season::WinterCoolMute),
            (150.0, 130.0, 150.0, Season::WinterCoolDeep),
            (170.0, 130.0, 130.0, Season::SummerCoolLight),
            (170.0, 130.0, 150.0, Season::SummerCoolBright),
            (150.0, 150.0, 130.0, Season::AutumnWarmMute),
            (150.0, 150.0, 150.0, Season::AutumnWarmDeep),
            (170.0, 150.0, 130.0, Season::SpringWarmLight),
            (170.0, 150.0, 150.0, Season::SpringWarmBright),
        ];

        for (brightness, warmth, contrast, expected) in cases {
            let c = classify(&features(brightness, warmth, contrast), &table);
            assert_eq!(
                c.season, expected,
                "brightness={} warmth={} contrast={}",
                brightness, warmth, contrast
            );
        }
    }

    #[test]
    fn test_boundary_values_fall_on_the_low_side() {
        let table = ThresholdTable::default();

        // Exactly at every cut: cool tone, deep lineage, muted variant.
        let c = classify(&features(160.0, 140.0, 142.5), &table);
        assert_eq!(c.season, Season::WinterCoolMute);

        // Repeated evaluation of the same boundary input is stable.
        for _ in 0..10 {
            let again = classify(&features(160.0, 140.0, 142.5), &table);
            assert_eq!(again.season, c.season);
        }
    }

    #[test]
    fn test_bright_warm_vivid_scenario() {
        // Face aggregate L=170, a=b=146: warm, bright lineage, vivid.
        let c = classify(&features(170.0, 146.0, 146.0), &ThresholdTable::default());
        assert_eq!(c.season, Season::SpringWarmBright);
        assert_eq!(c.brightness_level, "very bright");
        assert_eq!(c.warmth_level, "very warm");
        assert_eq!(c.contrast_level, "very vivid");
    }

    #[test]
    fn test_dim_cool_muted_scenario() {
        // L=155 is below the bright cut, warmth 138 below neutral,
        // contrast 135 below the vivid cut: winter's muted variant.
        let c = classify(&features(155.0, 138.0, 135.0), &ThresholdTable::default());
        assert_eq!(c.season, Season::WinterCoolMute);
    }

    #[test]
    fn test_characteristics_shape() {
        let c = classify(&features(170.0, 146.0, 146.0), &ThresholdTable::default());
        let tags = c.characteristics();

        assert_eq!(tags.len(), 4);
        assert_eq!(tags[0], "very bright skin tone");
        assert_eq!(tags[3], Season::SpringWarmBright.summary());
    }
}
