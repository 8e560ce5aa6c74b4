//! Human-readable level names for the three tone features.
//!
//! Bucket boundaries come from the canonical threshold table; every cut is a
//! strict `>`, matching the decision tree's convention.

use crate::config::ThresholdTable;

pub fn brightness_level(value: f32, table: &ThresholdTable) -> &'static str {
    let [very_bright, bright, medium] = table.brightness_levels;
    if value > very_bright {
        "very bright"
    } else if value > bright {
        "bright"
    } else if value > medium {
        "medium"
    } else {
        "dark"
    }
}

pub fn warmth_level(value: f32, table: &ThresholdTable) -> &'static str {
    let [very_warm, warm, slightly_warm, slightly_cool, cool] = table.warmth_levels;
    if value > very_warm {
        "very warm"
    } else if value > warm {
        "warm"
    } else if value > slightly_warm {
        "slightly warm"
    } else if value > slightly_cool {
        "slightly cool"
    } else if value > cool {
        "cool"
    } else {
        "very cool"
    }
}

pub fn contrast_level(value: f32, table: &ThresholdTable) -> &'static str {
    let [very_vivid, vivid, medium] = table.contrast_levels;
    if value > very_vivid {
        "very vivid"
    } else if value > vivid {
        "vivid"
    } else if value > medium {
        "medium"
    } else {
        "muted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_buckets() {
        let t = ThresholdTable::default();
        assert_eq!(brightness_level(170.0, &t), "very bright");
        assert_eq!(brightness_level(166.0, &t), "bright");
        assert_eq!(brightness_level(162.0, &t), "medium");
        assert_eq!(brightness_level(155.0, &t), "dark");
    }

    #[test]
    fn test_warmth_buckets() {
        let t = ThresholdTable::default();
        assert_eq!(warmth_level(146.0, &t), "very warm");
        assert_eq!(warmth_level(144.0, &t), "warm");
        assert_eq!(warmth_level(141.0, &t), "slightly warm");
        assert_eq!(warmth_level(139.0, &t), "slightly cool");
        assert_eq!(warmth_level(136.0, &t), "cool");
        assert_eq!(warmth_level(130.0, &t), "very cool");
    }

    #[test]
    fn test_contrast_buckets() {
        let t = ThresholdTable::default();
        assert_eq!(contrast_level(146.0, &t), "very vivid");
        assert_eq!(contrast_level(144.0, &t), "vivid");
        assert_eq!(contrast_level(141.0, &t), "medium");
        assert_eq!(contrast_level(135.0, &t), "muted");
    }

    #[test]
    fn test_values_exactly_at_a_cut_fall_low() {
        // Strict `>` everywhere: a value sitting on a boundary belongs to
        // the lower bucket.
        let t = ThresholdTable::default();
        assert_eq!(brightness_level(160.0, &t), "dark");
        assert_eq!(warmth_level(140.0, &t), "slightly cool");
        assert_eq!(contrast_level(142.5, &t), "medium");
    }
}
