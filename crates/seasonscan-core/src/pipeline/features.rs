//! Tone feature computation.
//!
//! Reduces each zone's masked Lab pixels to channel means (after IQR outlier
//! trimming, which drops stray eyebrow, nostril, and highlight pixels that
//! slipped through the envelope), then combines the two zones into one
//! face-level aggregate and the three scalar features the classifier runs
//! on.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};

use super::skin_mask::SkinMask;
use super::zones::ZoneKind;

/// Channel means for one zone's masked pixels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZoneAggregate {
    pub kind: ZoneKind,
    /// Mean lightness on the 8-bit Lab scale (0 when unreliable).
    pub l: f32,
    /// Mean red-green chroma (128 = neutral; 0 when unreliable).
    pub a: f32,
    /// Mean yellow-blue chroma (128 = neutral; 0 when unreliable).
    pub b: f32,
    /// Masked pixels that entered the means.
    pub samples: usize,
    /// Fraction of zone pixels the skin mask selected.
    pub mask_coverage: f32,
    /// Whether the mask coverage cleared the reliability floor.
    pub reliable: bool,
}

/// Face-level Lab aggregate, the weighted combination of the zone means.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LabAggregate {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// The three scalars the season decision runs on.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToneFeatures {
    /// Weighted mean lightness.
    pub brightness: f32,
    /// Chroma-axis average: above 128 reads warm, below reads cool.
    pub warmth: f32,
    /// Quadratic chroma mean, a proxy for how saturated the skin reads.
    pub contrast: f32,
}

impl ToneFeatures {
    /// Derive the features from a face-level Lab aggregate.
    pub fn from_lab(lab: &LabAggregate) -> Self {
        Self {
            brightness: lab.l,
            warmth: 0.5 * lab.a + 0.5 * lab.b,
            contrast: ((lab.a * lab.a + lab.b * lab.b) / 2.0).sqrt(),
        }
    }
}

/// Reduce one zone's masked pixels to trimmed channel means.
pub fn zone_aggregate(
    kind: ZoneKind,
    l: &[u8],
    a: &[u8],
    b: &[u8],
    mask: &SkinMask,
    config: &AnalysisConfig,
) -> ZoneAggregate {
    let coverage = mask.coverage();
    let reliable = coverage >= config.min_mask_fraction && mask.selected() > 0;

    if !reliable {
        return ZoneAggregate {
            kind,
            l: 0.0,
            a: 0.0,
            b: 0.0,
            samples: 0,
            mask_coverage: coverage,
            reliable: false,
        };
    }

    let factor = config.outlier_iqr_factor;
    let (l_mean, samples) = trimmed_mean(masked_values(l, mask), factor);
    let (a_mean, _) = trimmed_mean(masked_values(a, mask), factor);
    let (b_mean, _) = trimmed_mean(masked_values(b, mask), factor);

    ZoneAggregate {
        kind,
        l: l_mean,
        a: a_mean,
        b: b_mean,
        samples,
        mask_coverage: coverage,
        reliable: true,
    }
}

/// Combine the zone aggregates into the face-level aggregate and features.
///
/// Both zones unreliable is the terminal signal failure; a single reliable
/// zone carries the full weight on its own.
pub fn combine(
    t_zone: &ZoneAggregate,
    u_zone: &ZoneAggregate,
    config: &AnalysisConfig,
) -> Result<(LabAggregate, ToneFeatures)> {
    let weights = &config.zone_weights;
    let (wt, wu) = match (t_zone.reliable, u_zone.reliable) {
        (true, true) => (weights.t_zone, weights.u_zone),
        (true, false) => (1.0, 0.0),
        (false, true) => (0.0, 1.0),
        (false, false) => return Err(Error::InsufficientSkinSignal),
    };

    let total = wt + wu;
    if total <= 0.0 {
        return Err(Error::Internal("zone weights sum to zero".to_string()));
    }

    let lab = LabAggregate {
        l: (wt * t_zone.l + wu * u_zone.l) / total,
        a: (wt * t_zone.a + wu * u_zone.a) / total,
        b: (wt * t_zone.b + wu * u_zone.b) / total,
    };

    Ok((lab, ToneFeatures::from_lab(&lab)))
}

fn masked_values(channel: &[u8], mask: &SkinMask) -> Vec<f32> {
    channel
        .iter()
        .zip(mask.bits())
        .filter_map(|(&v, &selected)| selected.then_some(v as f32))
        .collect()
}

/// Mean of the values inside `factor` IQRs of the quartiles.
///
/// The quartile values themselves always survive the trim, so the retained
/// set is never empty for non-empty input.
fn trimmed_mean(mut values: Vec<f32>, factor: f32) -> (f32, usize) {
    if values.is_empty() {
        return (0.0, 0);
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = percentile(&values, 0.25);
    let q3 = percentile(&values, 0.75);
    let iqr = q3 - q1;
    let lower = q1 - factor * iqr;
    let upper = q3 + factor * iqr;

    let mut sum = 0.0f64;
    let mut count = 0usize;
    for &v in &values {
        if v >= lower && v <= upper {
            sum += v as f64;
            count += 1;
        }
    }

    ((sum / count as f64) as f32, count)
}

/// Linear-interpolated percentile of a sorted slice.
fn percentile(sorted: &[f32], p: f32) -> f32 {
    let rank = p * (sorted.len() - 1) as f32;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let fraction = rank - lo as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::skin_mask;

    fn full_mask(n: usize) -> SkinMask {
        let l = vec![170u8; n];
        let a = vec![140u8; n];
        let b = vec![140u8; n];
        skin_mask::extract(&l, &a, &b, &crate::config::SkinEnvelope::default())
    }

    fn reliable_aggregate(kind: ZoneKind, l: f32, a: f32, b: f32) -> ZoneAggregate {
        ZoneAggregate {
            kind,
            l,
            a,
            b,
            samples: 100,
            mask_coverage: 1.0,
            reliable: true,
        }
    }

    fn unreliable_aggregate(kind: ZoneKind) -> ZoneAggregate {
        ZoneAggregate {
            kind,
            l: 0.0,
            a: 0.0,
            b: 0.0,
            samples: 0,
            mask_coverage: 0.0,
            reliable: false,
        }
    }

    #[test]
    fn test_trimmed_mean_drops_outliers() {
        // 20 values at 150 plus one wild highlight at 255; the spike is
        // outside 1.5 IQRs and must not pull the mean.
        let mut values = vec![150.0f32; 20];
        values.push(255.0);

        let (mean, count) = trimmed_mean(values, 1.5);
        assert_eq!(count, 20);
        assert!((mean - 150.0).abs() < 1e-4);
    }

    #[test]
    fn test_trimmed_mean_keeps_constant_input() {
        let (mean, count) = trimmed_mean(vec![140.0; 8], 1.5);
        assert_eq!(count, 8);
        assert!((mean - 140.0).abs() < 1e-4);
    }

    #[test]
    fn test_zone_aggregate_means() {
        let n = 100;
        let l = vec![170u8; n];
        let a = vec![141u8; n];
        let b = vec![139u8; n];
        let mask = full_mask(n);

        let agg = zone_aggregate(
            ZoneKind::TZone,
            &l,
            &a,
            &b,
            &mask,
            &AnalysisConfig::default(),
        );

        assert!(agg.reliable);
        assert_eq!(agg.samples, n);
        assert!((agg.l - 170.0).abs() < 1e-4);
        assert!((agg.a - 141.0).abs() < 1e-4);
        assert!((agg.b - 139.0).abs() < 1e-4);
    }

    #[test]
    fn test_low_coverage_zone_is_unreliable() {
        // 2 of 100 pixels in range is below the 5% floor.
        let n = 100;
        let mut l = vec![10u8; n];
        l[0] = 170;
        l[1] = 170;
        let a = vec![140u8; n];
        let b = vec![140u8; n];
        let mask = skin_mask::extract(&l, &a, &b, &crate::config::SkinEnvelope::default());

        let agg = zone_aggregate(
            ZoneKind::UZone,
            &l,
            &a,
            &b,
            &mask,
            &AnalysisConfig::default(),
        );
        assert!(!agg.reliable);
        assert_eq!(agg.samples, 0);
    }

    #[test]
    fn test_combine_weights_zones() {
        let t = reliable_aggregate(ZoneKind::TZone, 180.0, 142.0, 144.0);
        let u = reliable_aggregate(ZoneKind::UZone, 160.0, 138.0, 140.0);

        let (lab, features) = combine(&t, &u, &AnalysisConfig::default()).unwrap();

        // 0.4 / 0.6 weighting
        assert!((lab.l - 168.0).abs() < 1e-4);
        assert!((lab.a - 139.6).abs() < 1e-4);
        assert!((lab.b - 141.6).abs() < 1e-4);
        assert!((features.brightness - 168.0).abs() < 1e-4);
        assert!((features.warmth - 140.6).abs() < 1e-4);
    }

    #[test]
    fn test_combine_falls_back_to_single_reliable_zone() {
        let t = unreliable_aggregate(ZoneKind::TZone);
        let u = reliable_aggregate(ZoneKind::UZone, 165.0, 139.0, 141.0);

        let (lab, _) = combine(&t, &u, &AnalysisConfig::default()).unwrap();
        assert!((lab.l - 165.0).abs() < 1e-4);
        assert!((lab.a - 139.0).abs() < 1e-4);
    }

    #[test]
    fn test_combine_fails_when_both_zones_unreliable() {
        let t = unreliable_aggregate(ZoneKind::TZone);
        let u = unreliable_aggregate(ZoneKind::UZone);

        assert!(matches!(
            combine(&t, &u, &AnalysisConfig::default()),
            Err(Error::InsufficientSkinSignal)
        ));
    }

    #[test]
    fn test_features_from_lab() {
        let lab = LabAggregate {
            l: 170.0,
            a: 146.0,
            b: 146.0,
        };
        let features = ToneFeatures::from_lab(&lab);

        assert!((features.brightness - 170.0).abs() < 1e-4);
        assert!((features.warmth - 146.0).abs() < 1e-4);
        assert!((features.contrast - 146.0).abs() < 1e-3);
    }
}
