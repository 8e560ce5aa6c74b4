//! Result rendering.
//!
//! JSON output mirrors the engine's wire contract, including the
//! `errorType`-tagged error record for failures; the human-readable report
//! is for terminal use.

use serde::Serialize;

use seasonscan_core::{AnalysisResult, Error};

/// Error record emitted in JSON mode, matching the engine's error taxonomy.
#[derive(Serialize)]
pub struct ErrorRecord {
    pub error: String,
    #[serde(rename = "errorType")]
    pub error_type: &'static str,
}

impl From<&Error> for ErrorRecord {
    fn from(error: &Error) -> Self {
        Self {
            error: error.to_string(),
            error_type: error.error_type(),
        }
    }
}

/// Serialize the analysis result as pretty JSON.
pub fn render_json(result: &AnalysisResult) -> Result<String, String> {
    serde_json::to_string_pretty(result).map_err(|e| format!("Failed to serialize result: {}", e))
}

/// Serialize an engine failure as the JSON error record.
pub fn render_error_json(error: &Error) -> Result<String, String> {
    serde_json::to_string_pretty(&ErrorRecord::from(error))
        .map_err(|e| format!("Failed to serialize error: {}", e))
}

/// Render the human-readable analysis report.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Season: {}\n", result.season));

    out.push_str("\nCharacteristics:\n");
    for tag in &result.characteristics {
        out.push_str(&format!("  - {}\n", tag));
    }

    out.push_str("\nSkin tone:\n");
    out.push_str(&format!(
        "  Brightness: {:.2} ({})\n",
        result.skin_tone.brightness, result.skin_tone.brightness_level
    ));
    out.push_str(&format!(
        "  Warmth:     {:.2} ({})\n",
        result.skin_tone.warmth, result.skin_tone.warmth_level
    ));
    out.push_str(&format!(
        "  Contrast:   {:.2} ({})\n",
        result.skin_tone.contrast, result.skin_tone.contrast_level
    ));

    out.push_str(&format!(
        "\nLab aggregate: L={:.2}, a={:.2}, b={:.2}\n",
        result.lab_values.l, result.lab_values.a, result.lab_values.b
    ));

    out.push_str("\nBest colors:\n");
    for color in &result.best_colors {
        out.push_str(&format!("  {} ({})\n", color.name, color.value));
    }

    out.push_str("\nColors to avoid:\n");
    for color in &result.worst_colors {
        out.push_str(&format!("  {} ({})\n", color.name, color.value));
    }

    out
}

/// Render the per-zone diagnostic block shown with `--verbose`.
pub fn render_diagnostics(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let face = &result.debug_info.face;
    out.push_str(&format!(
        "\nFace: {}x{} at ({}, {}), confidence {:.2}\n",
        face.width, face.height, face.x, face.y, face.confidence
    ));

    out.push_str("\nZones:\n");
    for zone in &result.debug_info.zones {
        out.push_str(&format!(
            "  {}: {}x{} at ({}, {}), mask {:.1}%, {} samples{}\n",
            zone.zone,
            zone.width,
            zone.height,
            zone.x,
            zone.y,
            zone.mask_coverage * 100.0,
            zone.samples,
            if zone.reliable { "" } else { " (unreliable)" }
        ));
        out.push_str(&format!(
            "    mean L={:.2}, a={:.2}, b={:.2}\n",
            zone.mean_l, zone.mean_a, zone.mean_b
        ));
    }

    let t = &result.debug_info.thresholds;
    out.push_str(&format!(
        "\nDecision cuts: warmth > {}, brightness > {}, contrast > {}\n",
        t.warmth_neutral, t.brightness_bright, t.contrast_vivid
    ));

    out
}
