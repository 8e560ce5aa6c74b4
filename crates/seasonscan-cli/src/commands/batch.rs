use std::path::PathBuf;

use seasonscan_core::{analyze, AnalysisConfig, SeetaDetector};

use crate::output;

/// Execute the batch command: analyze many photos with one shared detector.
///
/// The detection model is loaded once and reused for every file. Detection
/// itself serializes on the detector's internal lock, so files are processed
/// in order; the pixel stages of each analysis still run data-parallel
/// internally.
pub fn cmd_batch(
    inputs: Vec<PathBuf>,
    out: Option<PathBuf>,
    detector_path: PathBuf,
) -> Result<(), String> {
    if inputs.is_empty() {
        return Err("No input files specified".to_string());
    }

    let detector = SeetaDetector::from_file(&detector_path).map_err(|e| e.to_string())?;
    let config = AnalysisConfig::default();

    if let Some(dir) = &out {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    println!("Analyzing {} files...\n", inputs.len());

    let total = inputs.len();
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        let outcome = std::fs::read(input)
            .map_err(|e| format!("Failed to read file: {}", e))
            .and_then(|bytes| {
                analyze(&bytes, &detector, &config).map_err(|engine_error| {
                    format!(
                        "{} ({})",
                        engine_error,
                        engine_error.error_type()
                    )
                })
            });

        match outcome {
            Ok(result) => {
                println!(
                    "[{}/{}] {}: {}",
                    index + 1,
                    total,
                    input.display(),
                    result.season
                );

                if let Some(dir) = &out {
                    let stem = input
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_else(|| format!("result-{}", index + 1));
                    let path = dir.join(format!("{}.json", stem));
                    let json = output::render_json(&result)?;
                    std::fs::write(&path, json)
                        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                }
            }
            Err(message) => {
                println!("[{}/{}] {}: FAILED", index + 1, total, input.display());
                errors.push((input.clone(), message));
            }
        }
    }

    println!("\n========================================");
    println!("BATCH ANALYSIS COMPLETE");
    println!("========================================");
    println!("  Successful: {}", total - errors.len());
    println!("  Failed:     {}", errors.len());

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, message) in &errors {
            println!("  {}: {}", path.display(), message);
        }
        return Err(format!("{} files failed to analyze", errors.len()));
    }

    Ok(())
}
