use std::path::PathBuf;

use seasonscan_core::{analyze, AnalysisConfig, SeetaDetector};

use crate::output;

/// Execute the analyze command: run the engine once over a photo and print
/// (or save) the season report.
pub fn cmd_analyze(
    input: PathBuf,
    json: bool,
    output_path: Option<PathBuf>,
    detector_path: PathBuf,
    verbose: bool,
) -> Result<(), String> {
    if verbose {
        eprintln!("Loading face detector from {}...", detector_path.display());
    }
    let detector = SeetaDetector::from_file(&detector_path).map_err(|e| e.to_string())?;

    if verbose {
        eprintln!("Reading {}...", input.display());
    }
    let bytes = std::fs::read(&input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let config = AnalysisConfig::default();
    let rendered = match analyze(&bytes, &detector, &config) {
        Ok(result) => {
            if json {
                output::render_json(&result)?
            } else {
                let mut report = format!("Analyzing: {}\n\n", input.display());
                report.push_str(&output::render_report(&result));
                if verbose {
                    report.push_str(&output::render_diagnostics(&result));
                }
                report
            }
        }
        Err(engine_error) => {
            if json {
                // Failures are part of the wire contract in JSON mode.
                let record = output::render_error_json(&engine_error)?;
                if let Some(path) = output_path {
                    std::fs::write(&path, &record)
                        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                } else {
                    println!("{}", record);
                }
                return Err(engine_error.to_string());
            }
            return Err(engine_error.to_string());
        }
    };

    if let Some(path) = output_path {
        std::fs::write(&path, &rendered)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        if !json {
            println!("Report saved to: {}", path.display());
        }
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
