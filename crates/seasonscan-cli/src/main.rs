use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

use commands::{cmd_analyze, cmd_batch};

#[derive(Parser)]
#[command(name = "seasonscan")]
#[command(version, about = "Personal color season analysis from a face photo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single photo and report the personal color season
    Analyze {
        /// Input image file (JPEG or PNG)
        #[arg(value_name = "IMAGE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Face detector model path
        #[arg(long, value_name = "FILE", default_value = "seeta_fd_frontal_v1.0.bin")]
        detector: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze multiple photos with one shared detector model
    Batch {
        /// Input image files
        #[arg(value_name = "IMAGES", required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for per-image JSON results
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Face detector model path
        #[arg(long, value_name = "FILE", default_value = "seeta_fd_frontal_v1.0.bin")]
        detector: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            json,
            output,
            detector,
            verbose,
        } => cmd_analyze(input, json, output, detector, verbose),

        Commands::Batch {
            inputs,
            out,
            detector,
        } => cmd_batch(inputs, out, detector),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
