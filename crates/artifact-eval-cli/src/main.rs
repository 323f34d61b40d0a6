//! artifact-eval CLI - Encoder artifact analysis tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// Encoder artifact analysis and visualization tool.
#[derive(Parser)]
#[command(name = "artifact-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect periodic banding in decoded outputs against a reference
    Analyze {
        /// Reference PPM
        reference: PathBuf,

        /// Test PPMs, one report per file
        #[arg(required = true)]
        tests: Vec<PathBuf>,

        /// Candidate period in pixels (16 = macroblock width)
        #[arg(long, default_value_t = 16)]
        period: u32,

        /// Write JSON report(s) here (a directory, or a file for one test)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Dump per-column diff CSV here (a directory, or a file for one test)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Convert a PPM to a truecolor PNG
    Convert {
        /// Input PPM
        input: PathBuf,

        /// Output PNG
        output: PathBuf,
    },

    /// Write a scaled luma-difference heatmap PNG
    Diff {
        /// Reference PPM
        reference: PathBuf,

        /// Test PPM
        test: PathBuf,

        /// Output PNG
        output: PathBuf,

        /// Diff amplification before clipping to 8 bits
        #[arg(long, default_value_t = 8)]
        scale: u32,
    },

    /// Print PSNR metrics between two PPMs
    Metrics {
        /// Reference PPM
        reference: PathBuf,

        /// Test PPM
        test: PathBuf,
    },

    /// Generate a synthetic test PPM
    Generate {
        /// Pattern: solid, rgbgrad, checker, noise, diag
        pattern: String,

        /// Image width
        width: u32,

        /// Image height
        height: u32,

        /// Output PPM
        output: PathBuf,

        /// Seed for the noise pattern
        #[arg(long, default_value_t = 1)]
        seed: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { reference, tests, period, json, csv } => {
            commands::analyze::run(reference, tests, period, json, csv, cli.verbose)
        }
        Commands::Convert { input, output } => commands::convert::run(input, output, cli.verbose),
        Commands::Diff { reference, test, output, scale } => {
            commands::diff::run(reference, test, output, scale, cli.verbose)
        }
        Commands::Metrics { reference, test } => {
            commands::metrics::run(reference, test, cli.verbose)
        }
        Commands::Generate { pattern, width, height, output, seed } => {
            commands::generate::run(&pattern, width, height, output, seed, cli.verbose)
        }
    }
}
