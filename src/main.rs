//! Command-line interface for pv-synth
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Reference dataset (150 samples, seed 42)
//! pv-synth
//!
//! # Seed and size from a YAML file, output path overridden
//! pv-synth --config study.yaml -o study.csv
//!
//! # Validate configuration and print the summary without writing
//! pv-synth --sample-count 20 --dry-run
//! ```
//!
//! ## Summarize
//! ```bash
//! pv-synth summarize Sample_Simulated_PV_Data_150.csv
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use pv_synth::export::{CsvExporter, GenerateArgs};
use pv_synth::generator::SampleGenerator;
use pv_synth::SiteSummary;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "pv-synth")]
#[command(about = "Generate a synthetic skin microbiome dataset for lesional vs. non-lesional samples")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Generate options (used when no subcommand is given)
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the dataset, write it to CSV and print the summary
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Print the summary of a previously exported CSV file
    Summarize {
        /// CSV file written by `generate`
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries the summary
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { args }) => run_generate(args),
        Some(Commands::Summarize { file }) => {
            let summary = SiteSummary::from_csv_path(&file)
                .with_context(|| format!("Failed to summarize {}", file.display()))?;
            println!("{summary}");
            Ok(())
        }
        None => run_generate(cli.generate),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = args
        .study
        .resolve()
        .context("Failed to load study configuration")?;
    info!(
        "Generating {} samples (seed={})",
        config.sample_count, config.seed
    );

    let samples = SampleGenerator::generate(&config).context("Failed to generate samples")?;

    if args.study.dry_run {
        info!("Dry-run mode: skipping CSV export");
    } else {
        let exporter = CsvExporter::new(config.taxa.clone()).with_header(!args.no_header);
        exporter
            .export(&samples, &args.output)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
        println!("Data saved to {}", args.output.display());
        println!();
    }

    let summary = SiteSummary::from_samples(&samples, config.first_marker());
    println!("{summary}");

    Ok(())
}
