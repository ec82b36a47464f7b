//! CLI argument definitions for CSV export.

use clap::Args;
use std::path::PathBuf;

// Re-export StudyArgs for convenience
pub use study_core::StudyArgs;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "Sample_Simulated_PV_Data_150.csv";

/// CSV-specific generate arguments.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Output CSV file
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,

    #[command(flatten)]
    pub study: StudyArgs,
}
