//! CLI argument definitions shared by the generate command.

use crate::config::{ConfigError, StudyConfig};
use clap::Args;
use std::path::PathBuf;

/// Study parameters given on the command line.
///
/// Values given here override the ones read from `--config`, which in turn
/// override the built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct StudyArgs {
    /// Path to a study YAML file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "PV_SYNTH_SEED")]
    pub seed: Option<u64>,

    /// Number of samples to generate (must be even, two per patient)
    #[arg(long)]
    pub sample_count: Option<u64>,

    /// Dry-run mode: generate and summarize without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl StudyArgs {
    /// Build the effective configuration.
    pub fn resolve(&self) -> Result<StudyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => StudyConfig::from_file(path)?,
            None => StudyConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(sample_count) = self.sample_count {
            config.sample_count = sample_count;
        }

        config.validate()?;
        Ok(config)
    }
}
