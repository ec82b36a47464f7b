//! Study configuration loaded from YAML.
//!
//! Every field is optional in the file; missing fields fall back to the
//! defaults of the reference study (150 samples, seed 42, five skin taxa).
//!
//! ```yaml
//! seed: 42
//! sample_count: 150
//! taxa:
//!   - Staphylococcus
//!   - Propionibacterium
//!   - Corynebacterium
//!   - Streptococcus
//!   - Lactobacillus
//! ```

use crate::sample::TAXON_COUNT;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_SEED: u64 = 42;

pub const DEFAULT_SAMPLE_COUNT: u64 = 150;

/// Taxon names in composition order. The first two are the marker taxa.
pub const DEFAULT_TAXA: [&str; TAXON_COUNT] = [
    "Staphylococcus",
    "Propionibacterium",
    "Corynebacterium",
    "Streptococcus",
    "Lactobacillus",
];

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Sample count must be positive")]
    EmptySampleCount,

    /// Samples are generated in lesional/non-lesional pairs
    #[error("Sample count must be even to pair lesional and non-lesional samples, got {0}")]
    OddSampleCount(u64),

    #[error("Expected {expected} taxon names, got {found}")]
    TaxonCount { expected: usize, found: usize },

    #[error("Taxon name must not be empty")]
    EmptyTaxonName,

    #[error("Duplicate taxon name: {0}")]
    DuplicateTaxon(String),
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_sample_count() -> u64 {
    DEFAULT_SAMPLE_COUNT
}

fn default_taxa() -> Vec<String> {
    DEFAULT_TAXA.iter().map(|s| s.to_string()).collect()
}

/// Parameters of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StudyConfig {
    /// Seed of the random number generator (same seed = same data)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Total number of samples, two per patient
    #[serde(default = "default_sample_count")]
    pub sample_count: u64,

    /// Taxon names in composition order
    #[serde(default = "default_taxa")]
    pub taxa: Vec<String>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            sample_count: default_sample_count(),
            taxa: default_taxa(),
        }
    }
}

impl StudyConfig {
    /// Load and validate a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: StudyConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the generation preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sample_count(self.sample_count)?;
        validate_taxa(&self.taxa)
    }

    /// Name of the dominant marker taxon.
    pub fn first_marker(&self) -> &str {
        self.taxa.first().map(String::as_str).unwrap_or(DEFAULT_TAXA[0])
    }
}

/// Check that `count` is a positive, even number of samples.
pub fn validate_sample_count(count: u64) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::EmptySampleCount);
    }
    if count % 2 != 0 {
        return Err(ConfigError::OddSampleCount(count));
    }
    Ok(())
}

/// Taxon names become CSV column headers, so they must be non-empty and unique.
pub fn validate_taxa(taxa: &[String]) -> Result<(), ConfigError> {
    if taxa.len() != TAXON_COUNT {
        return Err(ConfigError::TaxonCount {
            expected: TAXON_COUNT,
            found: taxa.len(),
        });
    }

    let mut seen = HashSet::new();
    for name in taxa {
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyTaxonName);
        }
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::DuplicateTaxon(name.clone()));
        }
    }
    Ok(())
}
