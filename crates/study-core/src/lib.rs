//! Core types for the pv-synth sample generator.
//!
//! This crate provides the types shared by the generator, the CSV exporter
//! and the summary reports:
//!
//! - [`Site`] - Sampling site of a skin biopsy (lesional or non-lesional)
//! - [`SiteProfile`] - Site-conditioned sampling parameters
//! - [`Sample`] - One generated row of the dataset
//! - [`StudyConfig`] - Seed, sample count and taxon names, loadable from YAML
//!
//! # Architecture
//!
//! ```text
//! study-core (this crate)
//!    │
//!    ├─── sample-generator  (draws Samples from a seeded RNG)
//!    │
//!    └─── export-csv        (writes Samples to a CSV file)
//! ```
//!
//! # Example
//!
//! ```rust
//! use study_core::{Site, StudyConfig};
//!
//! let config = StudyConfig::from_yaml("seed: 7\nsample_count: 10\n").unwrap();
//! assert_eq!(config.sample_count, 10);
//! assert_eq!(config.first_marker(), "Staphylococcus");
//!
//! assert_eq!(Site::from_index(0), Site::Lesional);
//! assert_eq!(Site::from_index(1).code(), "NL");
//! ```

pub mod args;
pub mod config;
pub mod sample;

pub use args::StudyArgs;
pub use config::{
    validate_sample_count, ConfigError, StudyConfig, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED,
    DEFAULT_TAXA,
};
pub use sample::{round_to, Sample, Site, SiteProfile, TAXON_COUNT};
