//! Synthetic sample generator for the pv-synth skin microbiome study.
//!
//! This crate provides the `SampleGenerator` which produces deterministic
//! sample rows from a seeded RNG. Two generators built from the same
//! configuration produce identical samples.
//!
//! # Architecture
//!
//! ```text
//! StudyConfig (YAML / CLI)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │  SampleGenerator  │
//! │                   │
//! │  - taxa           │
//! │  - rng (StdRng)   │
//! │  - index          │
//! └─────────┬─────────┘
//!           │
//!           ▼
//!    Sample { sample_id, patient_id, site, composition, scores, diversity }
//! ```
//!
//! # Example
//!
//! ```rust
//! use sample_generator::SampleGenerator;
//! use study_core::{Site, StudyConfig};
//!
//! let config = StudyConfig::default();
//! let mut generator = SampleGenerator::new(&config).unwrap();
//!
//! let samples: Vec<_> = generator.samples(4).unwrap().collect();
//! assert_eq!(samples[0].site, Site::Lesional);
//! assert_eq!(samples[1].patient_id, "P1");
//! ```
//!
//! # Sampling model
//!
//! For each sample the generator draws, in order:
//!
//! - the two marker taxa from site-dependent uniform ranges
//! - a flat Dirichlet split of the remaining abundance over the other taxa
//! - acantholysis, inflammation and PDAI scores from disjoint integer ranges
//!
//! The diversity index is the base 2 Shannon entropy of the unrounded
//! composition, damped for lesional skin.

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, SampleGenerator, SampleIterator};
