//! pv-synth library
//!
//! Generates a synthetic microbiome and clinical dataset for a pemphigus
//! vulgaris skin study: paired lesional and non-lesional samples per patient,
//! each with a five-taxon composition, histopathological scores, a disease
//! severity index (PDAI) and a Shannon diversity index.
//!
//! # Crates
//!
//! - `study_core` - Sample types, site profiles and study configuration
//! - `sample_generator` - Seeded sample generation
//! - `export_csv` - CSV export
//!
//! # CLI Usage
//!
//! ```bash
//! # Reference dataset: 150 samples, seed 42
//! pv-synth
//!
//! # Custom run
//! pv-synth --seed 7 --sample-count 40 -o small.csv
//!
//! # Summarize a previously exported file
//! pv-synth summarize Sample_Simulated_PV_Data_150.csv
//! ```

pub mod summary;

// Re-export workspace crates for convenience
pub use export_csv as export;
pub use sample_generator as generator;
pub use study_core as study;

pub use summary::{SiteSummary, SummaryError};
