//! CSV exporter for generated sample datasets.
//!
//! This crate writes [`study_core::Sample`] rows to a comma-separated file
//! with one header row and one line per sample.
//!
//! # Example
//!
//! ```ignore
//! use export_csv::CsvExporter;
//! use sample_generator::SampleGenerator;
//! use study_core::StudyConfig;
//!
//! let config = StudyConfig::default();
//! let samples = SampleGenerator::generate(&config)?;
//!
//! let exporter = CsvExporter::new(config.taxa.clone());
//! let metrics = exporter.export(&samples, "Sample_Simulated_PV_Data_150.csv")?;
//! ```

pub mod args;
mod error;
mod exporter;

pub use args::{GenerateArgs, StudyArgs, DEFAULT_OUTPUT};
pub use error::ExportError;
pub use exporter::{column_names, sample_to_record, CsvExporter, ExportMetrics};
