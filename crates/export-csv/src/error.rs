//! Error types for the CSV exporter.

use thiserror::Error;

/// Errors that can occur during CSV export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error")]
    Csv(#[from] csv::Error),

    /// Header names do not match the sample layout.
    #[error("Expected {expected} taxon columns, got {found}")]
    TaxonCount { expected: usize, found: usize },
}
