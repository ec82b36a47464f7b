//! CSV exporter for generated samples.

use crate::error::ExportError;
use csv::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use study_core::{Sample, TAXON_COUNT};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from an export operation.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes samples as comma-separated rows.
pub struct CsvExporter {
    taxa: Vec<String>,
    include_header: bool,
}

impl CsvExporter {
    /// Create a new exporter.
    ///
    /// # Arguments
    ///
    /// * `taxa` - Taxon names used as composition column headers, in order
    pub fn new(taxa: Vec<String>) -> Self {
        Self {
            taxa,
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write all samples to the file at `output_path`, replacing it.
    ///
    /// # Returns
    ///
    /// Metrics about the export operation.
    pub fn export<P: AsRef<Path>>(
        &self,
        samples: &[Sample],
        output_path: P,
    ) -> Result<ExportMetrics, ExportError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing CSV file '{}' with {} rows",
            output_path.display(),
            samples.len()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write_to(samples, buf_writer)?;

        let metrics = ExportMetrics {
            rows_written,
            total_duration: start_time.elapsed(),
            file_size_bytes: std::fs::metadata(output_path)?.len(),
        };

        info!(
            "CSV export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec, {:.2} bytes/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second(),
            metrics.bytes_per_second()
        );

        Ok(metrics)
    }

    /// Write all samples to `writer` and flush it.
    ///
    /// Returns the number of data rows written.
    pub fn write_to<W: Write>(&self, samples: &[Sample], writer: W) -> Result<u64, ExportError> {
        if self.taxa.len() != TAXON_COUNT {
            return Err(ExportError::TaxonCount {
                expected: TAXON_COUNT,
                found: self.taxa.len(),
            });
        }

        let mut writer = Writer::from_writer(writer);

        if self.include_header {
            writer.write_record(column_names(&self.taxa))?;
        }

        let mut rows_written = 0u64;
        for sample in samples {
            writer.write_record(sample_to_record(sample))?;
            rows_written += 1;
        }
        debug!("Written {} rows", rows_written);

        writer.flush()?;
        Ok(rows_written)
    }
}

/// Column names in output order.
pub fn column_names(taxa: &[String]) -> Vec<String> {
    let mut columns = vec![
        "SampleID".to_string(),
        "PatientID".to_string(),
        "Site".to_string(),
    ];
    columns.extend(taxa.iter().cloned());
    columns.extend(
        ["Acantholysis", "Inflammation", "PDAI", "ShannonIndex"]
            .iter()
            .map(|s| s.to_string()),
    );
    columns
}

/// Convert a sample to a CSV record (vector of strings).
///
/// Numbers use fixed decimal places so the output does not depend on locale.
pub fn sample_to_record(sample: &Sample) -> Vec<String> {
    let mut record = Vec::with_capacity(TAXON_COUNT + 7);

    record.push(sample.sample_id.clone());
    record.push(sample.patient_id.clone());
    record.push(sample.site.code().to_string());
    record.extend(sample.composition.iter().map(|value| format!("{value:.2}")));
    record.push(sample.acantholysis_score.to_string());
    record.push(sample.inflammation_score.to_string());
    record.push(sample.disease_severity_index.to_string());
    record.push(format!("{:.1}", sample.diversity_index));

    record
}
