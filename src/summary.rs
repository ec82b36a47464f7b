//! Per-site summary of a generated dataset.
//!
//! A summary can be built from samples in memory or read back from an
//! exported CSV file. In both cases the marker abundance is the exported,
//! 2-decimal value.

use std::fmt;
use std::io::Read;
use std::path::Path;
use study_core::{Sample, Site};

/// Errors that can occur while summarizing an exported file.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// No taxon column follows the Site column
    #[error("No taxon columns found after '{0}'")]
    MissingMarker(String),

    #[error("Row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: unknown site code '{value}'")]
    UnknownSite { row: usize, value: String },
}

/// Sample counts and mean dominant marker abundance per site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSummary {
    /// Name of the dominant marker taxon
    pub marker: String,
    pub lesional_count: usize,
    pub non_lesional_count: usize,
    /// `None` when there are no lesional samples
    pub lesional_marker_mean: Option<f64>,
    /// `None` when there are no non-lesional samples
    pub non_lesional_marker_mean: Option<f64>,
}

/// Running count and sum for one site.
#[derive(Debug, Default)]
struct SiteAccumulator {
    count: usize,
    sum: f64,
}

impl SiteAccumulator {
    fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl SiteSummary {
    fn from_observations<I>(marker: &str, observations: I) -> Self
    where
        I: IntoIterator<Item = (Site, f64)>,
    {
        let mut lesional = SiteAccumulator::default();
        let mut non_lesional = SiteAccumulator::default();

        for (site, abundance) in observations {
            match site {
                Site::Lesional => lesional.add(abundance),
                Site::NonLesional => non_lesional.add(abundance),
            }
        }

        Self {
            marker: marker.to_string(),
            lesional_count: lesional.count,
            non_lesional_count: non_lesional.count,
            lesional_marker_mean: lesional.mean(),
            non_lesional_marker_mean: non_lesional.mean(),
        }
    }

    /// Summarize samples in memory.
    pub fn from_samples(samples: &[Sample], marker: &str) -> Self {
        Self::from_observations(
            marker,
            samples.iter().map(|s| (s.site, s.dominant_marker())),
        )
    }

    /// Summarize a CSV file written by the exporter.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, SummaryError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Summarize CSV data with a header row.
    ///
    /// The dominant marker is the first column after `Site`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SummaryError> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();

        let site_idx = headers
            .iter()
            .position(|h| h == "Site")
            .ok_or_else(|| SummaryError::MissingColumn("Site".to_string()))?;
        let marker_idx = site_idx + 1;
        let marker = headers
            .get(marker_idx)
            .ok_or_else(|| SummaryError::MissingMarker("Site".to_string()))?
            .to_string();

        let mut observations = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            // Header is line 1
            let row = i + 2;

            let code = record.get(site_idx).unwrap_or_default();
            let site = Site::from_code(code).ok_or_else(|| SummaryError::UnknownSite {
                row,
                value: code.to_string(),
            })?;

            let raw = record.get(marker_idx).unwrap_or_default();
            let abundance: f64 = raw.parse().map_err(|_| SummaryError::InvalidValue {
                row,
                column: marker.clone(),
                value: raw.to_string(),
            })?;

            observations.push((site, abundance));
        }

        Ok(Self::from_observations(&marker, observations))
    }
}

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{value:.3}"),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for SiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Slide 1: Sample Distribution")?;
        writeln!(
            f,
            "{} Samples: {}, {} Samples: {}",
            Site::Lesional.label(),
            self.lesional_count,
            Site::NonLesional.label(),
            self.non_lesional_count
        )?;
        writeln!(f)?;
        writeln!(f, "Slide 2: {} Abundance", self.marker)?;
        writeln!(
            f,
            "Mean {} ({}): {}",
            self.marker,
            Site::Lesional.label(),
            format_mean(self.lesional_marker_mean)
        )?;
        write!(
            f,
            "Mean {} ({}): {}",
            self.marker,
            Site::NonLesional.label(),
            format_mean(self.non_lesional_marker_mean)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(index: u64, marker: f64) -> Sample {
        Sample {
            index,
            sample_id: Sample::sample_id_for(index),
            patient_id: Sample::patient_id_for(index),
            site: Site::from_index(index),
            composition: [marker, 0.1, 0.1, 0.1, 1.0 - marker - 0.3],
            acantholysis_score: 0,
            inflammation_score: 0,
            disease_severity_index: 10,
            diversity_index: 1.0,
        }
    }

    #[test]
    fn test_from_samples() {
        let samples = vec![
            sample(0, 0.5),
            sample(1, 0.2),
            sample(2, 0.6),
            sample(3, 0.25),
        ];

        let summary = SiteSummary::from_samples(&samples, "Staphylococcus");

        assert_eq!(summary.lesional_count, 2);
        assert_eq!(summary.non_lesional_count, 2);
        assert!((summary.lesional_marker_mean.unwrap() - 0.55).abs() < 1e-12);
        assert!((summary.non_lesional_marker_mean.unwrap() - 0.225).abs() < 1e-12);
    }

    #[test]
    fn test_empty_site_has_no_mean() {
        let summary = SiteSummary::from_samples(&[], "Staphylococcus");

        assert_eq!(summary.lesional_count, 0);
        assert_eq!(summary.lesional_marker_mean, None);
        assert!(summary.to_string().contains("(Lesional): n/a"));
    }

    #[test]
    fn test_display() {
        let summary = SiteSummary {
            marker: "Staphylococcus".to_string(),
            lesional_count: 75,
            non_lesional_count: 75,
            lesional_marker_mean: Some(0.5247),
            non_lesional_marker_mean: Some(0.2),
        };

        let expected = "Slide 1: Sample Distribution\n\
                        Lesional Samples: 75, Non-Lesional Samples: 75\n\
                        \n\
                        Slide 2: Staphylococcus Abundance\n\
                        Mean Staphylococcus (Lesional): 0.525\n\
                        Mean Staphylococcus (Non-Lesional): 0.200";
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn test_from_csv_reader() {
        let data = "SampleID,PatientID,Site,Cutibacterium,B,C,D,E,Acantholysis,Inflammation,PDAI,ShannonIndex\n\
                    S1,P1,L,0.50,0.06,0.14,0.15,0.15,4,3,20,1.3\n\
                    S2,P1,NL,0.20,0.27,0.20,0.17,0.16,0,1,9,2.2\n";

        let summary = SiteSummary::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(summary.marker, "Cutibacterium");
        assert_eq!(summary.lesional_count, 1);
        assert_eq!(summary.non_lesional_count, 1);
        assert_eq!(summary.lesional_marker_mean, Some(0.5));
        assert_eq!(summary.non_lesional_marker_mean, Some(0.2));
    }

    #[test]
    fn test_csv_missing_site_column() {
        let data = "SampleID,PatientID\nS1,P1\n";

        let result = SiteSummary::from_csv_reader(data.as_bytes());
        assert!(matches!(result, Err(SummaryError::MissingColumn(c)) if c == "Site"));
    }

    #[test]
    fn test_csv_missing_marker_column() {
        let data = "SampleID,Site\nS1,L\n";

        let result = SiteSummary::from_csv_reader(data.as_bytes());
        assert!(matches!(result, Err(SummaryError::MissingMarker(_))));
    }

    #[test]
    fn test_csv_unknown_site() {
        let data = "Site,Staphylococcus\nX,0.5\n";

        let result = SiteSummary::from_csv_reader(data.as_bytes());
        assert!(matches!(
            result,
            Err(SummaryError::UnknownSite { row: 2, value }) if value == "X"
        ));
    }

    #[test]
    fn test_csv_invalid_abundance() {
        let data = "Site,Staphylococcus\nL,0.5\nNL,abc\n";

        let result = SiteSummary::from_csv_reader(data.as_bytes());
        assert!(matches!(
            result,
            Err(SummaryError::InvalidValue { row: 3, .. })
        ));
    }
}
