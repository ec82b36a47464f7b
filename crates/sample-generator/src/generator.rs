//! Main generator for producing sample rows.

use crate::generators::{diversity_index, generate_composition, generate_scores};
use rand::rngs::StdRng;
use rand::SeedableRng;
use study_core::{round_to, ConfigError, Sample, Site, StudyConfig, TAXON_COUNT};
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration rejected before generation
    #[error("Invalid study configuration")]
    Config(#[from] ConfigError),

    /// A batch must start on a lesional sample to keep patients paired
    #[error("Cannot start a batch at index {0}: it would split a patient pair")]
    UnpairedStart(u64),
}

/// Generator that produces deterministic sample rows.
///
/// The random state is consumed in a fixed order, one sample at a time in
/// increasing index order, so the same seed always yields the same rows.
pub struct SampleGenerator {
    /// Taxon names in composition order
    taxa: Vec<String>,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Index of the next sample
    index: u64,
}

impl SampleGenerator {
    /// Create a generator for the given configuration.
    pub fn new(config: &StudyConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            taxa: config.taxa.clone(),
            rng: StdRng::seed_from_u64(config.seed),
            index: 0,
        })
    }

    /// Generate the full dataset described by `config`.
    pub fn generate(config: &StudyConfig) -> Result<Vec<Sample>, GeneratorError> {
        let mut generator = Self::new(config)?;
        let samples: Vec<Sample> = generator.samples(config.sample_count)?.collect();
        debug!(
            "Generated {} samples with seed {}",
            samples.len(),
            config.seed
        );
        Ok(samples)
    }

    /// Get the index of the next sample.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Taxon names in composition order.
    pub fn taxa(&self) -> &[String] {
        &self.taxa
    }

    /// Generate the next sample.
    pub fn next_sample(&mut self) -> Sample {
        let index = self.index;
        let site = Site::from_index(index);
        let profile = site.profile();

        let composition = generate_composition(&mut self.rng, profile);
        let scores = generate_scores(&mut self.rng, profile);

        // Entropy is taken before the composition is rounded for output.
        let diversity = diversity_index(&composition, profile);

        let mut rounded = [0.0; TAXON_COUNT];
        for (out, value) in rounded.iter_mut().zip(composition) {
            *out = round_to(value, 2);
        }

        self.index += 1;

        Sample {
            index,
            sample_id: Sample::sample_id_for(index),
            patient_id: Sample::patient_id_for(index),
            site,
            composition: rounded,
            acantholysis_score: scores.acantholysis,
            inflammation_score: scores.inflammation,
            disease_severity_index: scores.severity,
            diversity_index: diversity,
        }
    }

    /// Generate `count` samples lazily.
    ///
    /// `count` must be positive and even, and the generator must sit on a
    /// lesional index, so that every patient gets exactly two samples.
    pub fn samples(&mut self, count: u64) -> Result<SampleIterator<'_>, GeneratorError> {
        study_core::validate_sample_count(count)?;
        if self.index % 2 != 0 {
            return Err(GeneratorError::UnpairedStart(self.index));
        }

        Ok(SampleIterator {
            generator: self,
            remaining: count,
        })
    }
}

/// Iterator that lazily generates samples.
pub struct SampleIterator<'a> {
    generator: &'a mut SampleGenerator,
    remaining: u64,
}

impl Iterator for SampleIterator<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_sample())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleIterator<'_> {}
