//! Diversity index computation.

use study_core::{round_to, SiteProfile};

/// Shannon entropy in bits. Zero-probability terms contribute nothing.
pub fn shannon_entropy(proportions: &[f64]) -> f64 {
    proportions
        .iter()
        .filter(|&&p| p > 0.0)
        .fold(0.0, |entropy, &p| entropy - p * p.log2())
}

/// Site-scaled Shannon entropy, rounded to 1 decimal.
///
/// `composition` must be the unrounded abundances.
pub fn diversity_index(composition: &[f64], profile: &SiteProfile) -> f64 {
    round_to(shannon_entropy(composition) * profile.diversity_scale, 1)
}
