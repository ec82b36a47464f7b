//! Histopathological and clinical score draws.

use rand::Rng;
use study_core::SiteProfile;

/// Scores drawn for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicalScores {
    pub acantholysis: u32,
    pub inflammation: u32,
    /// Pemphigus Disease Area Index
    pub severity: u32,
}

/// Draw acantholysis, inflammation and PDAI, in that order.
pub fn generate_scores<R: Rng>(rng: &mut R, profile: &SiteProfile) -> ClinicalScores {
    let acantholysis = rng.gen_range(profile.acantholysis.clone());
    let inflammation = rng.gen_range(profile.inflammation.clone());
    let severity = rng.gen_range(profile.severity.clone());

    ClinicalScores {
        acantholysis,
        inflammation,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_lesional_scores_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let scores = generate_scores(&mut rng, &SiteProfile::LESIONAL);
            assert!((3..=5).contains(&scores.acantholysis));
            assert!((2..=3).contains(&scores.inflammation));
            assert!((18..=25).contains(&scores.severity));
        }
    }

    #[test]
    fn test_non_lesional_scores_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let scores = generate_scores(&mut rng, &SiteProfile::NON_LESIONAL);
            assert!(scores.acantholysis <= 1);
            assert!(scores.inflammation <= 1);
            assert!((8..=12).contains(&scores.severity));
        }
    }

    #[test]
    fn test_range_bounds_are_reachable() {
        let mut rng = StdRng::seed_from_u64(42);

        let acantholysis: HashSet<u32> = (0..500)
            .map(|_| generate_scores(&mut rng, &SiteProfile::LESIONAL).acantholysis)
            .collect();

        assert_eq!(acantholysis, HashSet::from([3, 4, 5]));
    }
}
