//! Taxon composition draws.

use rand::Rng;
use rand_distr::Exp1;
use study_core::{SiteProfile, TAXON_COUNT};

/// Number of taxa that share the abundance left over by the markers.
const SPLIT_COUNT: usize = TAXON_COUNT - 2;

/// Draw an unrounded composition vector for a site.
///
/// The first two entries are the marker taxa, the remaining entries split
/// `1 - (marker1 + marker2)` uniformly over the simplex.
pub fn generate_composition<R: Rng>(rng: &mut R, profile: &SiteProfile) -> [f64; TAXON_COUNT] {
    let dominant = rng.gen_range(profile.dominant_marker.clone());
    let secondary = rng.gen_range(profile.secondary_marker.clone());
    let remaining = 1.0 - (dominant + secondary);

    let split = split_uniform_simplex(rng, remaining);

    let mut composition = [0.0; TAXON_COUNT];
    composition[0] = dominant;
    composition[1] = secondary;
    composition[2..].copy_from_slice(&split);
    composition
}

/// Split `total` into non-negative parts drawn from a flat Dirichlet.
///
/// Normalized unit-rate exponentials are uniform over the simplex.
fn split_uniform_simplex<R: Rng>(rng: &mut R, total: f64) -> [f64; SPLIT_COUNT] {
    let mut parts = [0.0; SPLIT_COUNT];
    for part in parts.iter_mut() {
        *part = rng.sample(Exp1);
    }

    let sum: f64 = parts.iter().sum();
    if sum > 0.0 {
        for part in parts.iter_mut() {
            *part = *part / sum * total;
        }
    } else {
        // All draws were exactly zero; fall back to equal shares.
        parts = [total / SPLIT_COUNT as f64; SPLIT_COUNT];
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_composition_sums_to_one() {
        let mut rng = StdRng::seed_from_u64(42);

        for profile in [&SiteProfile::LESIONAL, &SiteProfile::NON_LESIONAL] {
            for _ in 0..200 {
                let composition = generate_composition(&mut rng, profile);
                let sum: f64 = composition.iter().sum();
                assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
                assert!(composition.iter().all(|&p| p >= 0.0));
            }
        }
    }

    #[test]
    fn test_markers_within_site_ranges() {
        let mut rng = StdRng::seed_from_u64(42);

        for profile in [&SiteProfile::LESIONAL, &SiteProfile::NON_LESIONAL] {
            for _ in 0..200 {
                let composition = generate_composition(&mut rng, profile);
                assert!(profile.dominant_marker.contains(&composition[0]));
                assert!(profile.secondary_marker.contains(&composition[1]));
            }
        }
    }

    #[test]
    fn test_split_shares_are_balanced_on_average() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 3000;

        let mut totals = [0.0; SPLIT_COUNT];
        for _ in 0..draws {
            let parts = split_uniform_simplex(&mut rng, 1.0);
            for (total, part) in totals.iter_mut().zip(parts) {
                *total += part;
            }
        }

        // Each share of a flat Dirichlet has mean 1/3.
        for total in totals {
            let mean = total / draws as f64;
            assert!((mean - 1.0 / 3.0).abs() < 0.03, "mean share was {mean}");
        }
    }

    #[test]
    fn test_split_scales_to_total() {
        let mut rng = StdRng::seed_from_u64(7);

        let parts = split_uniform_simplex(&mut rng, 0.4);
        let sum: f64 = parts.iter().sum();
        assert!((sum - 0.4).abs() < 1e-12);
    }
}
