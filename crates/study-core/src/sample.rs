//! Sample and site definitions.

use std::fmt;
use std::ops::RangeInclusive;

/// Number of taxa in every composition vector.
pub const TAXON_COUNT: usize = 5;

/// Sampling site of a biopsy.
///
/// Sites alternate strictly with the sample index: even indices are
/// lesional, odd indices are non-lesional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    /// Skin taken from an active lesion
    Lesional,
    /// Clinically unaffected skin from the same patient
    NonLesional,
}

impl Site {
    /// Site for the sample at `index`.
    pub fn from_index(index: u64) -> Self {
        if index % 2 == 0 {
            Site::Lesional
        } else {
            Site::NonLesional
        }
    }

    /// Short code used in the exported file.
    pub fn code(&self) -> &'static str {
        match self {
            Site::Lesional => "L",
            Site::NonLesional => "NL",
        }
    }

    /// Parse a site code as written by [`Site::code`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(Site::Lesional),
            "NL" => Some(Site::NonLesional),
            _ => None,
        }
    }

    /// Human readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Site::Lesional => "Lesional",
            Site::NonLesional => "Non-Lesional",
        }
    }

    /// Sampling parameters for this site.
    pub fn profile(&self) -> &'static SiteProfile {
        match self {
            Site::Lesional => &SiteProfile::LESIONAL,
            Site::NonLesional => &SiteProfile::NON_LESIONAL,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Site-conditioned sampling parameters.
///
/// Lesional skin shows dysbiosis: the first marker taxon dominates, the
/// second is depleted and the diversity index is damped. The score ranges of
/// the two profiles are disjoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProfile {
    /// Uniform range of the first marker taxon abundance
    pub dominant_marker: RangeInclusive<f64>,
    /// Uniform range of the second marker taxon abundance
    pub secondary_marker: RangeInclusive<f64>,
    /// Integer range of the acantholysis score
    pub acantholysis: RangeInclusive<u32>,
    /// Integer range of the inflammation score
    pub inflammation: RangeInclusive<u32>,
    /// Integer range of the disease severity index (PDAI)
    pub severity: RangeInclusive<u32>,
    /// Multiplier applied to the Shannon entropy
    pub diversity_scale: f64,
}

impl SiteProfile {
    pub const LESIONAL: SiteProfile = SiteProfile {
        dominant_marker: 0.45..=0.60,
        secondary_marker: 0.04..=0.08,
        acantholysis: 3..=5,
        inflammation: 2..=3,
        severity: 18..=25,
        diversity_scale: 0.7,
    };

    pub const NON_LESIONAL: SiteProfile = SiteProfile {
        dominant_marker: 0.15..=0.25,
        secondary_marker: 0.25..=0.30,
        acantholysis: 0..=1,
        inflammation: 0..=1,
        severity: 8..=12,
        diversity_scale: 1.0,
    };
}

/// One generated row of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Zero-based position in the generated sequence
    pub index: u64,
    pub sample_id: String,
    pub patient_id: String,
    pub site: Site,
    /// Relative taxon abundances, rounded to 2 decimals
    pub composition: [f64; TAXON_COUNT],
    pub acantholysis_score: u32,
    pub inflammation_score: u32,
    /// PDAI
    pub disease_severity_index: u32,
    /// Scaled Shannon entropy, rounded to 1 decimal
    pub diversity_index: f64,
}

impl Sample {
    /// Sequential sample identifier (`S1`, `S2`, ...).
    pub fn sample_id_for(index: u64) -> String {
        format!("S{}", index + 1)
    }

    /// Patient identifier shared by samples `2k` and `2k + 1`.
    pub fn patient_id_for(index: u64) -> String {
        format!("P{}", index / 2 + 1)
    }

    /// Abundance of the first marker taxon.
    pub fn dominant_marker(&self) -> f64 {
        self.composition[0]
    }
}

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_alternates_with_index() {
        assert_eq!(Site::from_index(0), Site::Lesional);
        assert_eq!(Site::from_index(1), Site::NonLesional);
        assert_eq!(Site::from_index(148), Site::Lesional);
        assert_eq!(Site::from_index(149), Site::NonLesional);
    }

    #[test]
    fn test_site_codes() {
        assert_eq!(Site::Lesional.code(), "L");
        assert_eq!(Site::NonLesional.code(), "NL");
        assert_eq!(Site::from_code("L"), Some(Site::Lesional));
        assert_eq!(Site::from_code("NL"), Some(Site::NonLesional));
        assert_eq!(Site::from_code("Lesional"), None);
        assert_eq!(Site::NonLesional.to_string(), "NL");
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(Sample::sample_id_for(0), "S1");
        assert_eq!(Sample::sample_id_for(149), "S150");
        assert_eq!(Sample::patient_id_for(0), "P1");
        assert_eq!(Sample::patient_id_for(1), "P1");
        assert_eq!(Sample::patient_id_for(2), "P2");
        assert_eq!(Sample::patient_id_for(149), "P75");
    }

    #[test]
    fn test_score_ranges_are_disjoint() {
        let l = &SiteProfile::LESIONAL;
        let nl = &SiteProfile::NON_LESIONAL;

        assert!(nl.acantholysis.end() < l.acantholysis.start());
        assert!(nl.inflammation.end() < l.inflammation.start());
        assert!(nl.severity.end() < l.severity.start());
    }

    #[test]
    fn test_marker_ranges_leave_room_for_other_taxa() {
        for profile in [&SiteProfile::LESIONAL, &SiteProfile::NON_LESIONAL] {
            let max_markers = profile.dominant_marker.end() + profile.secondary_marker.end();
            assert!(max_markers < 1.0);
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.526, 2), 0.53);
        assert_eq!(round_to(0.524, 2), 0.52);
        assert_eq!(round_to(2.349, 1), 2.3);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
