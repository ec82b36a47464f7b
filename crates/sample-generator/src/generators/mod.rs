//! Individual draws that make up one sample.
//!
//! Each function takes the RNG explicitly so the caller controls the order
//! in which random state is consumed.

pub mod composition;
pub mod diversity;
pub mod scores;

pub use composition::generate_composition;
pub use diversity::{diversity_index, shannon_entropy};
pub use scores::{generate_scores, ClinicalScores};
