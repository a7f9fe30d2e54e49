pub mod appearance_candidate;
pub mod enrichment_outcome;

pub use appearance_candidate::AppearanceCandidate;
pub use enrichment_outcome::EnrichmentOutcome;
