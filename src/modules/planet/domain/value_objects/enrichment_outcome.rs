use serde::{Deserialize, Serialize};

/// How the appearance count of a newly created planet was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentOutcome {
    /// A candidate with the same name was found
    Matched,
    /// The lookup answered but nothing matched
    NoMatch,
    /// The lookup failed or timed out
    Unavailable,
}
