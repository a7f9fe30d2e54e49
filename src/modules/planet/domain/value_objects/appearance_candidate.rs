use serde::{Deserialize, Serialize};

/// One search hit from the external film catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceCandidate {
    pub name: String,
    /// Identifiers of the films this candidate appears in
    pub films: Vec<String>,
}

impl AppearanceCandidate {
    pub fn new(name: impl Into<String>, films: Vec<String>) -> Self {
        Self {
            name: name.into(),
            films,
        }
    }

    pub fn film_count(&self) -> u32 {
        u32::try_from(self.films.len()).unwrap_or(u32::MAX)
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
