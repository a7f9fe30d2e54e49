use crate::modules::planet::domain::{EnrichmentOutcome, Planet};

/// Result of creating a new planet
#[derive(Debug, Clone)]
pub struct CreatePlanetResult {
    pub planet: Planet,
    pub enrichment: EnrichmentOutcome,
}

impl CreatePlanetResult {
    pub fn new(planet: Planet, enrichment: EnrichmentOutcome) -> Self {
        Self { planet, enrichment }
    }
}
