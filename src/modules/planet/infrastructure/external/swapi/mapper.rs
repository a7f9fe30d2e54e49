use crate::modules::planet::domain::AppearanceCandidate;

use super::dto::{SwapiPlanet, SwapiPlanetListResponse};

pub struct SwapiMapper;

impl SwapiMapper {
    pub fn to_candidate(planet: SwapiPlanet) -> AppearanceCandidate {
        AppearanceCandidate::new(planet.name, planet.films)
    }

    pub fn to_candidates(response: SwapiPlanetListResponse) -> Vec<AppearanceCandidate> {
        response
            .results
            .into_iter()
            .map(Self::to_candidate)
            .collect()
    }
}
