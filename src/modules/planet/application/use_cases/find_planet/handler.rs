use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::planet::application::use_cases::PLANET_NOT_FOUND;
use crate::modules::planet::domain::{Planet, PlanetRepository};
use crate::shared::application::use_case::Query;
use crate::shared::errors::{AppError, AppResult};

use super::query::FindPlanetQuery;

/// Query handler for fetching one planet by ID or name
pub struct FindPlanetHandler {
    planet_repository: Arc<dyn PlanetRepository>,
}

impl FindPlanetHandler {
    pub fn new(planet_repository: Arc<dyn PlanetRepository>) -> Self {
        Self { planet_repository }
    }
}

#[async_trait]
impl Query<FindPlanetQuery, Planet> for FindPlanetHandler {
    async fn execute(&self, query: FindPlanetQuery) -> AppResult<Planet> {
        let found = match &query {
            FindPlanetQuery::ById(id) => self.planet_repository.find_by_id(*id).await?,
            FindPlanetQuery::ByName(name) => self.planet_repository.find_by_name(name).await?,
        };

        found.ok_or_else(|| AppError::NotFound(PLANET_NOT_FOUND.to_string()))
    }
}
