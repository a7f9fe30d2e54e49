use std::sync::Arc;

use super::ports::AppearanceLookup;
use super::use_cases::{
    CreatePlanetCommand, CreatePlanetHandler, CreatePlanetResult, FindPlanetHandler,
    FindPlanetQuery, ListPlanetsHandler, ListPlanetsQuery,
};
use crate::modules::planet::domain::{Planet, PlanetRepository};
use crate::shared::application::pagination::PaginatedResult;
use crate::shared::application::use_case::{Query, UseCase};
use crate::shared::errors::AppResult;

/// Entry point of the planet context: create, find and list planets
pub struct PlanetService {
    create_handler: CreatePlanetHandler,
    find_handler: FindPlanetHandler,
    list_handler: ListPlanetsHandler,
}

impl PlanetService {
    pub fn new(
        planet_repository: Arc<dyn PlanetRepository>,
        appearance_lookup: Arc<dyn AppearanceLookup>,
    ) -> Self {
        Self {
            create_handler: CreatePlanetHandler::new(
                Arc::clone(&planet_repository),
                appearance_lookup,
            ),
            find_handler: FindPlanetHandler::new(Arc::clone(&planet_repository)),
            list_handler: ListPlanetsHandler::new(planet_repository),
        }
    }

    pub async fn create_planet(&self, command: CreatePlanetCommand) -> AppResult<CreatePlanetResult> {
        self.create_handler.execute(command).await
    }

    pub async fn find_planet(&self, query: FindPlanetQuery) -> AppResult<Planet> {
        self.find_handler.execute(query).await
    }

    pub async fn list_planets(&self, query: ListPlanetsQuery) -> AppResult<PaginatedResult<Planet>> {
        self.list_handler.execute(query).await
    }
}
