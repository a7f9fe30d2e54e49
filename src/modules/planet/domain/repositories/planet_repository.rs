/// Repository trait for planet persistence
///
/// Implementations: Diesel/PostgreSQL and an in-memory store.
use crate::modules::planet::domain::entities::planet::{NewPlanet, Planet};
use crate::modules::planet::domain::specification::PlanetSpecification;
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Check whether a planet with exactly this name is stored
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;

    /// Find planet by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Planet>>;

    /// Find planet by exact name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Planet>>;

    /// Store a new planet and return it with its assigned ID.
    ///
    /// Must fail with `AppError::StorageConflict` when the name is already
    /// taken at write time, even if `exists_by_name` said otherwise.
    async fn save(&self, planet: &NewPlanet) -> AppResult<Planet>;

    /// One page of planets matching `specification`, ordered by ID
    async fn find_page(
        &self,
        specification: &PlanetSpecification,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResult<Planet>>;
}
