use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::modules::planet::domain::{NewPlanet, Planet, PlanetRepository, PlanetSpecification};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};

/// Process-local planet store used when no database is configured
///
/// The name index is the uniqueness guard: claiming its entry and inserting
/// the planet happen under the same shard lock.
#[derive(Debug)]
pub struct InMemoryPlanetRepository {
    planets: DashMap<i64, Planet>,
    names: DashMap<String, i64>,
    next_id: AtomicI64,
}

impl InMemoryPlanetRepository {
    pub fn new() -> Self {
        Self {
            planets: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

impl Default for InMemoryPlanetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanetRepository for InMemoryPlanetRepository {
    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        Ok(self.names.contains_key(name))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Planet>> {
        Ok(self.planets.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Planet>> {
        let id = match self.names.get(name) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        self.find_by_id(id).await
    }

    async fn save(&self, planet: &NewPlanet) -> AppResult<Planet> {
        match self.names.entry(planet.name.clone()) {
            Entry::Occupied(_) => Err(AppError::StorageConflict(format!(
                "name '{}' is already taken",
                planet.name
            ))),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let stored = planet.clone().into_planet(id);
                self.planets.insert(id, stored.clone());
                slot.insert(id);
                Ok(stored)
            }
        }
    }

    async fn find_page(
        &self,
        specification: &PlanetSpecification,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResult<Planet>> {
        let mut matching: Vec<Planet> = self
            .planets
            .iter()
            .filter(|entry| specification.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matching.sort_by_key(|planet| planet.id);

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect();

        Ok(PaginatedResult::new(items, total, pagination))
    }
}
