use serde::{Deserialize, Serialize};

use crate::modules::planet::domain::Planet;

/// Planet as returned by every read and create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetResponse {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub appearances: u32,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            appearances: planet.appearances,
        }
    }
}
