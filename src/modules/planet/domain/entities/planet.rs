use serde::{Deserialize, Serialize};

/// A persisted planet. `id` is assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    /// Number of films the planet appears in, computed once at creation
    pub appearances: u32,
}

/// A planet that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub appearances: u32,
}

impl NewPlanet {
    pub fn new(name: String, climate: String, terrain: String, appearances: u32) -> Self {
        Self {
            name,
            climate,
            terrain,
            appearances,
        }
    }

    /// Attach the storage-assigned identifier
    pub fn into_planet(self, id: i64) -> Planet {
        Planet {
            id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
            appearances: self.appearances,
        }
    }
}
