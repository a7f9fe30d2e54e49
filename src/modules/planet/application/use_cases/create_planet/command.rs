use crate::modules::planet::domain::NewPlanet;

/// Command for creating a new planet; fields have already been validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlanetCommand {
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

impl CreatePlanetCommand {
    pub fn new(name: String, climate: String, terrain: String) -> Self {
        Self {
            name,
            climate,
            terrain,
        }
    }

    pub fn into_new_planet(self, appearances: u32) -> NewPlanet {
        NewPlanet::new(self.name, self.climate, self.terrain, appearances)
    }
}
