/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use planet_catalog::modules::planet::application::{CreatePlanetCommand, CreatePlanetRequest};
use planet_catalog::modules::planet::domain::NewPlanet;

pub struct PlanetFactory {
    name: String,
    climate: String,
    terrain: String,
    appearances: u32,
}

impl Default for PlanetFactory {
    fn default() -> Self {
        Self {
            name: "Tatooine".to_string(),
            climate: "arid".to_string(),
            terrain: "desert".to_string(),
            appearances: 0,
        }
    }
}

impl PlanetFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn climate(mut self, climate: &str) -> Self {
        self.climate = climate.to_string();
        self
    }

    pub fn terrain(mut self, terrain: &str) -> Self {
        self.terrain = terrain.to_string();
        self
    }

    pub fn appearances(mut self, appearances: u32) -> Self {
        self.appearances = appearances;
        self
    }

    pub fn build(self) -> NewPlanet {
        NewPlanet::new(self.name, self.climate, self.terrain, self.appearances)
    }

    pub fn command(self) -> CreatePlanetCommand {
        CreatePlanetCommand::new(self.name, self.climate, self.terrain)
    }

    pub fn request(self) -> CreatePlanetRequest {
        CreatePlanetRequest::new(self.name, self.climate, self.terrain)
    }
}
