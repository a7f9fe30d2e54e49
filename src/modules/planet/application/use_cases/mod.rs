pub mod create_planet;
pub mod find_planet;
pub mod list_planets;

pub use create_planet::{CreatePlanetCommand, CreatePlanetHandler, CreatePlanetResult};
pub use find_planet::{FindPlanetHandler, FindPlanetQuery};
pub use list_planets::{ListPlanetsHandler, ListPlanetsQuery};

/// Message of the `AlreadyExists` error raised on duplicate names
pub const PLANET_ALREADY_REGISTERED: &str = "planet already registered";
/// Message of the `NotFound` error raised by lookups
pub const PLANET_NOT_FOUND: &str = "planet not found";
