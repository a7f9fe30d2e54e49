pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

pub use application::{AppearanceLookup, PlanetService};
pub use domain::{Planet, PlanetRepository};
pub use infrastructure::{InMemoryPlanetRepository, PlanetRepositoryImpl, SwapiClient};
