pub mod external;
pub mod models;
pub mod persistence;

// Re-export infrastructure components
pub use external::swapi::SwapiClient;
pub use persistence::{InMemoryPlanetRepository, PlanetRepositoryImpl};
