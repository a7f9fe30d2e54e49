pub mod entities;
pub mod repositories;
pub mod services;
pub mod specification;
pub mod value_objects;

// Re-exports for easy access
pub use entities::planet::{NewPlanet, Planet};
pub use repositories::planet_repository::PlanetRepository;
pub use services::appearance_matcher::AppearanceMatcher;
pub use specification::PlanetSpecification;
pub use value_objects::{AppearanceCandidate, EnrichmentOutcome};
