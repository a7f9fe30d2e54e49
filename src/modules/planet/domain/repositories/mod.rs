pub mod planet_repository;

pub use planet_repository::PlanetRepository;
