// Repository implementations
pub mod in_memory_repository;
pub mod planet_repository_impl;

pub use in_memory_repository::InMemoryPlanetRepository;
pub use planet_repository_impl::PlanetRepositoryImpl;
