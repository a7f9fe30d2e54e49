pub mod dto;
pub mod ports;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use dto::{CreatePlanetRequest, ListPlanetsParams, PlanetResponse};
pub use ports::AppearanceLookup;
pub use service::PlanetService;
pub use use_cases::{
    CreatePlanetCommand, CreatePlanetHandler, CreatePlanetResult, FindPlanetHandler,
    FindPlanetQuery, ListPlanetsHandler, ListPlanetsQuery,
};
