pub mod planet_request;
pub mod planet_response;

pub use planet_request::{CreatePlanetRequest, ListPlanetsParams};
pub use planet_response::PlanetResponse;
