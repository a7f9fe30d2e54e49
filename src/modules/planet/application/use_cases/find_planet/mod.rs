mod handler;
mod query;

pub use handler::FindPlanetHandler;
pub use query::FindPlanetQuery;
