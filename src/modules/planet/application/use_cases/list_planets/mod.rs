mod handler;
mod query;

pub use handler::ListPlanetsHandler;
pub use query::ListPlanetsQuery;
