mod command;
mod handler;
mod result;

pub use command::CreatePlanetCommand;
pub use handler::CreatePlanetHandler;
pub use result::CreatePlanetResult;
