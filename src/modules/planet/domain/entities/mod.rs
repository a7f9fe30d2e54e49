pub mod planet;

pub use planet::{NewPlanet, Planet};
