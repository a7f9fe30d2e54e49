//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::modules::planet::PlanetService;

#[derive(Clone)]
pub struct AppState {
    pub planet_service: Arc<PlanetService>,
}

impl AppState {
    pub fn new(planet_service: Arc<PlanetService>) -> Self {
        Self { planet_service }
    }
}
