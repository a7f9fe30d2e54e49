use serde::{Deserialize, Serialize};

use crate::modules::planet::application::use_cases::{CreatePlanetCommand, ListPlanetsQuery};
use crate::shared::application::pagination::PaginationParams;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Body of `POST /planets`
///
/// Missing fields deserialize as empty strings so they are reported by
/// validation together with every other field problem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlanetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub terrain: String,
}

impl CreatePlanetRequest {
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }

    /// Field validation; the command it yields is safe to hand to the core
    pub fn validate(self) -> AppResult<CreatePlanetCommand> {
        Validator::validate_text_fields(&[
            ("name", self.name.as_str()),
            ("climate", self.climate.as_str()),
            ("terrain", self.terrain.as_str()),
        ])?;

        Ok(CreatePlanetCommand::new(self.name, self.climate, self.terrain))
    }
}

/// Query string of `GET /planets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlanetsParams {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ListPlanetsParams {
    pub fn into_query(self) -> AppResult<ListPlanetsQuery> {
        let pagination = PaginationParams::from_query(self.page, self.size)?;
        Ok(ListPlanetsQuery::new(self.id, self.name, pagination))
    }
}
