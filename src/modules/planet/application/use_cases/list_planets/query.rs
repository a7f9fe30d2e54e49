use crate::modules::planet::domain::PlanetSpecification;
use crate::shared::application::pagination::PaginationParams;

/// Filtered, paginated planet listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPlanetsQuery {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub pagination: PaginationParams,
}

impl ListPlanetsQuery {
    pub fn new(id: Option<i64>, name: Option<String>, pagination: PaginationParams) -> Self {
        Self {
            id,
            name,
            pagination,
        }
    }

    pub fn specification(&self) -> PlanetSpecification {
        PlanetSpecification::by_name(self.name.clone()).and(PlanetSpecification::by_id(self.id))
    }
}
