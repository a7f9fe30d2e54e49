use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::planet::domain::{Planet, PlanetRepository};
use crate::shared::application::pagination::PaginatedResult;
use crate::shared::application::use_case::Query;
use crate::shared::errors::AppResult;

use super::query::ListPlanetsQuery;

/// Query handler for the filtered planet listing
pub struct ListPlanetsHandler {
    planet_repository: Arc<dyn PlanetRepository>,
}

impl ListPlanetsHandler {
    pub fn new(planet_repository: Arc<dyn PlanetRepository>) -> Self {
        Self { planet_repository }
    }
}

#[async_trait]
impl Query<ListPlanetsQuery, PaginatedResult<Planet>> for ListPlanetsHandler {
    async fn execute(&self, query: ListPlanetsQuery) -> AppResult<PaginatedResult<Planet>> {
        query.pagination.validate()?;

        let specification = query.specification();
        let page = self
            .planet_repository
            .find_page(&specification, &query.pagination)
            .await?;

        log_debug!(
            "Listed {} of {} planets for {:?}",
            page.items.len(),
            page.total_count,
            specification
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::planet::domain::repositories::planet_repository::MockPlanetRepository;
    use crate::modules::planet::domain::PlanetSpecification;
    use crate::shared::application::pagination::PaginationParams;
    use crate::shared::errors::AppError;

    #[tokio::test]
    async fn passes_composed_specification_to_repository() {
        let mut repo = MockPlanetRepository::new();
        repo.expect_find_page()
            .withf(|spec, pagination| {
                spec.ids().to_vec() == vec![7]
                    && spec.name_fragments().to_vec() == vec!["tatoo".to_string()]
                    && *pagination == PaginationParams::new(1, 5)
            })
            .times(1)
            .returning(|_, pagination| Ok(PaginatedResult::new(vec![], 0, pagination)));

        let query = ListPlanetsQuery::new(Some(7), Some("tatoo".to_string()), PaginationParams::new(1, 5));
        let page = ListPlanetsHandler::new(Arc::new(repo)).execute(query).await.unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn no_filters_is_unfiltered() {
        let query = ListPlanetsQuery::default();
        assert_eq!(query.specification(), PlanetSpecification::all());
    }

    #[tokio::test]
    async fn rejects_invalid_page_size() {
        let mut repo = MockPlanetRepository::new();
        repo.expect_find_page().never();

        let query = ListPlanetsQuery::new(None, None, PaginationParams::new(0, 0));
        let err = ListPlanetsHandler::new(Arc::new(repo)).execute(query).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
