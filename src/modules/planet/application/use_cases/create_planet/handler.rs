use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::planet::application::ports::AppearanceLookup;
use crate::modules::planet::application::use_cases::PLANET_ALREADY_REGISTERED;
use crate::modules::planet::domain::{AppearanceMatcher, EnrichmentOutcome, PlanetRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use crate::shared::application::use_case::UseCase;
use crate::{log_debug, log_info, log_warn};

use super::{command::CreatePlanetCommand, result::CreatePlanetResult};

/// Use case handler for creating a new planet
///
/// Checks the name is free, enriches the planet with its film appearance
/// count and stores it. Enrichment is best effort; persistence is not.
pub struct CreatePlanetHandler {
    planet_repository: Arc<dyn PlanetRepository>,
    appearance_lookup: Arc<dyn AppearanceLookup>,
}

impl CreatePlanetHandler {
    pub fn new(
        planet_repository: Arc<dyn PlanetRepository>,
        appearance_lookup: Arc<dyn AppearanceLookup>,
    ) -> Self {
        Self {
            planet_repository,
            appearance_lookup,
        }
    }

    /// One lookup call, never retried. Failures degrade to zero appearances.
    async fn enrich(&self, name: &str) -> (u32, EnrichmentOutcome) {
        let lookup_result = self.appearance_lookup.search(name).await;
        if let Err(e) = &lookup_result {
            log_warn!(
                "Appearance lookup unavailable for '{}', storing 0 appearances: {}",
                name,
                e
            );
        }

        AppearanceMatcher::resolve(name, lookup_result)
    }
}

#[async_trait]
impl UseCase<CreatePlanetCommand, CreatePlanetResult> for CreatePlanetHandler {
    async fn execute(&self, command: CreatePlanetCommand) -> AppResult<CreatePlanetResult> {
        let timer = TimedOperation::new("create planet");

        if self.planet_repository.exists_by_name(&command.name).await? {
            log_debug!("Rejected duplicate planet '{}'", command.name);
            return Err(AppError::AlreadyExists(PLANET_ALREADY_REGISTERED.to_string()));
        }

        let (appearances, enrichment) = self.enrich(&command.name).await;

        let new_planet = command.into_new_planet(appearances);
        let planet = match self.planet_repository.save(&new_planet).await {
            Ok(planet) => planet,
            Err(AppError::StorageConflict(detail)) => {
                // Lost the race against a concurrent create of the same name
                log_warn!(
                    "Planet '{}' was stored concurrently: {}",
                    new_planet.name,
                    detail
                );
                return Err(AppError::AlreadyExists(PLANET_ALREADY_REGISTERED.to_string()));
            }
            Err(e) => return Err(e),
        };

        log_info!(
            "Created planet {} '{}' with {} appearances ({:?})",
            planet.id,
            planet.name,
            planet.appearances,
            enrichment
        );
        timer.finish();

        Ok(CreatePlanetResult::new(planet, enrichment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::planet::application::ports::appearance_lookup::MockAppearanceLookup;
    use crate::modules::planet::domain::repositories::planet_repository::MockPlanetRepository;
    use crate::modules::planet::domain::{AppearanceCandidate, NewPlanet};

    fn command(name: &str) -> CreatePlanetCommand {
        CreatePlanetCommand::new(name.to_string(), "arid".to_string(), "desert".to_string())
    }

    fn films(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("film-{}", i)).collect()
    }

    fn handler(repo: MockPlanetRepository, lookup: MockAppearanceLookup) -> CreatePlanetHandler {
        CreatePlanetHandler::new(Arc::new(repo), Arc::new(lookup))
    }

    fn repo_accepting_save() -> MockPlanetRepository {
        let mut repo = MockPlanetRepository::new();
        repo.expect_exists_by_name().times(1).returning(|_| Ok(false));
        repo.expect_save()
            .times(1)
            .returning(|planet: &NewPlanet| Ok(planet.clone().into_planet(1)));
        repo
    }

    #[tokio::test]
    async fn stores_film_count_of_matching_candidate() {
        let mut lookup = MockAppearanceLookup::new();
        lookup
            .expect_search()
            .withf(|name| name == "Tatooine")
            .times(1)
            .returning(|_| Ok(vec![AppearanceCandidate::new("Tatooine", films(5))]));

        let result = handler(repo_accepting_save(), lookup)
            .execute(command("Tatooine"))
            .await
            .unwrap();

        assert_eq!(result.planet.id, 1);
        assert_eq!(result.planet.appearances, 5);
        assert_eq!(result.enrichment, EnrichmentOutcome::Matched);
    }

    #[tokio::test]
    async fn duplicate_name_skips_lookup_and_write() {
        let mut repo = MockPlanetRepository::new();
        repo.expect_exists_by_name().times(1).returning(|_| Ok(true));
        repo.expect_save().never();

        let mut lookup = MockAppearanceLookup::new();
        lookup.expect_search().never();

        let err = handler(repo, lookup)
            .execute(command("Tatooine"))
            .await
            .unwrap_err();

        match err {
            AppError::AlreadyExists(msg) => assert_eq!(msg, PLANET_ALREADY_REGISTERED),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn lookup_failure_still_creates_planet() {
        let mut lookup = MockAppearanceLookup::new();
        lookup
            .expect_search()
            .times(1)
            .returning(|_| Err(AppError::ExternalServiceError("Request timeout".to_string())));

        let result = handler(repo_accepting_save(), lookup)
            .execute(command("Alderaan"))
            .await
            .unwrap();

        assert_eq!(result.planet.appearances, 0);
        assert_eq!(result.enrichment, EnrichmentOutcome::Unavailable);
    }

    #[tokio::test]
    async fn no_matching_candidate_stores_zero() {
        let mut lookup = MockAppearanceLookup::new();
        lookup
            .expect_search()
            .times(1)
            .returning(|_| Ok(vec![AppearanceCandidate::new("Yavin IV", films(1))]));

        let result = handler(repo_accepting_save(), lookup)
            .execute(command("Yavin"))
            .await
            .unwrap();

        assert_eq!(result.planet.appearances, 0);
        assert_eq!(result.enrichment, EnrichmentOutcome::NoMatch);
    }

    #[tokio::test]
    async fn write_time_conflict_becomes_already_exists() {
        let mut repo = MockPlanetRepository::new();
        repo.expect_exists_by_name().times(1).returning(|_| Ok(false));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(AppError::StorageConflict("planets_name_key".to_string())));

        let mut lookup = MockAppearanceLookup::new();
        lookup.expect_search().times(1).returning(|_| Ok(vec![]));

        let err = handler(repo, lookup)
            .execute(command("Hoth"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn storage_failure_is_propagated() {
        let mut repo = MockPlanetRepository::new();
        repo.expect_exists_by_name()
            .times(1)
            .returning(|_| Err(AppError::DatabaseError("pool exhausted".to_string())));

        let mut lookup = MockAppearanceLookup::new();
        lookup.expect_search().never();

        let err = handler(repo, lookup)
            .execute(command("Hoth"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
