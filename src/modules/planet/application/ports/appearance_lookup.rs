use async_trait::async_trait;

use crate::modules::planet::domain::AppearanceCandidate;
use crate::shared::errors::AppResult;

/// Port (interface) for the external film catalog
/// Infrastructure layer implements this (SWAPI over HTTP)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppearanceLookup: Send + Sync {
    /// Search the catalog for planets whose name contains `name`.
    ///
    /// Implementations make a single attempt and must return within a bounded time.
    async fn search(&self, name: &str) -> AppResult<Vec<AppearanceCandidate>>;
}
