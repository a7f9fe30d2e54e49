use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::modules::planet::application::ports::AppearanceLookup;
use crate::modules::planet::domain::AppearanceCandidate;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

use super::{dto::SwapiPlanetListResponse, mapper::SwapiMapper};

const PROVIDER: &str = "SWAPI";
const USER_AGENT: &str = "Planet-Catalog/1.0";

/// Client for the Star Wars API planet search
///
/// A single attempt per call. The timeout covers connect, send and body.
pub struct SwapiClient {
    client: Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Search planets whose name contains `name`; the first results page only
    pub async fn search_planets(&self, name: &str) -> AppResult<SwapiPlanetListResponse> {
        let url = format!("{}/planets/", self.base_url);
        let start = Instant::now();
        LogContext::api_request(PROVIDER, "search planets");

        let response = self
            .client
            .get(&url)
            .query(&[("search", name)])
            .send()
            .await?;

        let status = response.status();
        LogContext::api_response(PROVIDER, "search planets", status.as_str(), start);
        Self::handle_response_status(status)?;

        let page = response
            .json::<SwapiPlanetListResponse>()
            .await
            .map_err(|e| {
                AppError::SerializationError(format!("Failed to parse SWAPI response: {}", e))
            })?;

        debug!(
            search = name,
            results = page.results.len(),
            "SWAPI search answered"
        );
        Ok(page)
    }

    fn handle_response_status(status: StatusCode) -> AppResult<()> {
        match status {
            s if s.is_success() => Ok(()),
            s if s.is_server_error() => Err(AppError::ExternalServiceError(format!(
                "{} service unavailable: {}",
                PROVIDER, s
            ))),
            s => Err(AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                PROVIDER, s
            ))),
        }
    }
}

#[async_trait]
impl AppearanceLookup for SwapiClient {
    async fn search(&self, name: &str) -> AppResult<Vec<AppearanceCandidate>> {
        let page = self.search_planets(name).await?;
        Ok(SwapiMapper::to_candidates(page))
    }
}
