pub mod modules;
pub mod router;
mod schema;
pub mod shared;
pub mod state;

use modules::planet::{
    AppearanceLookup, InMemoryPlanetRepository, PlanetRepository, PlanetRepositoryImpl,
    PlanetService, SwapiClient,
};
use shared::utils::logger::init_logger;
use shared::{AppConfig, Database};
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Storage backend for the configured environment
async fn planet_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn PlanetRepository>> {
    let Some(database_url) = config.database_url.clone() else {
        log_warn!("DATABASE_URL not set, planets are kept in memory and lost on shutdown");
        return Ok(Arc::new(InMemoryPlanetRepository::new()));
    };

    let pool_size = config.database_pool_size;
    let database = tokio::task::spawn_blocking(move || -> shared::AppResult<Database> {
        let database = Database::new(&database_url, pool_size)?;
        database.run_migrations()?;
        Ok(database)
    })
    .await??;

    Ok(Arc::new(PlanetRepositoryImpl::new(Arc::new(database))))
}

/// Build the service from the environment and serve it until the process stops
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;

    let planet_repository = planet_repository(&config).await?;
    let appearance_lookup: Arc<dyn AppearanceLookup> = Arc::new(SwapiClient::new(
        config.swapi_base_url.clone(),
        config.swapi_timeout,
    )?);
    log_info!("Appearance lookups go to {}", config.swapi_base_url);

    let planet_service = Arc::new(PlanetService::new(planet_repository, appearance_lookup));
    let app = router::app_router(AppState::new(planet_service), config.request_timeout);

    let listener = TcpListener::bind(config.bind_addr).await?;
    log_info!("Planet catalog listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
