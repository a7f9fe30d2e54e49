use crate::log_info;
use crate::shared::errors::AppError;
use crate::shared::utils::logger::LogContext;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(database_url: &str, max_size: u32) -> Result<Self, AppError> {
        // Log connection attempt without exposing credentials
        log_info!(
            "Initializing database connection to: {}",
            database_url.split('@').last().unwrap_or("unknown_host")
        );

        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = r2d2::Pool::builder()
            .max_size(max_size)
            .min_idle(Some(std::cmp::max(1, max_size / 4)))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}",
            pool.max_size()
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                LogContext::slow_operation("db connection acquire", start, 100);
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Apply embedded migrations that have not run yet
    pub fn run_migrations(&self) -> Result<(), AppError> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        log_info!("Database migrations completed ({} applied)", applied.len());
        Ok(())
    }
}
