/// Database test utilities with singleton pattern
///
/// Needs `TEST_DATABASE_URL`; every test using it is `#[ignore]`d by default.
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use planet_catalog::shared::Database;
use std::sync::{Arc, Mutex, OnceLock};

type PgPool = Pool<ConnectionManager<PgConnection>>;

static DB: OnceLock<Arc<Database>> = OnceLock::new();

/// Get or create the migrated singleton test database
pub fn get_test_db() -> Arc<Database> {
    DB.get_or_init(|| {
        dotenvy::dotenv().ok();
        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let manager = ConnectionManager::<PgConnection>::new(test_db_url);
        let pool: PgPool = r2d2::Pool::builder()
            .max_size(10)
            .build(manager)
            .expect("Failed to create test database pool");

        let db = Database::from_pool(pool);
        db.run_migrations().expect("Failed to migrate test database");
        Arc::new(db)
    })
    .clone()
}

/// Clean all test tables - use at the start of each test
pub fn clean_test_db() {
    let db = get_test_db();
    let mut conn = db.get_connection().expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE planets RESTART IDENTITY")
        .execute(&mut conn)
        .expect("Failed to clean planets");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
pub fn acquire_test_lock() -> std::sync::MutexGuard<'static, ()> {
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
