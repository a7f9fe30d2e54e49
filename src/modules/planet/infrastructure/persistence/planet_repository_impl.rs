/// Diesel-based implementation of PlanetRepository
///
/// Name uniqueness is backed by the `planets_name_key` constraint, so a
/// racing insert surfaces as `AppError::StorageConflict`.
use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;

use crate::modules::planet::domain::specification::like_pattern;
use crate::modules::planet::domain::{NewPlanet, Planet, PlanetRepository, PlanetSpecification};
use crate::modules::planet::infrastructure::models::{NewPlanetModel, PlanetModel};
use crate::schema::planets;
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use crate::shared::Database;

pub struct PlanetRepositoryImpl {
    db: Arc<Database>,
}

impl PlanetRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Translate a specification into a boxed query; absent criteria add no clause
    fn filtered(specification: &PlanetSpecification) -> planets::BoxedQuery<'static, Pg> {
        let mut query = planets::table.into_boxed();

        for id in specification.ids() {
            query = query.filter(planets::id.eq(*id));
        }

        for fragment in specification.name_fragments() {
            query = query.filter(planets::name.ilike(like_pattern(fragment)));
        }

        query
    }
}

#[async_trait]
impl PlanetRepository for PlanetRepositoryImpl {
    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;

            let exists = diesel::select(diesel::dsl::exists(
                planets::table.filter(planets::name.eq(name)),
            ))
            .get_result::<bool>(&mut conn)?;

            Ok(exists)
        })
        .await?
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Planet>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<PlanetModel>> {
            let mut conn = db.get_connection()?;

            let model = planets::table
                .find(id)
                .first::<PlanetModel>(&mut conn)
                .optional()?;

            Ok(model)
        })
        .await??;

        Ok(model.map(PlanetModel::into_domain))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Planet>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<PlanetModel>> {
            let mut conn = db.get_connection()?;

            let model = planets::table
                .filter(planets::name.eq(name))
                .first::<PlanetModel>(&mut conn)
                .optional()?;

            Ok(model)
        })
        .await??;

        Ok(model.map(PlanetModel::into_domain))
    }

    async fn save(&self, planet: &NewPlanet) -> AppResult<Planet> {
        let db = Arc::clone(&self.db);
        let new_model = NewPlanetModel::try_from(planet)?;

        let inserted = task::spawn_blocking(move || -> AppResult<PlanetModel> {
            let mut conn = db.get_connection()?;
            let start = Instant::now();

            // Unique violations convert to AppError::StorageConflict
            let inserted = diesel::insert_into(planets::table)
                .values(&new_model)
                .get_result::<PlanetModel>(&mut conn)?;

            LogContext::db_operation("insert", "planets", start);
            Ok(inserted)
        })
        .await??;

        Ok(inserted.into_domain())
    }

    async fn find_page(
        &self,
        specification: &PlanetSpecification,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResult<Planet>> {
        let db = Arc::clone(&self.db);
        let specification = specification.clone();
        let pagination = *pagination;

        let (models, total) = task::spawn_blocking(move || -> AppResult<(Vec<PlanetModel>, i64)> {
            let mut conn = db.get_connection()?;
            let start = Instant::now();

            let total = Self::filtered(&specification)
                .count()
                .get_result::<i64>(&mut conn)?;

            let models = Self::filtered(&specification)
                .order(planets::id.asc())
                .offset(pagination.offset())
                .limit(pagination.limit())
                .load::<PlanetModel>(&mut conn)?;

            LogContext::db_operation("select page", "planets", start);
            Ok((models, total))
        })
        .await??;

        let planets = models.into_iter().map(PlanetModel::into_domain).collect();

        Ok(PaginatedResult::new(planets, total.max(0) as u64, &pagination))
    }
}
