//! Planet endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use super::application::{
    CreatePlanetRequest, FindPlanetQuery, ListPlanetsParams, PlanetResponse,
};
use crate::shared::application::pagination::PaginatedResult;
use crate::shared::errors::{ApiError, AppError};
use crate::state::AppState;

/// Planet route group.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets).post(create_planet))
        .route("/planets/:key", get(get_planet))
}

/// `POST /planets`
pub async fn create_planet(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlanetResponse>), ApiError> {
    let path = uri.path();

    let Json(request) =
        payload.map_err(|e| ApiError::new(AppError::validation(e.body_text()), path))?;
    let command = request.validate().map_err(|e| ApiError::new(e, path))?;

    let result = state
        .planet_service
        .create_planet(command)
        .await
        .map_err(|e| ApiError::new(e, path))?;

    Ok((StatusCode::CREATED, Json(result.planet.into())))
}

/// `GET /planets/{key}` where `key` is an id when it parses as one, a name otherwise
pub async fn get_planet(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(key): Path<String>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let planet = state
        .planet_service
        .find_planet(FindPlanetQuery::from_key(&key))
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok(Json(planet.into()))
}

/// `GET /planets?id=&name=&page=&size=`
pub async fn list_planets(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: Result<Query<ListPlanetsParams>, QueryRejection>,
) -> Result<Json<PaginatedResult<PlanetResponse>>, ApiError> {
    let path = uri.path();

    let Query(params) =
        params.map_err(|e| ApiError::new(AppError::validation(e.body_text()), path))?;
    let query = params.into_query().map_err(|e| ApiError::new(e, path))?;

    let page = state
        .planet_service
        .list_planets(query)
        .await
        .map_err(|e| ApiError::new(e, path))?;

    Ok(Json(page.map(PlanetResponse::from)))
}
