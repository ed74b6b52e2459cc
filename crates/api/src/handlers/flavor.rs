//! Handlers for the `/flavors` resource.
//!
//! Each handler is a stateless pass-through: extract parameters, issue the
//! repository call, translate the result (or its absence) into a response.
//! Store failures convert to a generic 500 via [`AppError`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scoop_core::error::CoreError;
use scoop_core::types::DbId;
use scoop_db::models::flavor::{CreateFlavor, Flavor, UpdateFlavor};
use scoop_db::repositories::FlavorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/flavors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Flavor>>> {
    let flavors = FlavorRepo::list(&state.pool).await?;
    Ok(Json(flavors))
}

/// GET /api/flavors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Flavor>> {
    let flavor = FlavorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Flavor",
            id,
        }))?;
    Ok(Json(flavor))
}

/// POST /api/flavors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFlavor>,
) -> AppResult<(StatusCode, Json<Flavor>)> {
    let flavor = FlavorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(flavor)))
}

/// PUT /api/flavors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFlavor>,
) -> AppResult<Json<Flavor>> {
    let flavor = FlavorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Flavor",
            id,
        }))?;
    Ok(Json(flavor))
}

/// DELETE /api/flavors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = FlavorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Flavor",
            id,
        }))
    }
}
