//! /v1/achievements handlers.
//!
//! Achievements are plain named tags with no access-control role; the
//! resource is served straight from the store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use catwalk_core::error::CatwalkError;
use catwalk_core::model::Achievement;

use crate::app_state::AppState;

use super::ApiError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementBody {
    pub name: String,
}

pub async fn list(State(app): State<AppState>) -> Result<Json<Vec<Achievement>>, ApiError> {
    Ok(Json(app.store().list_achievements().await))
}

pub async fn create(
    State(app): State<AppState>,
    Json(body): Json<AchievementBody>,
) -> Result<(StatusCode, Json<Achievement>), ApiError> {
    let achievement = app.store().insert_achievement(&body.name).await?;
    Ok((StatusCode::CREATED, Json(achievement)))
}

pub async fn retrieve(
    State(app): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Achievement>, ApiError> {
    let achievement = app
        .store()
        .get_achievement(id)
        .await
        .ok_or(CatwalkError::NotFound)?;
    Ok(Json(achievement))
}

pub async fn update(
    State(app): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<AchievementBody>,
) -> Result<Json<Achievement>, ApiError> {
    let achievement = app
        .store()
        .rename_achievement(id, &body.name)
        .await
        .ok_or(CatwalkError::NotFound)?;
    Ok(Json(achievement))
}

pub async fn delete(
    State(app): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if app.store().remove_achievement(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError(CatwalkError::NotFound))
    }
}
