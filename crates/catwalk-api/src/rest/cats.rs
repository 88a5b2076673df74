//! /v1/cats handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use catwalk_core::model::{ActionKind, Cat, CatDraft, CatPatch};

use crate::app_state::AppState;
use crate::query::ShapeParams;

use super::{request_context, ApiError};

pub async fn list(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ShapeParams>,
) -> Result<Json<Vec<Cat>>, ApiError> {
    let ctx = request_context(&app, &headers, ActionKind::List)?;
    let cats = app.cats().list_cats(&ctx, &params).await?;
    Ok(Json(cats))
}

pub async fn create(
    State(app): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<CatDraft>,
) -> Result<(StatusCode, Json<Cat>), ApiError> {
    let ctx = request_context(&app, &headers, ActionKind::Create)?;
    let cat = app.cats().create_cat(&ctx, draft).await?;
    Ok((StatusCode::CREATED, Json(cat)))
}

pub async fn retrieve(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<Cat>, ApiError> {
    let ctx = request_context(&app, &headers, ActionKind::Retrieve)?;
    let cat = app.cats().retrieve_cat(&ctx, id).await?;
    Ok(Json(cat))
}

pub async fn update(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(draft): Json<CatDraft>,
) -> Result<Json<Cat>, ApiError> {
    let ctx = request_context(&app, &headers, ActionKind::Update)?;
    let cat = app.cats().update_cat(&ctx, id, draft).await?;
    Ok(Json(cat))
}

pub async fn partial_update(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(patch): Json<CatPatch>,
) -> Result<Json<Cat>, ApiError> {
    let ctx = request_context(&app, &headers, ActionKind::PartialUpdate)?;
    let cat = app.cats().patch_cat(&ctx, id, patch).await?;
    Ok(Json(cat))
}

pub async fn delete(
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let ctx = request_context(&app, &headers, ActionKind::Delete)?;
    app.cats().delete_cat(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
