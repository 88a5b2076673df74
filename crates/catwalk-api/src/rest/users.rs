//! /v1/users handlers (read-only resource; no write verbs are routed).

use axum::{
    extract::{Path, State},
    Json,
};

use catwalk_core::error::CatwalkError;
use catwalk_core::model::Account;

use crate::app_state::AppState;

use super::ApiError;

pub async fn list(State(app): State<AppState>) -> Result<Json<Vec<Account>>, ApiError> {
    Ok(Json(app.store().list_accounts().await))
}

pub async fn retrieve(
    State(app): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Account>, ApiError> {
    let account = app
        .store()
        .get_account(&username)
        .await
        .ok_or(CatwalkError::NotFound)?;
    Ok(Json(account))
}
