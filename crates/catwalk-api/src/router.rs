//! Axum router wiring.
//!
//! Versioned REST routes plus operational endpoints. The users resource is
//! read-only by construction: no write verbs exist in the table.

use axum::{
    routing::get,
    Router,
};

use crate::{app_state::AppState, ops, rest};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/cats", get(rest::cats::list).post(rest::cats::create))
        .route(
            "/v1/cats/:id",
            get(rest::cats::retrieve)
                .put(rest::cats::update)
                .patch(rest::cats::partial_update)
                .delete(rest::cats::delete),
        )
        .route("/v1/users", get(rest::users::list))
        .route("/v1/users/:username", get(rest::users::retrieve))
        .route(
            "/v1/achievements",
            get(rest::achievements::list).post(rest::achievements::create),
        )
        .route(
            "/v1/achievements/:id",
            get(rest::achievements::retrieve)
                .put(rest::achievements::update)
                .delete(rest::achievements::delete),
        )
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
