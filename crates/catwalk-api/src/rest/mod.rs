//! REST transport layer.
//!
//! Handlers resolve the caller once, build a `RequestContext`, and hand off
//! to the dispatcher. Users and achievements carry no custom decision logic
//! and are served straight from the store.

pub mod achievements;
pub mod cats;
pub mod users;

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use catwalk_core::error::{CatwalkError, ClientCode};
use catwalk_core::model::ActionKind;

use crate::app_state::AppState;
use crate::context::{Caller, RequestContext};

/// Newtype so `CatwalkError` can cross the axum response boundary.
pub struct ApiError(pub CatwalkError);

impl From<CatwalkError> for ApiError {
    fn from(e: CatwalkError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::AuthFailed => StatusCode::UNAUTHORIZED,
            ClientCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ClientCode::Forbidden => StatusCode::FORBIDDEN,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": {
                "code": code.as_str(),
                "msg": self.0.to_string(),
            }
        }));
        let mut resp = (status, body).into_response();

        // Rate-limit rejections are retryable later, not immediately.
        if let CatwalkError::RateLimited { retry_after_secs } = &self.0 {
            if let Ok(v) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                resp.headers_mut().insert(header::RETRY_AFTER, v);
            }
        }

        resp
    }
}

/// Resolve the caller from the Authorization header.
///
/// Absent header: anonymous, bucketed by the calling origin. Present but
/// unknown ticket: auth failure (the identity claim was made and rejected).
pub(crate) fn resolve_caller(app: &AppState, headers: &HeaderMap) -> Result<Caller, ApiError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(Caller::Anonymous(origin_of(headers)));
    };

    let value = value
        .to_str()
        .map_err(|_| CatwalkError::BadRequest("authorization header is not valid text".into()))?;
    let ticket = value.strip_prefix("Bearer ").ok_or_else(|| {
        CatwalkError::BadRequest("authorization must be a bearer ticket".into())
    })?;

    match app.resolve_ticket(ticket) {
        Some(username) => Ok(Caller::User(username)),
        None => Err(ApiError(CatwalkError::AuthFailed)),
    }
}

/// Calling origin for anonymous bucketing: first forwarded hop, if any.
fn origin_of(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into())
}

pub(crate) fn request_context(
    app: &AppState,
    headers: &HeaderMap,
    action: ActionKind,
) -> Result<RequestContext, ApiError> {
    Ok(RequestContext::new(resolve_caller(app, headers)?, action))
}
