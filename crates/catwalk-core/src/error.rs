//! Shared error type across catwalk crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Auth failed.
    AuthFailed,
    /// Rate limited (admission denied; retry later, not immediately).
    RateLimited,
    /// Caller identity is known but lacks rights on the target.
    Forbidden,
    /// Target instance does not resolve.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::RateLimited => "RATE_LIMITED",
            ClientCode::Forbidden => "FORBIDDEN",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CatwalkError>;

/// Unified error type used by core and the API service.
///
/// Every variant is a normal, expected branch of the decision pipeline; none
/// is ever escalated to a process-fatal condition.
#[derive(Debug, Error)]
pub enum CatwalkError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("auth failed")]
    AuthFailed,
    #[error("rate limited")]
    RateLimited { retry_after_secs: u64 },
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CatwalkError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CatwalkError::BadRequest(_) => ClientCode::BadRequest,
            CatwalkError::AuthFailed => ClientCode::AuthFailed,
            CatwalkError::RateLimited { .. } => ClientCode::RateLimited,
            CatwalkError::Forbidden => ClientCode::Forbidden,
            CatwalkError::NotFound => ClientCode::NotFound,
            CatwalkError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            CatwalkError::Internal(_) => ClientCode::Internal,
        }
    }
}
