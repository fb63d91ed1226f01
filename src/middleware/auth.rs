use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use uuid::Uuid;

use notebook_auth::{Claims, INVALID_TOKEN_MESSAGE, Identity, verify_token};
use notebook_core::AppError;

use crate::state::AppState;

/// Header used by clients that send the raw token without a scheme.
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Extractor that verifies the request's token and yields its claims.
///
/// Handlers that take an `AuthUser` never run for unauthenticated requests:
/// a missing, malformed or forged token is rejected with 401 first.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn identity(&self) -> Identity {
        self.0.identity()
    }

    pub fn user_id(&self) -> Uuid {
        self.0.user.id
    }
}

/// Reads `Authorization: Bearer <token>`, falling back to `auth-token`.
///
/// A present but malformed `Authorization` header is not silently skipped.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        return value
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty());
    }

    headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or_else(|| {
            tracing::debug!("Rejecting request without a usable token");
            AppError::unauthorized(anyhow!(INVALID_TOKEN_MESSAGE))
        })?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
