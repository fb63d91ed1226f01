//! JWT issuance and verification.
//!
//! Tokens are signed with HS256 using [`JwtConfig::secret`]. When
//! [`JwtConfig::token_expiry`] is `None` the token carries no `exp` claim and
//! never expires; when it is set, `exp` is both issued and required.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use notebook_config::JwtConfig;
use notebook_core::AppError;

use crate::claims::{Claims, Identity};

/// Returned for every token failure, whatever the cause.
pub const INVALID_TOKEN_MESSAGE: &str = "Please authenticate using a valid token";

/// Signs `claims` as-is.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Creates a token identifying `user_id`, stamped with the current time.
///
/// # Example
///
/// ```ignore
/// let token = create_access_token(user.id, &state.jwt_config)?;
/// ```
pub fn create_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp().max(0) as usize;
    let exp = jwt_config
        .token_expiry
        .map(|secs| now.saturating_add(secs.max(0) as usize));

    let claims = Claims {
        user: Identity { id: user_id },
        iat: now,
        exp,
    };

    issue_token(&claims, jwt_config)
}

/// Verifies the signature (and `exp`, when expiry is configured) and returns
/// the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with a
/// different secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation_for(jwt_config),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!(INVALID_TOKEN_MESSAGE)))
}

fn validation_for(jwt_config: &JwtConfig) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    if jwt_config.token_expiry.is_none() {
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
    }
    validation
}
