use axum::Json;
use axum::extract::State;
use tracing::instrument;

use notebook_core::{AppError, ErrorResponse};
use notebook_models::{AuthTokenResponse, LoginRequest, RegisterRequest, UserProfile};

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = AuthTokenResponse),
        (status = 400, description = "Validation error or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<Json<AuthTokenResponse>, AppError> {
    let response = AuthService::register_user(
        state.users.as_ref(),
        dto,
        &state.jwt_config,
        &state.password_config,
    )
    .await?;
    Ok(Json(response))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthTokenResponse),
        (status = 400, description = "Validation error or invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthTokenResponse>, AppError> {
    let response = AuthService::login_user(
        state.users.as_ref(),
        dto,
        &state.jwt_config,
        &state.password_config,
    )
    .await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
#[utoipa::path(
    post,
    path = "/auth/profile",
    responses(
        (status = 200, description = "Current user", body = UserProfile),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let profile = AuthService::get_profile(state.users.as_ref(), auth_user.identity()).await?;
    Ok(Json(profile))
}
