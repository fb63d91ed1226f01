use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "Enter a valid name"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(length(min = 5, message = "Password must contain at least 5 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be blank"))]
    pub password: String,
}

/// Body returned by a successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenResponse {
    pub success: bool,
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

impl AuthTokenResponse {
    pub fn new(auth_token: String) -> Self {
        Self {
            success: true,
            auth_token,
        }
    }
}
