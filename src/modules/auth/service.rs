use anyhow::anyhow;
use tracing::{info, instrument, warn};

use notebook_auth::{Identity, create_access_token};
use notebook_config::{JwtConfig, PasswordConfig};
use notebook_core::password::{hash_password, verify_dummy, verify_password};
use notebook_core::AppError;
use notebook_models::{AuthTokenResponse, LoginRequest, NewUser, RegisterRequest, UserProfile};

use crate::repository::{EMAIL_TAKEN_MESSAGE, UserRepository};

pub struct AuthService;

impl AuthService {
    /// Registers a user and returns a token for them.
    ///
    /// `dto` is expected to have passed validation already.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register_user(
        users: &dyn UserRepository,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
        password_config: &PasswordConfig,
    ) -> Result<AuthTokenResponse, AppError> {
        if users.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::conflict(anyhow!(EMAIL_TAKEN_MESSAGE)));
        }

        let cost = password_config.bcrypt_cost;
        let password = dto.password;
        let hashed_password =
            tokio::task::spawn_blocking(move || hash_password(&password, cost)).await??;

        // The store re-checks uniqueness, so a concurrent registration with
        // the same email still ends in a conflict.
        let user = users
            .insert(NewUser {
                name: dto.name,
                email: dto.email,
                password: hashed_password,
            })
            .await?;

        let auth_token = create_access_token(user.id, jwt_config)?;
        info!(user_id = %user.id, "User registered");

        Ok(AuthTokenResponse::new(auth_token))
    }

    /// Verifies credentials and returns a token.
    ///
    /// Unknown emails and wrong passwords produce the same error, and both
    /// paths run one bcrypt verification at the configured cost.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login_user(
        users: &dyn UserRepository,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
        password_config: &PasswordConfig,
    ) -> Result<AuthTokenResponse, AppError> {
        let user = users.find_by_email(&dto.email).await?;
        let cost = password_config.bcrypt_cost;
        let password = dto.password;

        let authenticated = tokio::task::spawn_blocking(move || match user {
            Some(user) if verify_password(&password, &user.password) => Some(user),
            Some(_) => None,
            None => {
                verify_dummy(&password, cost);
                None
            }
        })
        .await?;

        let Some(user) = authenticated else {
            warn!("Login rejected");
            return Err(AppError::invalid_credentials());
        };

        let auth_token = create_access_token(user.id, jwt_config)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthTokenResponse::new(auth_token))
    }

    #[instrument(skip(users))]
    pub async fn get_profile(
        users: &dyn UserRepository,
        identity: Identity,
    ) -> Result<UserProfile, AppError> {
        let user = users
            .find_by_id(identity.id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        Ok(UserProfile::from(user))
    }
}
