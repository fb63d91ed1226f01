use std::env;
use std::fmt;

const DEV_SECRET: &str = "notebook-dev-secret-change-in-production";

/// Token signing configuration.
///
/// `token_expiry` is `None` unless `JWT_EXPIRY` is set, in which case issued
/// tokens carry an `exp` claim that verification enforces.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: Option<i64>,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: None,
        }
    }

    pub fn with_expiry(mut self, seconds: i64) -> Self {
        self.token_expiry = Some(seconds);
        self
    }

    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
            DEV_SECRET.to_string()
        });

        let token_expiry = env::var("JWT_EXPIRY")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|secs| *secs > 0);

        Self {
            secret,
            token_expiry,
        }
    }
}

// Keeps the secret out of `#[instrument]` spans and debug logs.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("token_expiry", &self.token_expiry)
            .finish()
    }
}
