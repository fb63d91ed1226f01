//! # Notebook Auth
//!
//! Stateless identity tokens for the Notebook API.
//!
//! - [`claims`]: The token payload and the [`Identity`] it carries
//! - [`jwt`]: Token issuance and verification
//!
//! Tokens are HS256 JWTs over `{ "user": { "id": ... }, "iat": ... }`.
//! Verification needs only the token and the server secret, so no session
//! store is involved.
//!
//! # Example
//!
//! ```ignore
//! use notebook_auth::{create_access_token, verify_token};
//! use notebook_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user.id, user_id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, Identity};
pub use jwt::{INVALID_TOKEN_MESSAGE, create_access_token, issue_token, verify_token};
