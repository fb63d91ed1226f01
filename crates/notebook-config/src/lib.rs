//! # Notebook Config
//!
//! Configuration structures loaded once from environment variables at process
//! start and passed by reference from there on:
//!
//! - [`jwt`]: Token signing secret and optional expiry
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: Listen address and storage backend selection
//! - [`password`]: bcrypt work factor
//! - [`cors`]: Allowed CORS origins
//!
//! # Example
//!
//! ```ignore
//! use notebook_config::{JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod password;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use password::PasswordConfig;
pub use server::{ServerConfig, StorageBackend};
