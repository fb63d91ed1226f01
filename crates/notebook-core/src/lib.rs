//! # Notebook Core
//!
//! Core types shared by every Notebook crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Salted password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use notebook_core::errors::AppError;
//! use notebook_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Note not found"));
//!
//! let hash = hash_password("secret1", 10)?;
//! assert!(verify_password("secret1", &hash));
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse, FieldError};
pub use password::{hash_password, verify_password};
