//! # Notebook Models
//!
//! Database rows, request DTOs and response bodies for the Notebook API.
//!
//! - [`auth`]: Registration and login requests, token responses
//! - [`notes`]: Notes and the create/update/delete DTOs
//! - [`users`]: Stored users and the public profile

pub mod auth;
pub mod notes;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthTokenResponse, LoginRequest, RegisterRequest};
pub use notes::{CreateNoteDto, DEFAULT_TAG, DeleteNoteResponse, NewNote, Note, NoteChanges, UpdateNoteDto};
pub use users::{NewUser, UserProfile, UserRecord};
