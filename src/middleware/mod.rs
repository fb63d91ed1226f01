//! Request identity.
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>` (or `auth-token: <token>`)
//! 2. The [`auth::AuthUser`] extractor verifies the token signature
//! 3. The handler receives the caller's [`notebook_auth::Identity`] and passes
//!    it explicitly to the service layer
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn list_notes(State(state): State<AppState>, auth_user: AuthUser) -> ... {
//!     NoteService::list_notes(state.notes.as_ref(), auth_user.identity()).await
//! }
//! ```

pub mod auth;
