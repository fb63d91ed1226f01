//! Persistence seams for users and notes.
//!
//! Services depend on the [`UserRepository`] and [`NoteRepository`] traits.
//! Two implementations are provided:
//!
//! - [`postgres`]: SQLx-backed, used in production
//! - [`memory`]: process-local maps, used by tests and `--storage memory`
//!
//! Every cross-step consistency rule is enforced inside a single repository
//! call. Email uniqueness is checked at insert time, and note writes are
//! conditional on the owner, so check-then-act races in the services cannot
//! produce duplicates or cross-user writes.

use async_trait::async_trait;
use uuid::Uuid;

use notebook_core::AppError;
use notebook_models::{NewNote, NewUser, Note, NoteChanges, UserRecord};

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryNoteRepository, InMemoryUserRepository};
pub use postgres::{PgNoteRepository, PgUserRepository};

pub const EMAIL_TAKEN_MESSAGE: &str = "Sorry, a user with this email already exists";

/// Credential store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, AppError>;

    /// Inserts a new user.
    ///
    /// Fails with a conflict error if the email is already registered, even
    /// when a concurrent insert won the race after the caller's own check.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, AppError>;
}

/// Note store.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes owned by `owner`, oldest first.
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Note>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, AppError>;

    async fn insert(&self, note: NewNote) -> Result<Note, AppError>;

    /// Applies `changes` if note `id` exists and belongs to `owner`.
    /// Returns `None` when no such note remains.
    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: &NoteChanges,
    ) -> Result<Option<Note>, AppError>;

    /// Removes note `id` if it belongs to `owner` and returns its last contents.
    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Note>, AppError>;
}
