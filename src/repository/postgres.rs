use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use notebook_core::AppError;
use notebook_models::{NewNote, NewUser, Note, NoteChanges, UserRecord};

use super::{EMAIL_TAKEN_MESSAGE, NoteRepository, UserRepository};

const USER_COLUMNS: &str = "id, name, email, password, created_at";
const NOTE_COLUMNS: &str = "id, user_id, title, description, tag, created_at, updated_at";

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, AppError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, user: NewUser) -> Result<UserRecord, AppError> {
        sqlx::query_as::<_, UserRecord>(&format!(
            r#"INSERT INTO users (id, name, email, password)
               VALUES ($1, $2, $3, $4)
               RETURNING {USER_COLUMNS}"#
        ))
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow!(EMAIL_TAKEN_MESSAGE));
            }
            AppError::from(e)
        })
    }
}

#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    #[instrument(skip(self, note), fields(user_id = %note.user_id))]
    async fn insert(&self, note: NewNote) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            r#"INSERT INTO notes (id, user_id, title, description, tag)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {NOTE_COLUMNS}"#
        ))
        .bind(Uuid::new_v4())
        .bind(note.user_id)
        .bind(&note.title)
        .bind(&note.description)
        .bind(&note.tag)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    #[instrument(skip(self, changes))]
    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: &NoteChanges,
    ) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            r#"UPDATE notes
               SET title = COALESCE($3, title),
                   description = COALESCE($4, description),
                   tag = COALESCE($5, tag),
                   updated_at = NOW()
               WHERE id = $1 AND user_id = $2
               RETURNING {NOTE_COLUMNS}"#
        ))
        .bind(id)
        .bind(owner)
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.tag.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    #[instrument(skip(self))]
    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            "DELETE FROM notes WHERE id = $1 AND user_id = $2 RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }
}
