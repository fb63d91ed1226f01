use std::collections::HashMap;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use notebook_core::AppError;
use notebook_models::{NewNote, NewUser, Note, NoteChanges, UserRecord};

use super::{EMAIL_TAKEN_MESSAGE, NoteRepository, UserRepository};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, AppError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, AppError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict(anyhow!(EMAIL_TAKEN_MESSAGE)));
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password: user.password,
            created_at: Utc::now(),
        };
        users.insert(record.id, record.clone());

        Ok(record)
    }
}

/// Notes kept in insertion order.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Note>, AppError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().filter(|n| n.user_id == owner).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, AppError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn insert(&self, note: NewNote) -> Result<Note, AppError> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            user_id: note.user_id,
            title: note.title,
            description: note.description,
            tag: note.tag,
            created_at: now,
            updated_at: now,
        };
        self.notes.write().await.push(note.clone());

        Ok(note)
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        changes: &NoteChanges,
    ) -> Result<Option<Note>, AppError> {
        let mut notes = self.notes.write().await;
        let Some(note) = notes.iter_mut().find(|n| n.id == id && n.user_id == owner) else {
            return Ok(None);
        };

        changes.apply_to(note);
        note.updated_at = Utc::now();

        Ok(Some(note.clone()))
    }

    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Note>, AppError> {
        let mut notes = self.notes.write().await;
        let position = notes.iter().position(|n| n.id == id && n.user_id == owner);

        Ok(position.map(|idx| notes.remove(idx)))
    }
}
