//! Note models and DTOs.
//!
//! Updates are partial: [`UpdateNoteDto`] is reduced to [`NoteChanges`],
//! which keeps only the fields that were supplied with a non-empty value.
//! An empty string therefore leaves the stored field untouched rather than
//! clearing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Tag stored when a note is created without one.
pub const DEFAULT_TAG: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Note {
    pub id: Uuid,
    /// Owner. Set at creation, never changed.
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNoteDto {
    #[validate(length(min = 3, message = "Enter a valid title"))]
    pub title: String,
    #[validate(length(min = 5, message = "Enter a valid description"))]
    pub description: String,
    #[serde(default)]
    pub tag: Option<String>,
}

/// A validated note ready to be inserted for `user_id`.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub tag: String,
}

impl NewNote {
    pub fn from_dto(user_id: Uuid, dto: CreateNoteDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            description: dto.description,
            tag: non_empty(dto.tag).unwrap_or_else(|| DEFAULT_TAG.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateNoteDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl UpdateNoteDto {
    pub fn into_changes(self) -> NoteChanges {
        NoteChanges {
            title: non_empty(self.title),
            description: non_empty(self.description),
            tag: non_empty(self.tag),
        }
    }
}

/// Supplied fields of a partial update. `None` means "keep the stored value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct NoteChanges {
    #[validate(length(min = 3, message = "Enter a valid title"))]
    pub title: Option<String>,
    #[validate(length(min = 5, message = "Enter a valid description"))]
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl NoteChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.tag.is_none()
    }

    /// Applies the supplied fields to `note`.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(description) = &self.description {
            note.description = description.clone();
        }
        if let Some(tag) = &self.tag {
            note.tag = tag.clone();
        }
    }
}

/// Confirmation body for a deleted note.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteResponse {
    pub success: bool,
    pub message: String,
    pub note: Note,
}

impl DeleteNoteResponse {
    pub fn new(note: Note) -> Self {
        Self {
            success: true,
            message: "Note has been deleted".to_string(),
            note,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
