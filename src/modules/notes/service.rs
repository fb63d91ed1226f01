use anyhow::anyhow;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use notebook_auth::Identity;
use notebook_core::AppError;
use notebook_models::{CreateNoteDto, NewNote, Note, UpdateNoteDto};

use crate::repository::NoteRepository;
use crate::validator::LazyJson;

fn note_not_found() -> AppError {
    AppError::not_found(anyhow!("Note not found"))
}

pub struct NoteService;

impl NoteService {
    #[instrument(skip(notes))]
    pub async fn list_notes(
        notes: &dyn NoteRepository,
        identity: Identity,
    ) -> Result<Vec<Note>, AppError> {
        notes.list_by_owner(identity.id).await
    }

    /// `dto` is expected to have passed validation already.
    #[instrument(skip(notes, dto))]
    pub async fn create_note(
        notes: &dyn NoteRepository,
        identity: Identity,
        dto: CreateNoteDto,
    ) -> Result<Note, AppError> {
        let note = notes.insert(NewNote::from_dto(identity.id, dto)).await?;
        info!(note_id = %note.id, "Note created");
        Ok(note)
    }

    /// Applies the supplied, non-empty fields of `body`.
    ///
    /// The body is only parsed and validated once the note is known to exist
    /// and belong to `identity`, so a caller learns nothing about a note they
    /// do not own.
    #[instrument(skip(notes, body))]
    pub async fn update_note(
        notes: &dyn NoteRepository,
        identity: Identity,
        note_id: &str,
        body: LazyJson<UpdateNoteDto>,
    ) -> Result<Note, AppError> {
        let existing = Self::find_owned(notes, identity, note_id).await?;

        let changes = body.parse()?.into_changes();
        changes
            .validate()
            .map_err(|errors| AppError::validation(&errors))?;

        if changes.is_empty() {
            return Ok(existing);
        }

        // Conditional on the owner; `None` means the note vanished meanwhile.
        let note = notes
            .update_owned(existing.id, identity.id, &changes)
            .await?
            .ok_or_else(note_not_found)?;

        info!(note_id = %note.id, "Note updated");
        Ok(note)
    }

    #[instrument(skip(notes))]
    pub async fn delete_note(
        notes: &dyn NoteRepository,
        identity: Identity,
        note_id: &str,
    ) -> Result<Note, AppError> {
        let existing = Self::find_owned(notes, identity, note_id).await?;

        let note = notes
            .delete_owned(existing.id, identity.id)
            .await?
            .ok_or_else(note_not_found)?;

        info!(note_id = %note.id, "Note deleted");
        Ok(note)
    }

    /// Resolves `note_id` to a note owned by `identity`.
    ///
    /// An id that is not a UUID cannot name a note and is reported as not
    /// found.
    async fn find_owned(
        notes: &dyn NoteRepository,
        identity: Identity,
        note_id: &str,
    ) -> Result<Note, AppError> {
        let id = Uuid::parse_str(note_id).map_err(|_| note_not_found())?;
        let note = notes.find_by_id(id).await?.ok_or_else(note_not_found)?;

        if note.user_id != identity.id {
            warn!(note_id = %note.id, "Rejected access to a note owned by another user");
            return Err(AppError::forbidden(anyhow!("Not allowed")));
        }

        Ok(note)
    }
}
