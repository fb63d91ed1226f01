use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use notebook_core::{AppError, ErrorResponse};
use notebook_models::{CreateNoteDto, DeleteNoteResponse, Note, UpdateNoteDto};

use super::service::NoteService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{LazyJson, ValidatedJson};

/// List the caller's notes
#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Notes owned by the caller, oldest first", body = Vec<Note>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Notes"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn list_notes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Note>>, AppError> {
    let notes = NoteService::list_notes(state.notes.as_ref(), auth_user.identity()).await?;
    Ok(Json(notes))
}

/// Create a note
#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteDto,
    responses(
        (status = 200, description = "Note created", body = Note),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Notes"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn create_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateNoteDto>,
) -> Result<Json<Note>, AppError> {
    let note = NoteService::create_note(state.notes.as_ref(), auth_user.identity(), dto).await?;
    Ok(Json(note))
}

/// Update a note
///
/// Only supplied, non-empty fields are changed. The body is judged after the
/// note has been found and its owner checked; an empty body changes nothing.
#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note ID")),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Updated note", body = Note),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Note belongs to another user", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Notes"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id(), note_id = %id))]
pub async fn update_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    body: LazyJson<UpdateNoteDto>,
) -> Result<Json<Note>, AppError> {
    let note =
        NoteService::update_note(state.notes.as_ref(), auth_user.identity(), &id, body).await?;
    Ok(Json(note))
}

/// Delete a note
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted", body = DeleteNoteResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Note belongs to another user", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Notes"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id(), note_id = %id))]
pub async fn delete_note(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, AppError> {
    let note = NoteService::delete_note(state.notes.as_ref(), auth_user.identity(), &id).await?;
    Ok(Json(DeleteNoteResponse::new(note)))
}
