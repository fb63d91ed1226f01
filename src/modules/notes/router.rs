use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{create_note, delete_note, list_notes, update_note};

pub fn init_notes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notes).post(create_note))
        .route("/{id}", put(update_note).delete(delete_note))
}
