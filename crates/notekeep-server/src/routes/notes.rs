//! Note CRUD routes. Every endpoint sits behind the auth gate.
//!
//! The ownership policy is uniform across get/update/delete: fetch the note
//! by id first, then check the owner against the authenticated user before
//! touching anything. The check lives in a single predicate so the three
//! handlers cannot drift apart.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use notekeep_core::{Note, NoteId, UserId};
use notekeep_store::NewNote;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    /// Required body text.
    pub text: String,
    /// Optional initial content.
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    /// Replacement content; `null` or absent clears the field.
    #[serde(default)]
    pub content: Option<String>,
}

/// Response for POST /user/Notes.
#[derive(Debug, Serialize)]
pub struct CreateNoteResponse {
    pub success: bool,
    pub note: Note,
}

/// Response for DELETE /user/Notes/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Authorization predicate: reject unless `user_id` owns `note`.
fn ensure_owner(note: &Note, user_id: UserId) -> Result<(), ApiError> {
    if note.user_id != user_id {
        return Err(ApiError::Forbidden(
            "Note belongs to another user".to_string(),
        ));
    }
    Ok(())
}

/// Fetch a note and run the ownership check.
async fn fetch_owned_note(state: &AppState, id: NoteId, user_id: UserId) -> ApiResult<Note> {
    let note = state
        .store()
        .get_note(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Note not found: {}", id)))?;

    ensure_owner(&note, user_id)?;
    Ok(note)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /user/Notes - Create a note owned by the authenticated user.
async fn create_note(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<CreateNoteResponse>)> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text is empty".to_string()));
    }

    let note = state
        .store()
        .insert_note(NewNote {
            user_id: user.user_id,
            text: request.text,
            content: request.content,
        })
        .await?;

    tracing::info!(user_id = %user.user_id, note_id = %note.id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(CreateNoteResponse {
            success: true,
            note,
        }),
    ))
}

/// GET /user/Notes - List the authenticated user's notes, newest first.
async fn list_notes(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.store().list_notes_by_user(user.user_id).await?;
    Ok(Json(notes))
}

/// GET /user/Notes/{id} - Fetch one note, owner only.
async fn get_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<NoteId>,
) -> ApiResult<Json<Note>> {
    let note = fetch_owned_note(&state, id, user.user_id).await?;
    Ok(Json(note))
}

/// PUT /user/Notes/{id} - Replace a note's content, owner only.
async fn update_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<NoteId>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    fetch_owned_note(&state, id, user.user_id).await?;

    let updated = state
        .store()
        .update_note_content(id, request.content)
        .await?;

    tracing::info!(user_id = %user.user_id, note_id = %id, "Note updated");

    Ok(Json(updated))
}

/// DELETE /user/Notes/{id} - Remove a note, owner only.
async fn delete_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<NoteId>,
) -> ApiResult<Json<DeleteNoteResponse>> {
    fetch_owned_note(&state, id, user.user_id).await?;

    state.store().delete_note(id).await?;

    tracing::info!(user_id = %user.user_id, note_id = %id, "Note deleted");

    Ok(Json(DeleteNoteResponse {
        success: true,
        message: "Note deleted".to_string(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user/Notes", post(create_note).get(list_notes))
        .route(
            "/user/Notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note_owned_by(user_id: UserId) -> Note {
        let now = Utc::now();
        Note {
            id: NoteId::new(),
            user_id,
            text: "hi".to_string(),
            content: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_ensure_owner_accepts_owner() {
        let owner = UserId::new();
        let note = note_owned_by(owner);
        assert!(ensure_owner(&note, owner).is_ok());
    }

    #[test]
    fn test_ensure_owner_rejects_other_user() {
        let note = note_owned_by(UserId::new());
        let err = ensure_owner(&note, UserId::new()).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_create_note_request_deserialize() {
        let request: CreateNoteRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(request.text, "hi");
        assert!(request.content.is_none());
    }

    #[test]
    fn test_update_note_request_missing_content_is_none() {
        let request: UpdateNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(request.content.is_none());
    }

    #[test]
    fn test_create_note_response_serialize() {
        let response = CreateNoteResponse {
            success: true,
            note: note_owned_by(UserId::new()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"text\":\"hi\""));
    }
}
