//! Note management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, DbError, Note, NoteRepository};

use super::DetailResponse;

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct NoteResponse {
    #[schema(example = "2b1c8f4e-6d7a-4c1b-9e3f-5a8d0c2b4e6f")]
    pub id: String,
    #[schema(example = "Groceries")]
    pub title: String,
    #[schema(example = "milk")]
    pub content: String,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
        }
    }
}

/// Body for POST /notes/.
///
/// A client-supplied `id` is ignored; identity is always assigned by the
/// server.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[schema(example = "Groceries")]
    pub title: String,
    /// Body text; empty when omitted.
    #[serde(default)]
    pub content: String,
}

/// Body for PUT /notes/{id}. Both fields are overwritten wholesale.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    #[schema(example = "Groceries v2")]
    pub title: String,
    /// Body text; empty when omitted.
    #[serde(default)]
    pub content: String,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/notes/",
    tag = "notes",
    responses(
        (status = 200, description = "All notes", body = [NoteResponse]),
        (status = 500, description = "Internal server error", body = DetailResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_notes<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<NoteResponse>>, (StatusCode, Json<DetailResponse>)> {
    let notes = state.db().notes().list().await.map_err(internal_error)?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found", body = DetailResponse),
        (status = 500, description = "Internal server error", body = DetailResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, (StatusCode, Json<DetailResponse>)> {
    let note = state
        .db()
        .notes()
        .get(&id)
        .await
        .map_err(not_found_or_internal)?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    post,
    path = "/notes/",
    tag = "notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 200, description = "Note created", body = NoteResponse),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error", body = DetailResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_note<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<NoteResponse>, (StatusCode, Json<DetailResponse>)> {
    let note = Note {
        id: String::new(), // Repository assigns the id
        title: req.title,
        content: req.content,
    };

    let created = state
        .db()
        .notes()
        .create(&note)
        .await
        .map_err(internal_error)?;

    Ok(Json(NoteResponse::from(created)))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 404, description = "Note not found", body = DetailResponse),
        (status = 500, description = "Internal server error", body = DetailResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, (StatusCode, Json<DetailResponse>)> {
    let mut note = state
        .db()
        .notes()
        .get(&id)
        .await
        .map_err(not_found_or_internal)?;

    note.title = req.title;
    note.content = req.content;

    state
        .db()
        .notes()
        .update(&note)
        .await
        .map_err(not_found_or_internal)?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted", body = DetailResponse),
        (status = 404, description = "Note not found", body = DetailResponse),
        (status = 500, description = "Internal server error", body = DetailResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<DetailResponse>, (StatusCode, Json<DetailResponse>)> {
    state
        .db()
        .notes()
        .delete(&id)
        .await
        .map_err(not_found_or_internal)?;

    Ok(Json(DetailResponse {
        detail: "Note deleted".to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

fn internal_error(e: DbError) -> (StatusCode, Json<DetailResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(DetailResponse {
            detail: e.to_string(),
        }),
    )
}

/// Map absence to the contract's fixed 404 message; anything else is a 500.
fn not_found_or_internal(e: DbError) -> (StatusCode, Json<DetailResponse>) {
    match e {
        DbError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(DetailResponse {
                detail: "Note not found".to_string(),
            }),
        ),
        _ => internal_error(e),
    }
}
