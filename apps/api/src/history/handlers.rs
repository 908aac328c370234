//! Axum route handlers for the history API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::history::HistoryEntry;
use crate::models::profile::{Profile, Recommendation};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveHistoryRequest {
    #[serde(default)]
    pub title: String,
    pub profile: Profile,
    pub recommendation: Recommendation,
}

/// GET /api/v1/history
pub async fn handle_list(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    Json(state.history.list())
}

/// POST /api/v1/history
pub async fn handle_save(
    State(state): State<AppState>,
    Json(req): Json<SaveHistoryRequest>,
) -> Result<(StatusCode, Json<HistoryEntry>), AppError> {
    // A recommendation is only ever produced for a complete profile.
    if !req.profile.is_complete() {
        return Err(AppError::Validation(format!(
            "profile fields cannot be empty: {}",
            req.profile.missing_fields().join(", ")
        )));
    }

    let entry = state
        .history
        .save(&req.title, req.profile, req.recommendation);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/history/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryEntry>, AppError> {
    state
        .history
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("History entry {id} not found")))
}

/// DELETE /api/v1/history/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.history.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("History entry {id} not found")))
    }
}

/// DELETE /api/v1/history
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    state.history.clear();
    StatusCode::NO_CONTENT
}
