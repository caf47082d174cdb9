use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use mailbrief::api::{DeleteResponse, ProcessResponse};
use mailbrief::pipeline::TracingProgress;
use mailbrief::EmailSummary;

use super::ApiError;
use crate::state::AppState;

pub(super) async fn list_emails(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmailSummary>>, ApiError> {
    let emails = state
        .pipeline
        .list()
        .await
        .map_err(|e| ApiError::from_pipeline("fetch emails", e))?;
    Ok(Json(emails))
}

pub(super) async fn process_emails(
    State(state): State<AppState>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let outcome = state
        .pipeline
        .clear_and_reprocess(&TracingProgress)
        .await
        .map_err(|e| ApiError::from_pipeline("process emails", e))?;
    Ok(Json(outcome.into()))
}

pub(super) async fn resummarize_email(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<EmailSummary>, ApiError> {
    let Path(id) = id?;
    let updated = state
        .pipeline
        .resummarize(id)
        .await
        .map_err(|e| ApiError::from_pipeline("re-summarize email", e))?;
    Ok(Json(updated))
}

pub(super) async fn delete_email(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id?;
    let existed = state
        .pipeline
        .delete_one(id)
        .await
        .map_err(|e| ApiError::from_pipeline("delete email", e))?;
    if !existed {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DeleteResponse { success: true }))
}
