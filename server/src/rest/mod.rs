//! REST surface over the email pipeline.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /api/health` | liveness |
//! | `GET /api/emails` | all records, newest first |
//! | `POST /api/emails/process` | clear and re-run the batch |
//! | `POST /api/emails/:id/resummarize` | re-analyze one record |
//! | `DELETE /api/emails/:id` | remove one record |

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use mailbrief::api::HealthResponse;

use crate::state::AppState;

mod emails;
mod error;

pub use error::ApiError;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/emails", get(emails::list_emails))
        .route("/api/emails/process", post(emails::process_emails))
        .route("/api/emails/:id/resummarize", post(emails::resummarize_email))
        .route("/api/emails/:id", delete(emails::delete_email))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
