//! Rollbook API — JSON endpoints for the record-keeping service.
//!
//! Exposes create/list endpoints for faculty and student records plus bulk
//! CSV upload, as a library router mounted by the `rollbook serve` command.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use rollbook_core::config::RollbookConfig;
use rollbook_core::db::sqlite::SqliteRepository;

mod bulk;
mod error;
mod records;

pub use error::ApiError;

/// Shared application state for all API routes.
pub struct AppState {
    pub repo: SqliteRepository,
    pub config: RollbookConfig,
}

/// Build the API router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/faculty",
            get(records::list_faculty).post(records::create_faculty),
        )
        .route(
            "/api/students",
            get(records::list_students).post(records::create_student),
        )
        .route("/api/bulk-upload/faculty", post(bulk::bulk_upload_faculty))
        .route("/api/bulk-upload/students", post(bulk::bulk_upload_students))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
