//! Bulk CSV import handlers.
//!
//! The upload is written to a scoped temporary file in the configured upload
//! directory, parsed positionally, and submitted as one batch insert. The
//! temporary file is removed when the handler returns, on success and on
//! failure alike.

use std::io::Write;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tracing::info;

use rollbook_core::bulk_csv;
use rollbook_core::config::RollbookConfig;
use rollbook_core::db::repository::{FacultyRepository, StudentRepository};
use rollbook_core::error::RollbookError;

use crate::error::ApiError;
use crate::AppState;

fn parse_err(e: RollbookError) -> ApiError {
    ApiError::internal(format!("could not parse uploaded file: {e}"))
}

fn insert_err(e: RollbookError) -> ApiError {
    ApiError::internal(format!("bulk insert failed: {e}"))
}

pub(crate) async fn bulk_upload_faculty(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let upload = receive_upload(&state.config, multipart).await?;
    let records = bulk_csv::read_faculty_csv(upload.path()).map_err(parse_err)?;
    let inserted = state
        .repo
        .insert_faculty_batch(&records)
        .await
        .map_err(insert_err)?;

    info!(inserted, "bulk faculty upload complete");
    Ok(Json(json!({
        "message": "bulk upload successful",
        "inserted": inserted,
    })))
}

pub(crate) async fn bulk_upload_students(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let upload = receive_upload(&state.config, multipart).await?;
    let records = bulk_csv::read_student_csv(upload.path()).map_err(parse_err)?;
    let inserted = state
        .repo
        .insert_student_batch(&records)
        .await
        .map_err(insert_err)?;

    info!(inserted, "bulk student upload complete");
    Ok(Json(json!({
        "message": "bulk upload successful",
        "inserted": inserted,
    })))
}

/// Save the `file` part of a multipart request to a scoped temporary file.
///
/// Exactly one file part is expected; its absence is a client error and no
/// further processing occurs. The returned handle deletes the file on drop.
async fn receive_upload(
    config: &RollbookConfig,
    mut multipart: Multipart,
) -> Result<NamedTempFile, ApiError> {
    let upload_dir = config.upload_dir();
    std::fs::create_dir_all(&upload_dir).map_err(|e| {
        ApiError::internal(format!(
            "cannot create upload directory {}: {e}",
            upload_dir.display()
        ))
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read upload: {e}")))?;

        let mut temp = NamedTempFile::new_in(&upload_dir)
            .map_err(|e| ApiError::internal(format!("cannot create temporary file: {e}")))?;
        temp.write_all(&data)
            .and_then(|()| temp.flush())
            .map_err(|e| ApiError::internal(format!("cannot write temporary file: {e}")))?;

        return Ok(temp);
    }

    Err(ApiError::bad_request("no file uploaded"))
}
