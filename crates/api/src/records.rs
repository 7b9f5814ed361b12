//! Single-record create and list handlers.
//!
//! Each handler is a direct pass-through to one repository call. A store
//! rejection on create surfaces as 400; a failed list query surfaces as 500.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use rollbook_core::db::repository::{FacultyRepository, StudentRepository};
use rollbook_core::error::RollbookError;
use rollbook_core::models::{
    faculty::{Faculty, NewFaculty},
    student::{NewStudent, Student},
};

use crate::error::ApiError;
use crate::AppState;

fn write_err(e: RollbookError) -> ApiError {
    ApiError::bad_request(format!("could not store record: {e}"))
}

fn read_err(e: RollbookError) -> ApiError {
    ApiError::internal(format!("could not list records: {e}"))
}

pub(crate) async fn list_faculty(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Faculty>>, ApiError> {
    let records = state.repo.list_faculty().await.map_err(read_err)?;
    Ok(Json(records))
}

pub(crate) async fn create_faculty(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewFaculty>,
) -> Result<(StatusCode, Json<Faculty>), ApiError> {
    let record = state.repo.insert_faculty(&payload).await.map_err(write_err)?;
    info!(id = record.id, "created faculty record");
    Ok((StatusCode::CREATED, Json(record)))
}

pub(crate) async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let records = state.repo.list_students().await.map_err(read_err)?;
    Ok(Json(records))
}

pub(crate) async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewStudent>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let record = state.repo.insert_student(&payload).await.map_err(write_err)?;
    info!(id = record.id, "created student record");
    Ok((StatusCode::CREATED, Json(record)))
}
