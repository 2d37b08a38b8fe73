//! Job application request handlers.
//!
//! The only collection with an update path: the edit form loads the record
//! by id and PUTs the changed fields back.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use life_event_core::models::records::{JobInfo, OwnedRecord};
use life_event_core::store;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;

/// Body for delete/update acknowledgements.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /jobInfo` — create a job application owned by the caller.
pub async fn create_job_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(payload): Json<JobInfo>,
) -> AppResult<Json<OwnedRecord<JobInfo>>> {
    let record = store::JOBS.create(&state.pool, &user.0.email, payload).await?;
    Ok(Json(record))
}

/// `GET /jobInfo` — list the caller's job applications.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<OwnedRecord<JobInfo>>>> {
    let records = store::JOBS.list(&state.pool, &user.0.email).await?;
    Ok(Json(records))
}

/// `GET /jobInfo/{id}` — fetch one of the caller's job applications.
///
/// Bearer-gated and owner-scoped. The system this replaces served the route
/// unauthenticated and unfiltered; that hole is closed here (see DESIGN.md).
pub async fn get_job_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<OwnedRecord<JobInfo>>> {
    let record = store::JOBS
        .find_by_id(&state.pool, &user.0.email, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job event not found".into()))?;
    Ok(Json(record))
}

/// `PUT /jobInfo/{id}` — replace the fields present in the body.
pub async fn update_job_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(patch): Json<serde_json::Value>,
) -> AppResult<Json<MessageResponse>> {
    store::JOBS
        .update_by_id(&state.pool, &user.0.email, id, patch)
        .await?;
    Ok(Json(MessageResponse {
        message: "Job event updated successfully".into(),
    }))
}

/// `DELETE /jobInfo/{id}` — delete one of the caller's job applications.
pub async fn delete_job_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    store::JOBS
        .delete_by_id(&state.pool, &user.0.email, id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Job event deleted successfully".into(),
    }))
}
