//! Reading-schedule request handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use life_event_core::models::records::{OwnedRecord, ReadingInfo};
use life_event_core::store;

use crate::AppState;
use crate::error::AppResult;
use crate::handlers::jobs::MessageResponse;
use crate::middleware::auth::AuthenticatedUser;

/// `POST /readingInfo` — create a reading entry owned by the caller.
pub async fn create_reading_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(payload): Json<ReadingInfo>,
) -> AppResult<Json<OwnedRecord<ReadingInfo>>> {
    let record = store::READINGS
        .create(&state.pool, &user.0.email, payload)
        .await?;
    Ok(Json(record))
}

/// `GET /readingInfo` — list the caller's reading entries.
pub async fn list_readings_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<OwnedRecord<ReadingInfo>>>> {
    let records = store::READINGS.list(&state.pool, &user.0.email).await?;
    Ok(Json(records))
}

/// `DELETE /readingInfo/{id}` — delete one of the caller's reading entries.
pub async fn delete_reading_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    store::READINGS
        .delete_by_id(&state.pool, &user.0.email, id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Reading entry deleted successfully".into(),
    }))
}
