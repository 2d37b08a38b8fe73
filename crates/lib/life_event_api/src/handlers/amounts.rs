//! Income entry request handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use life_event_core::models::records::{AmountInfo, OwnedRecord};
use life_event_core::store;

use crate::AppState;
use crate::error::AppResult;
use crate::handlers::jobs::MessageResponse;
use crate::middleware::auth::AuthenticatedUser;

/// `POST /amountInfo` — create an income entry owned by the caller.
pub async fn create_amount_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(payload): Json<AmountInfo>,
) -> AppResult<Json<OwnedRecord<AmountInfo>>> {
    let record = store::AMOUNTS
        .create(&state.pool, &user.0.email, payload)
        .await?;
    Ok(Json(record))
}

/// `GET /amountInfo` — list the caller's income entries.
pub async fn list_amounts_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<OwnedRecord<AmountInfo>>>> {
    let records = store::AMOUNTS.list(&state.pool, &user.0.email).await?;
    Ok(Json(records))
}

/// `DELETE /amountInfo/{id}` — delete one of the caller's income entries.
pub async fn delete_amount_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    store::AMOUNTS
        .delete_by_id(&state.pool, &user.0.email, id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Amount entry deleted successfully".into(),
    }))
}
