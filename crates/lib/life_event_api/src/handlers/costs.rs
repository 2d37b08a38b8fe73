//! Cost entry request handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use life_event_core::models::records::{CostInfo, OwnedRecord};
use life_event_core::store;

use crate::AppState;
use crate::error::AppResult;
use crate::handlers::jobs::MessageResponse;
use crate::middleware::auth::AuthenticatedUser;

/// `POST /costInfo` — create a cost entry owned by the caller.
pub async fn create_cost_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(payload): Json<CostInfo>,
) -> AppResult<Json<OwnedRecord<CostInfo>>> {
    let record = store::COSTS
        .create(&state.pool, &user.0.email, payload)
        .await?;
    Ok(Json(record))
}

/// `GET /costInfo` — list the caller's cost entries.
pub async fn list_costs_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<OwnedRecord<CostInfo>>>> {
    let records = store::COSTS.list(&state.pool, &user.0.email).await?;
    Ok(Json(records))
}

/// `DELETE /costInfo/{id}` — delete one of the caller's cost entries.
pub async fn delete_cost_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    store::COSTS
        .delete_by_id(&state.pool, &user.0.email, id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Cost entry deleted successfully".into(),
    }))
}
