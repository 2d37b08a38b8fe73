//! User directory request handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use life_event_core::directory::{self, UpsertOutcome};
use life_event_core::models::identity::{Identity, NewIdentity, Role};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;

/// Response for `POST /users`. The front-end checks `insertedId` to tell a
/// fresh registration from a repeat sign-in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub inserted_id: Option<Uuid>,
    pub message: String,
}

/// Response for `GET /users/admin/{email}`.
#[derive(Debug, Serialize)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

/// `POST /users` — upsert-if-absent identity registration.
///
/// Idempotent by email. The client-supplied role is ignored; every new
/// identity starts as `standard` (see DESIGN.md on the self-assigned-role
/// hole this closes).
pub async fn register_user_handler(
    State(state): State<AppState>,
    Json(identity): Json<NewIdentity>,
) -> AppResult<Json<RegisterUserResponse>> {
    match directory::upsert_if_absent(&state.pool, &identity).await? {
        UpsertOutcome::Created(id) => {
            info!(email = %identity.email, "registered new identity");
            Ok(Json(RegisterUserResponse {
                inserted_id: Some(id),
                message: "user created".into(),
            }))
        }
        UpsertOutcome::AlreadyExists => Ok(Json(RegisterUserResponse {
            inserted_id: None,
            message: "user already exists".into(),
        })),
    }
}

/// `GET /users/admin/{email}` — does the caller hold the privileged role?
///
/// The path email must match the authenticated claims; a caller can never
/// probe another identity's role.
pub async fn check_admin_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(email): Path<String>,
) -> AppResult<Json<AdminCheckResponse>> {
    if email != user.0.email {
        return Err(AppError::Forbidden("forbidden access".into()));
    }

    let admin = directory::find_by_email(&state.pool, &email)
        .await?
        .is_some_and(|identity| identity.role == Role::Privileged);

    Ok(Json(AdminCheckResponse { admin }))
}

/// `GET /users` — full directory listing. Gated by the privileged-role
/// middleware; everything else in the system relies on owner-scoping only.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Identity>>> {
    let users = directory::list_all(&state.pool).await?;
    Ok(Json(users))
}
