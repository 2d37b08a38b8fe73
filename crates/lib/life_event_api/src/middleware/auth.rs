//! Authentication middleware — Bearer token extraction and JWT verification,
//! plus the privileged-role gate layered on top of it.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use life_event_core::auth::jwt::verify_token;
use life_event_core::directory;
use life_event_core::models::identity::TokenClaims;

use crate::AppState;
use crate::error::AppError;

/// Key used to store `TokenClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the
/// JWT, and injects `AuthenticatedUser` into request extensions.
///
/// Runs before any role check or store operation; a failed verification is
/// terminal for the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("unauthorized access".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("unauthorized access".into()))?;

    let claims = verify_token(token, state.config.jwt_secret.as_bytes())
        .ok_or_else(|| AppError::Unauthorized("unauthorized access".into()))?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

/// Axum middleware: requires the privileged role. Must be layered after
/// [`require_auth`].
///
/// The role is looked up by the authenticated claims' email, never by
/// anything caller-supplied, and the check fails closed when the identity is
/// missing from the directory.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("unauthorized access".into()))?;

    if !directory::is_privileged(&state.pool, &user.0.email).await? {
        return Err(AppError::Forbidden("forbidden access".into()));
    }

    Ok(next.run(request).await)
}
