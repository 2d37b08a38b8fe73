//! Token issuance handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::debug;

use life_event_core::auth::jwt::issue_token;

use crate::AppState;
use crate::error::AppResult;

/// Identity claim posted by a freshly signed-in client. Sign-in verification
/// happens upstream (external identity provider); extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct IdentityClaim {
    pub email: String,
}

/// Response carrying the signed access token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /jwt` — exchange a verified identity claim for a 1-hour access
/// token. Stateless: nothing is persisted, tokens are reissued each sign-in.
pub async fn issue_token_handler(
    State(state): State<AppState>,
    Json(claim): Json<IdentityClaim>,
) -> AppResult<Json<TokenResponse>> {
    let token = issue_token(&claim.email, state.config.jwt_secret.as_bytes())?;
    debug!(email = %claim.email, "issued access token");
    Ok(Json(TokenResponse { token }))
}
