//! Token issuance and verification.
//!
//! Sign-in itself happens against an external identity provider; this module
//! only exchanges an already-verified identity claim for a signed, 1-hour
//! access token and checks such tokens on the way back in.

pub mod jwt;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}
