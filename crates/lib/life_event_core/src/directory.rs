//! User directory — upsert-by-email identity records.
//!
//! Holds the role flag consumed by the admin guard. Identities are created on
//! first sign-in and never deleted.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::identity::{Identity, NewIdentity, Role};

/// User directory errors.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Outcome of [`upsert_if_absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(Uuid),
    AlreadyExists,
}

/// Insert an identity keyed by email, unless one already exists.
///
/// New identities always start as `standard`; the `role` field on
/// [`NewIdentity`] is ignored (self-assigned privilege was a hole in the
/// original design, promotion now happens out-of-band).
pub async fn upsert_if_absent(
    pool: &PgPool,
    identity: &NewIdentity,
) -> Result<UpsertOutcome, DirectoryError> {
    let inserted = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, name, photo_url) VALUES ($1, $2, $3) \
         ON CONFLICT (email) DO NOTHING \
         RETURNING id",
    )
    .bind(&identity.email)
    .bind(&identity.name)
    .bind(&identity.photo_url)
    .fetch_optional(pool)
    .await?;

    Ok(match inserted {
        Some(id) => UpsertOutcome::Created(id),
        None => UpsertOutcome::AlreadyExists,
    })
}

/// Fetch an identity by email.
pub async fn find_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<Identity>, DirectoryError> {
    let row = sqlx::query_as::<_, Identity>(
        "SELECT id, email, name, photo_url, role, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Check whether the identity behind an email holds the privileged role.
///
/// Fails closed: an unknown email is not privileged.
pub async fn is_privileged(pool: &PgPool, email: &str) -> Result<bool, DirectoryError> {
    let role = sqlx::query_scalar::<_, Role>("SELECT role FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(role == Some(Role::Privileged))
}

/// List every identity in the directory. Privileged-only at the API layer.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Identity>, DirectoryError> {
    let rows = sqlx::query_as::<_, Identity>(
        "SELECT id, email, name, photo_url, role, created_at FROM users ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
