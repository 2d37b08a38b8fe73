//! Identity records stored in the user directory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role stored on an identity record.
///
/// `Privileged` gates the full-directory listing; everything else relies on
/// owner-scoping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Standard,
    Privileged,
}

/// An identity record in the user directory.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Registration payload for `upsert_if_absent`.
///
/// The wire format still carries a `role` field for compatibility with the
/// front-end, but it is ignored: new identities always start as `standard`
/// and are promoted out-of-band.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdentity {
    pub email: String,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Owner email — the identity every store operation is scoped to.
    pub email: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Privileged).unwrap(), "\"privileged\"");
        assert_eq!(serde_json::to_string(&Role::Standard).unwrap(), "\"standard\"");
    }

    #[test]
    fn new_identity_accepts_extra_and_missing_fields() {
        // The front-end posts whatever the auth provider returned; unknown
        // keys are ignored and role is optional.
        let v: NewIdentity = serde_json::from_str(
            r#"{"email":"a@x.com","name":"A","photoURL":"http://img","role":"privileged","uid":"abc"}"#,
        )
        .unwrap();
        assert_eq!(v.email, "a@x.com");
        assert_eq!(v.photo_url.as_deref(), Some("http://img"));
        assert_eq!(v.role, Some(Role::Privileged));

        let v: NewIdentity = serde_json::from_str(r#"{"email":"b@x.com"}"#).unwrap();
        assert!(v.role.is_none());
        assert!(v.name.is_none());
    }
}
