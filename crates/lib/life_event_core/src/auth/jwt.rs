//! JWT token generation and verification.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::info;

use super::AuthError;
use crate::models::identity::TokenClaims;

/// Access token lifetime: 1 hour.
pub const ACCESS_TOKEN_EXPIRY_SECS: i64 = 60 * 60;

/// Issue a signed access token (HS256, 1 hour expiry) for an identity the
/// caller has already verified. The trust boundary sits with the caller.
pub fn issue_token(email: &str, secret: &[u8]) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        email: email.to_string(),
        exp: (now + Duration::seconds(ACCESS_TOKEN_EXPIRY_SECS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify an access token, returning the claims on success.
///
/// Validity is solely signature + expiry; there is no revocation list.
pub fn verify_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    // No clock tolerance: validity is exactly iat + 1h, as the original
    // verifier enforced.
    validation.leeway = 0;
    decode::<TokenClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}

/// Resolve the JWT secret: env var `JWT_SECRET` → `ACCESS_TOKEN_SECRET` →
/// persisted file.
pub fn resolve_jwt_secret() -> String {
    if let Ok(secret) = std::env::var("JWT_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    if let Ok(secret) = std::env::var("ACCESS_TOKEN_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    // Generate and persist
    let secret_path = jwt_secret_path();
    if let Ok(existing) = std::fs::read_to_string(&secret_path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = secret_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(&secret_path, &secret);
    info!(path = %secret_path.display(), "generated new JWT secret");
    secret
}

/// Path to the persisted JWT secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("life-event")
        .join("jwt-secret")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn issued_token_verifies_and_carries_email() {
        let token = issue_token("a@x.com", SECRET).unwrap();
        let claims = verify_token(&token, SECRET).expect("token should verify");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_SECS);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = issue_token("a@x.com", SECRET).unwrap();

        // Flip the payload segment — signature no longer matches.
        let mut parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        let forged = jsonwebtoken::encode(
            &Header::default(),
            &TokenClaims {
                email: "b@x.com".into(),
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            },
            &EncodingKey::from_secret(b"other-secret"),
        )
        .unwrap();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        parts[1] = forged_parts[1];
        let tampered = parts.join(".");

        assert!(verify_token(&tampered, SECRET).is_none());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("a@x.com", SECRET).unwrap();
        assert!(verify_token(&token, b"not-the-secret").is_none());
    }

    fn token_with_expiry(offset_secs: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            email: "a@x.com".into(),
            iat: now + offset_secs - ACCESS_TOKEN_EXPIRY_SECS,
            exp: now + offset_secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[test]
    fn expired_token_is_rejected_regardless_of_payload() {
        // 1h lifetime, presented 3601s after issuance.
        assert!(verify_token(&token_with_expiry(-3601), SECRET).is_none());
    }

    #[test]
    fn expiry_boundary_has_no_clock_tolerance() {
        // Just past expiry is rejected — no leeway window.
        assert!(verify_token(&token_with_expiry(-30), SECRET).is_none());
        assert!(verify_token(&token_with_expiry(-1), SECRET).is_none());
        // Still inside the lifetime is accepted.
        assert!(verify_token(&token_with_expiry(30), SECRET).is_some());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_token("not-a-jwt", SECRET).is_none());
        assert!(verify_token("", SECRET).is_none());
    }
}
