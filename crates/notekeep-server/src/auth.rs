//! Authentication: token service, password hashing, and the auth gate.
//!
//! Tokens are HS256 JWTs carrying the user id and email, valid for one hour
//! from issuance. There is no revocation: logout clears the cookie but an
//! already-issued token stays valid until it expires naturally.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use notekeep_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Token validity window in seconds (one hour).
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject).
    pub sub: Uuid,
    /// User email.
    pub email: String,
    /// Expiration time (unix timestamp).
    pub exp: usize,
    /// Issued at (unix timestamp).
    pub iat: usize,
}

/// Authenticated user extracted from the session cookie.
///
/// Use as a handler parameter to require authentication.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID.
    pub user_id: UserId,
    /// User email, as recorded in the token.
    pub email: String,
}

/// Create a session token for a user, valid for [`TOKEN_TTL_SECS`].
pub fn issue_token(user_id: UserId, email: &str, secret: &str) -> Result<String, ApiError> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: *user_id.as_uuid(),
        email: email.to_string(),
        exp: (now + TOKEN_TTL_SECS) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Failed to create token: {}", e)))
}

/// Verify a session token and return its claims.
///
/// Fails with `Unauthorized` if the signature is invalid, the token is
/// malformed, or the expiry has elapsed.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Build the session cookie carrying `token`.
///
/// Http-only, strict same-site, one hour max age.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(TOKEN_TTL_SECS))
        .build()
}

/// Build a cookie that clears the session on the client.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::ZERO)
        .build()
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(Cookie::value)
            .ok_or_else(|| ApiError::Unauthorized("Missing session cookie".to_string()))?;

        let claims = verify_token(token, &state.config().jwt_secret)?;

        Ok(AuthUser {
            user_id: UserId::from_uuid(claims.sub),
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same_password").unwrap();
        let b = hash_password("same_password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_issue_and_verify_token() {
        let secret = "test_secret_key_12345";
        let user_id = UserId::new();

        let token = issue_token(user_id, "a@x.com", secret).unwrap();
        let claims = verify_token(&token, secret).unwrap();

        assert_eq!(claims.sub, *user_id.as_uuid());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS as usize);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let token = issue_token(UserId::new(), "a@x.com", "secret1").unwrap();
        assert!(verify_token(&token, "secret2").is_err());
    }

    #[test]
    fn test_verify_token_garbage() {
        assert!(verify_token("not.a.jwt", "secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test_secret_key_12345";
        let now = chrono::Utc::now().timestamp();
        // Expired five minutes ago, well past the decoder's leeway.
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            exp: (now - 300) as usize,
            iat: (now - 300 - TOKEN_TTL_SECS) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, secret).is_err());
    }

    #[test]
    fn test_token_near_end_of_window_still_valid() {
        let secret = "test_secret_key_12345";
        let now = chrono::Utc::now().timestamp();
        // Issued 59 minutes ago: one minute of validity left.
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            exp: (now + 60) as usize,
            iat: (now + 60 - TOKEN_TTL_SECS) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, secret).is_ok());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc".to_string()).to_string();
        assert!(cookie.starts_with("token=abc"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_clear_session_cookie_expires_immediately() {
        let cookie = clear_session_cookie().to_string();
        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("Max-Age=0"));
    }
}
