//! Account routes: signup, login, session check, logout.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};

use notekeep_store::NewUser;

use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(alias = "Name")]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Shared response shape for signup and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub logged_in: bool,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /user/signup
async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, CookieJar, Json<AuthResponse>)> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.trim().is_empty()
    {
        return Err(ApiError::BadRequest(
            "name, email, and password are required".to_string(),
        ));
    }

    let store = state.store();

    if store.find_user_by_email(&request.email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = auth::hash_password(&request.password)?;

    let user = store
        .insert_user(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        })
        .await?;

    let token = auth::issue_token(user.id, &user.email, &state.config().jwt_secret)?;
    let jar = jar.add(auth::session_cookie(token));

    tracing::info!(user_id = %user.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            success: true,
            message: "Signup successful".to_string(),
        }),
    ))
}

/// POST /user/login
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let store = state.store();

    let user = store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User does not exist".to_string()))?;

    let valid = auth::verify_password(&request.password, &user.password_hash)?;
    if !valid {
        // Never reveal which of email/password was wrong beyond this.
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = auth::issue_token(user.id, &user.email, &state.config().jwt_secret)?;
    let jar = jar.add(auth::session_cookie(token));

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            message: "Login successful".to_string(),
        }),
    ))
}

/// GET /user/check — report session status from the cookie alone.
///
/// Never touches the store and never fails: an absent or invalid token is
/// simply a logged-out session.
async fn check(State(state): State<AppState>, jar: CookieJar) -> Json<CheckResponse> {
    let logged_in = jar
        .get(auth::SESSION_COOKIE)
        .map(Cookie::value)
        .is_some_and(|token| auth::verify_token(token, &state.config().jwt_secret).is_ok());

    Json(CheckResponse { logged_in })
}

/// POST /user/logout — clear the session cookie unconditionally.
///
/// The token itself stays valid until natural expiry; there is no
/// revocation list.
async fn logout(jar: CookieJar) -> (CookieJar, Json<LogoutResponse>) {
    let jar = jar.add(auth::clear_session_cookie());

    (
        jar,
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// Build account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user/signup", post(signup))
        .route("/user/login", post(login))
        .route("/user/check", get(check))
        .route("/user/logout", post(logout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_deserialize() {
        let json = r#"{"name": "Ada", "email": "ada@x.com", "password": "secret"}"#;
        let request: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.email, "ada@x.com");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn test_signup_request_accepts_capitalized_name() {
        let json = r#"{"Name": "Ada", "email": "ada@x.com", "password": "secret"}"#;
        let request: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Ada");
    }

    #[test]
    fn test_login_request_deserialize() {
        let json = r#"{"email": "ada@x.com", "password": "secret"}"#;
        let request: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email, "ada@x.com");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn test_auth_response_serialize() {
        let response = AuthResponse {
            success: true,
            message: "Signup successful".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("Signup successful"));
    }

    #[test]
    fn test_check_response_serialize() {
        let json = serde_json::to_string(&CheckResponse { logged_in: false }).unwrap();
        assert_eq!(json, r#"{"logged_in":false}"#);
    }
}
