//! Auth API endpoints
//!
//! Provides REST API endpoints for authentication:
//! - POST /api/auth/login - Check credentials and open a session
//! - POST /api/auth/logout - Close a session
//!
//! There is no registration endpoint; signup submission is not implemented.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use std::sync::Arc;

use super::credentials::CredentialStore;
use crate::core::auth::{
    ApiError, AuthError, Credentials, LoginRequest, LoginResponse, LogoutRequest,
};

/// Auth API state containing the credential store
#[derive(Clone)]
pub struct AuthApiState {
    pub store: CredentialStore,
}

/// Convert AuthError to API response
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::SessionNotFound => StatusCode::NOT_FOUND,
            AuthError::SignupUnavailable => StatusCode::NOT_IMPLEMENTED,
            AuthError::Rejected(_) => StatusCode::BAD_REQUEST,
            AuthError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ApiError::from(&self))).into_response()
    }
}

/// Response for logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Create the auth API router
pub fn auth_api_router(state: AuthApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .with_state(state)
}

/// POST /api/auth/login
async fn login_handler(
    State(state): State<Arc<AuthApiState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let credentials = Credentials {
        email: request.email,
        password: request.password,
    };
    let store = state.store.clone();
    let email = credentials.email.clone();

    // bcrypt is CPU bound
    let result = tokio::task::spawn_blocking(move || store.login(&credentials))
        .await
        .map_err(|err| AuthError::Transport(err.to_string()))?;

    match result {
        Ok(session) => {
            tracing::info!("Login succeeded for {}", email);
            Ok(Json(LoginResponse { session }))
        }
        Err(err) => {
            tracing::warn!("Login failed for {}: {}", email, err);
            Err(err)
        }
    }
}

/// POST /api/auth/logout
async fn logout_handler(
    State(state): State<Arc<AuthApiState>>,
    Json(request): Json<LogoutRequest>,
) -> Result<Json<LogoutResponse>, AuthError> {
    let email = state.store.logout(&request.token)?;
    tracing::info!("Logged out {}", email);

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_app() -> (Router, CredentialStore) {
        let store = CredentialStore::new();
        store.add_user("u@test.com", "pw", 4).unwrap();
        let app = auth_api_router(AuthApiState {
            store: store.clone(),
        });
        (app, store)
    }

    fn json_request(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn login_body(email: &str, password: &str) -> String {
        serde_json::to_string(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_login_success() {
        let (app, store) = create_test_app();

        let response = app
            .oneshot(json_request("/api/auth/login", login_body("u@test.com", "pw")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: LoginResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.session.email, "u@test.com");
        assert_eq!(store.session_email(&body.session.token).as_deref(), Some("u@test.com"));
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let (app, store) = create_test_app();

        let response = app
            .oneshot(json_request("/api/auth/login", login_body("u@test.com", "wrong")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "INVALID_CREDENTIALS");
        assert_eq!(store.session_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_unknown_session() {
        let (app, _store) = create_test_app();
        let body = serde_json::to_string(&LogoutRequest {
            token: "missing".to_string(),
        })
        .unwrap();

        let response = app
            .oneshot(json_request("/api/auth/logout", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_logout_closes_session() {
        let (app, store) = create_test_app();
        let session = store
            .login(&Credentials {
                email: "u@test.com".to_string(),
                password: "pw".to_string(),
            })
            .unwrap();
        let body = serde_json::to_string(&LogoutRequest {
            token: session.token.clone(),
        })
        .unwrap();

        let response = app
            .oneshot(json_request("/api/auth/logout", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(store.session_email(&session.token).is_none());
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::from(&AuthError::InvalidCredentials);
        let json = serde_json::to_string(&error).unwrap();

        assert!(json.contains("Invalid credentials"));
        assert!(json.contains("INVALID_CREDENTIALS"));
    }
}
