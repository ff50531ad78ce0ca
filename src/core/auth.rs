//! Authentication collaborator seam
//!
//! The form only knows the [`Authenticator`] trait. The browser implementation
//! talks to `/api/auth/*`; the demo server in `core::server` answers it.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Credentials handed to the authenticator, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Session established by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub email: String,
}

/// Authentication failure as seen by the form
///
/// Transport problems are folded into the same shape so the form has a single
/// failure path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session not found")]
    SessionNotFound,

    #[error("{0}")]
    Rejected(String),

    #[error("Could not reach the server: {0}")]
    Transport(String),

    #[error("Account creation is not available yet")]
    SignupUnavailable,
}

impl AuthError {
    /// Message shown to the user
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Stable code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::SessionNotFound => "SESSION_NOT_FOUND",
            AuthError::Rejected(_) => "REJECTED",
            AuthError::Transport(_) => "TRANSPORT_ERROR",
            AuthError::SignupUnavailable => "SIGNUP_UNAVAILABLE",
        }
    }

    /// Rebuild an error from an API error body
    pub fn from_api(error: ApiError) -> Self {
        match error.code.as_str() {
            "INVALID_CREDENTIALS" => AuthError::InvalidCredentials,
            "SESSION_NOT_FOUND" => AuthError::SessionNotFound,
            _ => AuthError::Rejected(error.error),
        }
    }
}

/// Anything that can check credentials
///
/// Futures are not required to be `Send`; in the browser they run on the
/// single-threaded executor.
pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthSession, AuthError>>;
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

/// Login response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session: AuthSession,
}

/// Logout request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

/// API error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

impl From<&AuthError> for ApiError {
    fn from(err: &AuthError) -> Self {
        ApiError::new(err.reason(), err.code())
    }
}
