//! Demo authentication backend
//!
//! Answers the browser's `/api/auth/*` calls from accounts configured in
//! `AUTH_USERS`.

pub mod api;
pub mod credentials;

pub use api::{AuthApiState, auth_api_router};
pub use credentials::{CredentialError, CredentialStore};
