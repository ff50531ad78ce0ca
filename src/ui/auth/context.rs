//! Auth context for the signed-in session
//!
//! This module provides:
//! - The app-wide session signal
//! - `HttpAuthenticator`, the browser side of `/api/auth/login`
//! - Logout

use leptos::prelude::*;

use crate::core::auth::{AuthError, AuthSession, Authenticator, Credentials};

/// Auth context providing the current session
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Session opened by the last successful login
    pub session: RwSignal<Option<AuthSession>>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Forget the session locally and tell the server
    pub async fn logout(&self) {
        if let Some(session) = self.session.get_untracked() {
            if let Err(err) = post_logout(&session.token).await {
                leptos::logging::warn!("logout request failed: {}", err);
            }
        }
        self.session.set(None);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext {
        session: RwSignal::new(None),
    };
    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Checks credentials against the server and stores the session on success
#[derive(Clone, Copy)]
pub struct HttpAuthenticator {
    ctx: AuthContext,
}

impl HttpAuthenticator {
    pub fn new(ctx: AuthContext) -> Self {
        Self { ctx }
    }
}

impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        let session = post_login(credentials).await?;
        self.ctx.session.set(Some(session.clone()));
        Ok(session)
    }
}

#[cfg(not(feature = "ssr"))]
async fn post_login(credentials: &Credentials) -> Result<AuthSession, AuthError> {
    use crate::core::auth::{ApiError, LoginRequest, LoginResponse};
    use gloo_net::http::Request;

    let transport = |err: gloo_net::Error| AuthError::Transport(err.to_string());

    let response = Request::post("/api/auth/login")
        .json(&LoginRequest::from(credentials))
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    if response.ok() {
        let body: LoginResponse = response.json().await.map_err(transport)?;
        Ok(body.session)
    } else {
        let body: ApiError = response.json().await.map_err(transport)?;
        Err(AuthError::from_api(body))
    }
}

#[cfg(feature = "ssr")]
async fn post_login(_credentials: &Credentials) -> Result<AuthSession, AuthError> {
    Err(AuthError::Transport(
        "Login not available on server".to_string(),
    ))
}

#[cfg(not(feature = "ssr"))]
async fn post_logout(token: &str) -> Result<(), AuthError> {
    use crate::core::auth::{ApiError, LogoutRequest};
    use gloo_net::http::Request;

    let transport = |err: gloo_net::Error| AuthError::Transport(err.to_string());

    let response = Request::post("/api/auth/logout")
        .json(&LogoutRequest {
            token: token.to_string(),
        })
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    if response.ok() {
        Ok(())
    } else {
        let body: ApiError = response.json().await.map_err(transport)?;
        Err(AuthError::from_api(body))
    }
}

#[cfg(feature = "ssr")]
async fn post_logout(_token: &str) -> Result<(), AuthError> {
    Ok(())
}
