//! In-memory credential store and session table
//!
//! Passwords are kept as bcrypt hashes. Sessions are opaque UUID tokens
//! mapped to the email that opened them. A session lives for `SESSION_TTL`;
//! expired sessions are dropped on the next login.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::core::auth::{AuthError, AuthSession, Credentials};
use crate::core::config::{Config, ConfigError};

/// Credential store setup errors
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Lifetime of a session opened by `login`
pub const SESSION_TTL: Duration = Duration::hours(12);

#[derive(Debug, Clone)]
struct Session {
    email: String,
    expires_at: DateTime<Utc>,
}

impl Session {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Shared store of demo accounts and open sessions
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<DashMap<String, String>>,
    sessions: Arc<DashMap<String, Session>>,
    session_ttl: Duration,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::with_session_ttl(SESSION_TTL)
    }

    pub fn with_session_ttl(session_ttl: Duration) -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            sessions: Arc::new(DashMap::new()),
            session_ttl,
        }
    }

    /// Build a store holding the accounts listed in `AUTH_USERS`
    pub fn from_config(config: &Config) -> Result<Self, CredentialError> {
        let store = Self::new();
        let cost = config.bcrypt_cost()?;

        for (email, password) in config.credentials()? {
            store.add_user(&email, &password, cost)?;
        }

        Ok(store)
    }

    /// Add or replace an account
    pub fn add_user(&self, email: &str, password: &str, cost: u32) -> Result<(), CredentialError> {
        let hash = bcrypt::hash(password, cost)?;
        self.users.insert(email.to_string(), hash);
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Check a password. Unknown emails and wrong passwords look the same.
    pub fn verify(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let Some(hash) = self
            .users
            .get(&credentials.email)
            .map(|entry| entry.value().clone())
        else {
            return Err(AuthError::InvalidCredentials);
        };

        match bcrypt::verify(&credentials.password, &hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(AuthError::InvalidCredentials),
            Err(err) => {
                tracing::error!("Stored hash for {} is unusable: {}", credentials.email, err);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Verify credentials and open a session
    pub fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        self.verify(credentials)?;

        let now = Utc::now();
        self.prune_expired(now);

        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                email: credentials.email.clone(),
                expires_at: now + self.session_ttl,
            },
        );

        Ok(AuthSession {
            token,
            email: credentials.email.clone(),
        })
    }

    /// Close a session, returning the email it belonged to
    pub fn logout(&self, token: &str) -> Result<String, AuthError> {
        self.sessions
            .remove(token)
            .map(|(_, session)| session.email)
            .ok_or(AuthError::SessionNotFound)
    }

    /// Email behind a live session
    pub fn session_email(&self, token: &str) -> Option<String> {
        self.sessions
            .get(token)
            .filter(|entry| !entry.is_expired(Utc::now()))
            .map(|entry| entry.email.clone())
    }

    fn prune_expired(&self, now: DateTime<Utc>) {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(now));

        let pruned = before.saturating_sub(self.sessions.len());
        if pruned > 0 {
            tracing::debug!("Dropped {} expired session(s)", pruned);
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
