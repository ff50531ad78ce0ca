//! Authentication UI module
//!
//! The sign-in form and the session context it reports to.

mod auth_form;
mod context;

pub use auth_form::AuthForm;
pub use context::{AuthContext, HttpAuthenticator, provide_auth_context, use_auth_context};
