//! Framework-free state machines and the authentication seam

pub mod auth;
pub mod auth_form;
pub mod calendar;
#[cfg(feature = "ssr")]
pub mod config;
pub mod navigation;
#[cfg(feature = "ssr")]
pub mod server;

pub use auth::{AuthError, AuthSession, Authenticator, Credentials};
pub use auth_form::{
    AuthFormState, AuthMode, FieldSet, FormStore, SocialProvider, SubmitOutcome, submit,
};
pub use navigation::{MENU, MenuEntry, NavigationState, SubEntry, is_active};
