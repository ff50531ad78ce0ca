//! Application pages module
//!
//! - Auth page (login / signup)
//! - Sidebar layout and the section pages it hosts
//! - Not found

mod auth;
mod not_found;
mod section;

pub use auth::AuthPage;
pub use not_found::NotFoundPage;
pub use section::{SectionPage, ShellLayout};
