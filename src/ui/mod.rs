pub mod auth;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod sidebar;

pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, NotificationsContainer, provide_notifications};
pub use sidebar::Sidebar;
