//! Toast notifications
//!
//! The channel through which failed sign-ins and other messages reach the
//! user. A single `NotificationManager` is provided as context by `App`.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::ui::icon::{Icon, icons};

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Default lifetime of a toast
const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }
}

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications container component
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();
    let notifications = manager.notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm" role="status">
            {move || {
                notifications.get().into_iter().map(|item| {
                    view! {
                        <NotificationToast
                            notification=item.notification
                            id=item.id
                            notifications=notifications
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn NotificationToast(
    notification: Notification,
    id: u64,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                // The container may already be gone
                notifications.try_update(|n| n.retain(|i| i.id != id));
            });
        }
    }

    let (bg_class, border_class) = match notification.kind {
        NotificationKind::Success => ("bg-green-50", "border-green-300"),
        NotificationKind::Error => ("bg-red-50", "border-red-300"),
        NotificationKind::Info => ("bg-blue-50", "border-blue-300"),
    };
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border shadow-lg {} {}",
        bg_class, border_class
    );

    view! {
        <div class=container_class>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium text-gray-900">{notification.title}</h4>
                <p class="text-xs text-gray-600 mt-0.5">{notification.message}</p>
            </div>
            <button
                class="text-gray-400 hover:text-gray-700"
                aria-label="Dismiss"
                on:click=move |_| notifications.update(|n| n.retain(|i| i.id != id))
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

/// Handle for pushing notifications
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::new(NotificationKind::Success, title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::new(NotificationKind::Error, title, message));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::new(NotificationKind::Info, title, message));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}
