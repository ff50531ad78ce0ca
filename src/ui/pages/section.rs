//! Pages reachable from the sidebar

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use super::NotFoundPage;
use crate::core::navigation::{MENU, find_title};
use crate::ui::Sidebar;

/// Sidebar on the left, routed page on the right
#[component]
pub fn ShellLayout() -> impl IntoView {
    view! {
        <div class="min-h-screen w-full flex gap-4 p-4 bg-gray-100">
            <Sidebar />
            <main class="flex-1 overflow-y-auto">
                <Outlet />
            </main>
        </div>
    }
}

/// Content for whichever menu destination is current
#[component]
pub fn SectionPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let title = move || find_title(MENU, &pathname.get());

    view! {
        {move || match title() {
            Some(title) => view! {
                <section class="bg-white rounded-2xl shadow-lg p-8 h-full">
                    <h1 class="text-2xl font-bold mb-2">{title}</h1>
                    <p class="text-gray-500">{move || pathname.get()}</p>
                </section>
            }
            .into_any(),
            None => view! { <NotFoundPage /> }.into_any(),
        }}
    }
}
