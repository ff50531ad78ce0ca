use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::calendar::today_label;
use crate::core::navigation::{MenuEntry, NavigationState, SubEntry, is_active};
use crate::ui::auth::use_auth_context;
use crate::ui::{Icon, icons};

const LINK_ACTIVE: &str = "bg-blue-600 text-white";
const LINK_IDLE: &str = "hover:bg-gray-100 hover:text-blue-600 text-gray-700";

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = RwSignal::new(NavigationState::default());
    let expanded = Memo::new(move |_| nav.with(NavigationState::sidebar_expanded));
    let auth = use_auth_context();
    // Local time of the browser; the server render leaves the label empty
    let date = RwSignal::new(String::new());
    Effect::new(move |_| date.set(today_label()));
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            auth.logout().await;
            navigate("/auth", Default::default());
        });
    };

    view! {
        <aside class=move || {
            if expanded.get() {
                "bg-white shadow-lg h-screen rounded-2xl flex flex-col transition-all duration-300 w-64"
            } else {
                "bg-white shadow-lg h-screen rounded-2xl flex flex-col transition-all duration-300 w-20"
            }
        }>
            // Logo
            <div class="p-4 border-b border-gray-200">
                <div class="flex items-center justify-center gap-2">
                    <Icon name=icons::LOGO class="w-8 h-8" />
                    <Show when=move || expanded.get()>
                        <span class="text-xl font-bold">"PhotoApp"</span>
                    </Show>
                </div>
            </div>

            // Collapse button and date
            <div class="px-4 py-2 flex items-center justify-between border-b border-gray-200">
                <button
                    class="p-2 rounded-lg hover:bg-gray-100"
                    aria-label=move || if expanded.get() { "Collapse sidebar" } else { "Expand sidebar" }
                    on:click=move |_| nav.update(NavigationState::toggle_sidebar)
                >
                    {move || {
                        if expanded.get() {
                            view! { <Icon name=icons::CHEVRON_LEFT class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::CHEVRON_RIGHT class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
                <Show when=move || expanded.get()>
                    <span class="text-sm text-gray-500">{move || date.get()}</span>
                </Show>
            </div>

            // Menu
            <div class="flex-1 overflow-y-auto p-4">
                <nav>
                    {nav
                        .with_untracked(NavigationState::menu)
                        .iter()
                        .map(|entry| view! { <MenuItem entry=*entry nav=nav /> })
                        .collect_view()}
                </nav>
            </div>

            // Logout
            <div class="p-4 border-t border-gray-200">
                <button
                    class=move || {
                        if expanded.get() {
                            "w-full flex items-center justify-center gap-2 text-red-600 hover:text-red-700 hover:bg-red-50 rounded-lg py-2"
                        } else {
                            "w-full flex items-center justify-center gap-2 text-red-600 hover:text-red-700 hover:bg-red-50 rounded-lg py-2 px-0"
                        }
                    }
                    title=move || (!expanded.get()).then_some("Logout")
                    on:click=on_logout
                >
                    <Icon name=icons::LOG_OUT class="h-4 w-4" />
                    <Show when=move || expanded.get()>"Logout"</Show>
                </button>
            </div>
        </aside>
    }
}

/// One top-level entry: a direct link or a group with its sub-links
#[component]
fn MenuItem(entry: MenuEntry, nav: RwSignal<NavigationState>) -> impl IntoView {
    let pathname = use_location().pathname;
    let title = entry.title();
    let icon = entry.icon();
    let expanded = move || nav.with(NavigationState::shows_labels);
    let tooltip = move || nav.with(|n| n.tooltip(title));

    match entry {
        MenuEntry::Leaf { destination, .. } => view! {
            <div>
                <A
                    href=destination
                    attr:class=move || {
                        let state = if entry.is_active(&pathname.get()) {
                            LINK_ACTIVE
                        } else {
                            LINK_IDLE
                        };
                        format!(
                            "w-full flex items-center gap-3 p-3 rounded-lg mb-1 \
                             transition-colors duration-100 {state}"
                        )
                    }
                    attr:title=tooltip
                >
                    <Icon name=icon />
                    <Show when=expanded>
                        <span class="font-medium">{title}</span>
                    </Show>
                </A>
            </div>
        }
        .into_any(),
        MenuEntry::Group { children, .. } => {
            let open = move || nav.with(|n| n.is_group_open(title));

            view! {
                <div>
                    <button
                        class=move || {
                            let state = if nav.with(|n| n.expanded_group() == Some(title)) {
                                "bg-blue-50 text-blue-600"
                            } else {
                                LINK_IDLE
                            };
                            format!(
                                "w-full flex items-center justify-between p-3 rounded-lg mb-1 \
                                 transition-colors duration-100 {state}"
                            )
                        }
                        title=tooltip
                        aria-expanded=move || if open() { "true" } else { "false" }
                        on:click=move |_| nav.update(|n| n.toggle_group(title))
                    >
                        <div class="flex items-center gap-3">
                            <Icon name=icon />
                            <Show when=expanded>
                                <span class="font-medium">{title}</span>
                            </Show>
                        </div>
                        <Show when=expanded>
                            {move || {
                                if open() {
                                    view! { <Icon name=icons::MINUS class="w-4 h-4" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::PLUS class="w-4 h-4" /> }.into_any()
                                }
                            }}
                        </Show>
                    </button>
                    <Show when=open>
                        <div class="ml-4 mb-2 overflow-hidden animate-slideDown">
                            {children
                                .iter()
                                .map(|sub| view! { <SubMenuLink sub=*sub /> })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn SubMenuLink(sub: SubEntry) -> impl IntoView {
    let pathname = use_location().pathname;
    let destination = sub.destination;

    view! {
        <A
            href=destination
            attr:class=move || {
                let state = if is_active(&pathname.get(), destination) {
                    LINK_ACTIVE
                } else {
                    "hover:bg-gray-100 hover:text-blue-600 text-gray-600"
                };
                format!(
                    "block w-full text-left p-2 pl-8 rounded-lg mb-1 \
                     transition-colors duration-100 {state}"
                )
            }
        >
            {sub.title}
        </A>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    use super::*;
    use crate::ui::auth::provide_auth_context;

    fn render_at(path: &str) -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(RequestUrl::new(path));
        provide_auth_context();

        view! {
            <Router>
                <Sidebar />
            </Router>
        }
        .to_html()
    }

    #[test]
    fn test_server_render_leaves_date_for_the_browser() {
        let html = render_at("/");

        assert!(html.contains("PhotoApp"));
        assert!(!html.contains(&today_label()));
    }

    #[test]
    fn test_server_render_highlights_current_leaf() {
        let html = render_at("/settings");
        assert!(html.contains(LINK_ACTIVE));

        let html = render_at("/nowhere");
        assert!(!html.contains(LINK_ACTIVE));
    }
}
