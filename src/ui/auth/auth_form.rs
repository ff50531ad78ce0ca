//! Login / signup form component
//!
//! All state lives in one `RwSignal<AuthFormState>`; this file only renders
//! it and forwards events.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{HttpAuthenticator, use_auth_context};
use crate::core::auth_form::{AuthFormState, AuthMode, FormStore, SubmitOutcome, submit};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// A disposed signal means the form was unmounted.
impl FormStore for RwSignal<AuthFormState> {
    fn try_update_form<R>(&self, f: impl FnOnce(&mut AuthFormState) -> R) -> Option<R> {
        Update::try_update(self, f)
    }
}

/// Dual-mode authentication form
#[component]
pub fn AuthForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let form = RwSignal::new(AuthFormState::new());
    let mode = Memo::new(move |_| form.with(AuthFormState::mode));
    let pending = Memo::new(move |_| form.with(AuthFormState::is_pending));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let authenticator = HttpAuthenticator::new(auth);
        spawn_local(async move {
            match submit(&form, &authenticator).await {
                Some(SubmitOutcome::Succeeded(session)) => {
                    notifications.success(
                        "Signed in",
                        format!("Welcome back, {}", session.email),
                    );
                    if let Some(callback) = on_success {
                        callback.run(());
                    }
                }
                Some(SubmitOutcome::Failed(err)) => {
                    notifications.error("Sign in failed", err.reason());
                }
                Some(SubmitOutcome::SignupUnavailable) => {
                    notifications.info("Sign up", "Account creation is not available yet.");
                }
                Some(SubmitOutcome::AlreadyPending) | None => {}
            }
        });
    };

    view! {
        <div class="w-full max-w-md space-y-8">
            <div class="text-center lg:text-left">
                <h2 class="text-3xl font-bold">{move || mode.get().heading()}</h2>
                <p class="text-gray-500 mt-2">
                    {move || {
                        let (prompt, link, target) = mode.get().switch_prompt();
                        view! {
                            {prompt}
                            <button
                                type="button"
                                class="text-purple-600 hover:text-purple-700 font-medium"
                                on:click=move |_| form.update(|f| f.switch_mode(target))
                            >
                                {link}
                            </button>
                        }
                    }}
                </p>
            </div>

            <form on:submit=on_submit class="space-y-6">
                <Show when=move || mode.get().field_set().name_fields>
                    // Not read into state
                    <div class="grid grid-cols-2 gap-4">
                        <div class="space-y-2">
                            <label for="firstName" class="text-sm font-medium">"First name"</label>
                            <input id="firstName" class="input-base" placeholder="John" />
                        </div>
                        <div class="space-y-2">
                            <label for="lastName" class="text-sm font-medium">"Last name"</label>
                            <input id="lastName" class="input-base" placeholder="Doe" />
                        </div>
                    </div>
                </Show>

                <div class="space-y-2">
                    <label for="email" class="text-sm font-medium">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        class="input-base"
                        placeholder="john@example.com"
                        prop:value=move || form.with(|f| f.email().to_string())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                </div>

                <div class="space-y-2">
                    <label for="password" class="text-sm font-medium">"Password"</label>
                    <div class="relative">
                        <input
                            id="password"
                            type=move || form.with(AuthFormState::password_input_type)
                            autocomplete="current-password"
                            class="input-base pr-10"
                            placeholder="••••••••"
                            prop:value=move || form.with(|f| f.password().to_string())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                        <button
                            type="button"
                            class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-500 hover:text-gray-700"
                            aria-label=move || {
                                if form.with(AuthFormState::password_visible) {
                                    "Hide password"
                                } else {
                                    "Show password"
                                }
                            }
                            on:click=move |_| form.update(AuthFormState::toggle_password_visibility)
                        >
                            {move || {
                                if form.with(AuthFormState::password_visible) {
                                    view! { <Icon name=icons::EYE_OFF class="w-4 h-4" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::EYE class="w-4 h-4" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>

                <Show when=move || {
                    let fields = mode.get().field_set();
                    fields.remember_me || fields.forgot_password
                }>
                    <div class="flex items-center justify-between">
                        <Show when=move || mode.get().field_set().remember_me>
                            <div class="flex items-center space-x-2">
                                <input id="remember" type="checkbox" class="w-4 h-4 rounded" />
                                <label for="remember" class="text-sm font-medium leading-none">
                                    "Remember me"
                                </label>
                            </div>
                        </Show>
                        <Show when=move || mode.get().field_set().forgot_password>
                            <button type="button" class="text-sm text-purple-600 hover:text-purple-700">
                                "Forgot password?"
                            </button>
                        </Show>
                    </div>
                </Show>

                {move || {
                    form.with(|f| f.error().map(|err| err.reason())).map(|error| {
                        view! {
                            <div class="p-3 bg-red-100 border border-red-300 rounded-lg" role="alert">
                                <p class="text-sm text-red-700">{error}</p>
                            </div>
                        }
                    })
                }}

                <button
                    type="submit"
                    class="w-full bg-purple-600 hover:bg-purple-700 text-white font-medium py-2 px-4 rounded-lg
                           disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200"
                    disabled=move || pending.get()
                >
                    {move || {
                        if pending.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                    "Signing in..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">{mode.get().submit_label()}</span> }.into_any()
                        }
                    }}
                </button>

                <div class="relative">
                    <div class="absolute inset-0 flex items-center">
                        <div class="w-full border-t border-gray-200"></div>
                    </div>
                    <div class="relative flex justify-center text-sm">
                        <span class="px-2 bg-white text-gray-500">"Or continue with"</span>
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    {move || {
                        mode.get()
                            .field_set()
                            .social_providers
                            .iter()
                            .map(|provider| {
                                view! {
                                    <button
                                        type="button"
                                        class="w-full flex items-center justify-center border border-gray-300 rounded-lg py-2 px-4 font-medium hover:bg-gray-50"
                                    >
                                        <Icon name=provider.icon() class="w-5 h-5 mr-2" />
                                        {provider.label()}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </form>
        </div>
    }
}
