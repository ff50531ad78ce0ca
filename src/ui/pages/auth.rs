//! Authentication page
//!
//! Hero image on the left, the login/signup form on the right. Redirects to
//! the home page once a session exists.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthForm, use_auth_context};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if auth.is_authenticated() {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <div class="min-h-screen w-full flex">
            // Hero
            <div class="hidden lg:flex lg:w-1/2 relative">
                <div class="absolute inset-0 bg-gradient-to-b from-purple-500/20 to-purple-900/80" />
                <img
                    src="https://images.unsplash.com/photo-1682686581498-5e85c7228119?q=80&w=2070"
                    alt="Desert landscape"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 flex flex-col p-12">
                    <div class="flex items-center gap-2">
                        <Icon name=icons::CAMERA class="w-8 h-8" />
                        <span class="text-2xl font-bold text-white">"PhotoApp"</span>
                    </div>
                    <div class="flex-1 flex items-center justify-center">
                        <div class="max-w-md">
                            <h1 class="text-4xl font-bold text-white mb-4">
                                "Capturing Moments,"
                                <br />
                                "Creating Memories"
                            </h1>
                            <p class="text-gray-200">
                                "Join our community of photographers and share your unique perspective with the world."
                            </p>
                        </div>
                    </div>
                    <A
                        href="/"
                        attr:class="absolute top-6 right-8 flex items-center text-white hover:text-white/80"
                    >
                        <Icon name=icons::ARROW_LEFT class="w-4 h-4 mr-2" />
                        "Back to website"
                    </A>
                </div>
            </div>

            // Form
            <div class="w-full lg:w-1/2 flex items-center justify-center p-8">
                <AuthForm on_success=Callback::new(on_success) />
            </div>
        </div>
    }
}
