//! Shared layout wrapper with the top bar, signed-in user, logout control and
//! a build footer. Routes only supply the page body.

use crate::app_lib::{AppConfig, build_info};
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with the header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let footer = build_info::version_label(&config.app_name);
    let user_name = Signal::derive(move || auth.user().map(|user| user.name).unwrap_or_default());

    view! {
        <div class="min-h-screen flex flex-col bg-gray-100 dark:bg-gray-900">
            <nav class="bg-white shadow-lg dark:bg-gray-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16">
                        <div class="flex items-center">
                            <A href=paths::DASHBOARD {..} class="text-2xl font-bold text-purple-600">
                                {config.app_name.clone()}
                            </A>
                        </div>
                        <Show when=move || auth.is_authenticated.get()>
                            <div class="flex items-center">
                                <span class="text-gray-700 dark:text-gray-200 mr-4">
                                    "Welcome, " {move || user_name.get()}
                                </span>
                                <button
                                    type="button"
                                    class="bg-red-500 text-white px-4 py-2 rounded-md hover:bg-red-600 transition-colors"
                                    on:click=move |_| auth.logout()
                                >
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </nav>
            <main class="flex-1">
                <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-500">
                {footer}
            </footer>
        </div>
    }
}
