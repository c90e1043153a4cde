//! 404 page for unknown routes, and the inline panel shown when a quiz id
//! does not exist.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the not-found page inside the app shell.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <NotFoundContent message="The page you requested does not exist.".to_string() />
        </AppShell>
    }
}

/// Inner 404 content without the shell, for pages that already render one.
#[component]
pub fn NotFoundContent(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-gray-200 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 dark:text-white whitespace-nowrap">
                    "Not found"
                </p>
            </div>
            <p class="mt-4 text-gray-500 dark:text-gray-400 max-w-sm mx-auto">{message}</p>
            <A
                href=paths::ROOT
                {..}
                class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-purple-600 rounded-lg hover:bg-purple-700 transition-colors"
            >
                "Back to Dashboard"
            </A>
        </div>
    }
}
