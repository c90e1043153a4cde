use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-purple-200 border-t-purple-600"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}

/// Full-screen neutral loading state used while auth resolves.
#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div
                class="animate-spin rounded-full h-12 w-12 border-b-2 border-purple-600"
                role="status"
                aria-label="Loading"
            ></div>
        </div>
    }
}
