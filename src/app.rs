use crate::app_lib::AppConfig;
use crate::features::auth::state::AuthProvider;
use crate::features::quizzes::catalog::Catalog;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    provide_context(Catalog::default());

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
