pub mod paths;

#[cfg(target_arch = "wasm32")]
mod create_quiz;
#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod quiz;
#[cfg(target_arch = "wasm32")]
mod register;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::create_quiz::CreateQuizPage;
    use super::dashboard::DashboardPage;
    use super::login::LoginPage;
    use super::not_found::NotFoundPage;
    use super::paths;
    use super::quiz::QuizPage;
    use super::register::RegisterPage;
    use crate::features::auth::guards::{ProtectedRoute, PublicRoute};
    use leptos::prelude::*;
    use leptos_router::NavigateOptions;
    use leptos_router::components::{Redirect, Route, Routes};
    use leptos_router::path;

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route
                    path=path!("/")
                    view=|| {
                        let options = NavigateOptions {
                            replace: true,
                            ..Default::default()
                        };
                        view! { <Redirect path=paths::DASHBOARD options=options /> }
                    }
                />
                <Route
                    path=path!("/login")
                    view=|| view! { <PublicRoute><LoginPage /></PublicRoute> }
                />
                <Route
                    path=path!("/register")
                    view=|| view! { <PublicRoute><RegisterPage /></PublicRoute> }
                />
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
                />
                <Route
                    path=path!("/create-quiz")
                    view=|| view! { <ProtectedRoute><CreateQuizPage /></ProtectedRoute> }
                />
                <Route
                    path=path!("/quiz/:quizId")
                    view=|| view! { <ProtectedRoute><QuizPage /></ProtectedRoute> }
                />
            </Routes>
        }
    }
}
