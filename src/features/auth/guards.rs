//! Route guards. The decision is a pure function of the auth status so it can
//! be tested without a browser; the components only render the outcome.
//! These are UX guards; there is no server to enforce access.

use crate::features::auth::types::UserSession;
use crate::routes::paths;

/// Auth state as seen by guards and the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated(UserSession),
    Anonymous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Signed-in users only (dashboard, authoring, quiz).
    Protected,
    /// Anonymous users only (login, register).
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Pending,
    Render,
    Redirect(&'static str),
}

/// Maps the auth signals to a status. Loading wins over any session value so
/// guards never redirect while hydration is still running.
pub fn auth_status(is_loading: bool, session: Option<UserSession>) -> AuthStatus {
    if is_loading {
        return AuthStatus::Loading;
    }
    match session {
        Some(user) => AuthStatus::Authenticated(user),
        None => AuthStatus::Anonymous,
    }
}

pub fn decide(access: Access, status: &AuthStatus) -> GuardOutcome {
    match (access, status) {
        (_, AuthStatus::Loading) => GuardOutcome::Pending,
        (Access::Protected, AuthStatus::Anonymous) => GuardOutcome::Redirect(paths::LOGIN),
        (Access::Public, AuthStatus::Authenticated(_)) => GuardOutcome::Redirect(paths::DASHBOARD),
        (Access::Protected, AuthStatus::Authenticated(_))
        | (Access::Public, AuthStatus::Anonymous) => GuardOutcome::Render,
    }
}

#[cfg(target_arch = "wasm32")]
pub use view::{ProtectedRoute, PublicRoute};

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{Access, GuardOutcome, decide};
    use crate::components::PageLoader;
    use crate::features::auth::state::use_auth;
    use leptos::prelude::*;
    use leptos_router::NavigateOptions;
    use leptos_router::components::Redirect;

    fn guarded(access: Access, children: ChildrenFn) -> impl IntoView {
        let auth = use_auth();
        let outcome = Memo::new(move |_| decide(access, &auth.status()));

        move || match outcome.get() {
            GuardOutcome::Pending => view! { <PageLoader /> }.into_any(),
            GuardOutcome::Redirect(path) => {
                tracing::debug!(?access, path, "guard redirect");
                let options = NavigateOptions {
                    replace: true,
                    ..Default::default()
                };
                view! { <Redirect path=path options=options /> }.into_any()
            }
            GuardOutcome::Render => children().into_any(),
        }
    }

    /// Renders children for signed-in users, otherwise sends them to `/login`.
    #[component]
    pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
        guarded(Access::Protected, children)
    }

    /// Renders children for anonymous users, otherwise sends them to `/dashboard`.
    #[component]
    pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
        guarded(Access::Public, children)
    }
}
