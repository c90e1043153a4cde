//! Auth session state and context for the frontend. The provider starts in
//! the loading state, asks the auth collaborator for an existing session
//! once on mount, and then settles on signed in or anonymous. Logout clears
//! the identity, which makes every guard re-evaluate.

use crate::features::auth::guards::{AuthStatus, auth_status};
use crate::features::auth::{client, types::UserSession};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<UserSession>>,
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(session: RwSignal<Option<UserSession>>, is_loading: RwSignal<bool>) -> Self {
        let is_authenticated = Signal::derive(move || session.with(Option::is_some));
        Self {
            session,
            is_loading,
            is_authenticated,
        }
    }

    /// Current status; tracked, so guards re-run when it changes.
    pub fn status(&self) -> AuthStatus {
        auth_status(self.is_loading.get(), self.session.get())
    }

    pub fn user(&self) -> Option<UserSession> {
        self.session.get()
    }

    /// Updates the in-memory session after login or registration.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
        self.is_loading.set(false);
    }

    pub fn clear_session(&self) {
        self.session.set(None);
    }

    /// Ends the session with the collaborator and clears local state even if
    /// the collaborator call fails.
    pub fn logout(&self) {
        let auth = *self;
        spawn_local(async move {
            if let Err(err) = client::logout().await {
                tracing::warn!(error = %err, "logout failed; clearing local session anyway");
            }
            auth.clear_session();
        });
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(None), RwSignal::new(true));
    provide_context(auth);

    spawn_local(async move {
        match client::fetch_session().await {
            Ok(Some(session)) => auth.set_session(session),
            Ok(None) => auth.is_loading.set(false),
            Err(err) => {
                tracing::warn!(error = %err, "session lookup failed; continuing anonymous");
                auth.is_loading.set(false);
            }
        }
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback anonymous context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(None), RwSignal::new(false)))
}
