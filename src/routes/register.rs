use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::RegisterRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use secrecy::SecretString;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(session) => {
                    auth.set_session(session);
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let password_value = password.get_untracked();
        if password_value != confirm.get_untracked() {
            set_error.set(Some(AppError::Validation(
                "Passwords do not match.".to_string(),
            )));
            return;
        }

        register_action.dispatch(RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: SecretString::from(password_value),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto space-y-5" on:submit=on_submit>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white">"Create an account"</h2>
                <div>
                    <label class=Theme::LABEL for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="name"
                        required
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="confirm">"Confirm password"</label>
                    <input
                        id="confirm"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_confirm.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending() full_width=true>
                    "Register"
                </Button>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Already registered? "
                    <A href=paths::LOGIN {..} class="text-purple-600 hover:underline">
                        "Sign in"
                    </A>
                </p>
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}
            </form>
        </AppShell>
    }
}
