//! QuizMaster: a client-side quiz app built with Leptos (CSR).
//!
//! The quiz domain (drafts, scoring, the timed attempt state machine and the
//! catalog collaborator) compiles on every target so it can be tested
//! natively. Views are only built for `wasm32`.

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
pub mod features;
pub mod routes;

/// Loads configuration, installs logging and mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use crate::app::App;
    use leptos::prelude::*;

    let config = app_lib::AppConfig::load();
    app_lib::logging::init(config.log_level);
    tracing::info!(
        version = %app_lib::build_info::version_label(&config.app_name),
        tick_ms = config.tick_interval_ms,
        "starting frontend"
    );

    mount_to_body(move || view! { <App config=config.clone() /> });
}
