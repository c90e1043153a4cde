//! Auth feature: the mock auth collaborator, the reactive `AuthContext`
//! shared through Leptos, and the route guards built on it. Credentials are
//! carried as `SecretString` and must never be logged.
//!
//! Flow overview: the provider starts loading, resolves to anonymous (there
//! is no session store), login/register set a `UserSession`, and logout
//! clears it. Guards redirect whenever the status changes.

pub mod client;
pub mod guards;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod types;
