//! Quiz feature: catalog collaborator, authoring draft, and the timed
//! quiz-taking state machine. Everything here is plain data and logic so it
//! runs under native `cargo test`; the views live in `routes`.

pub mod catalog;
pub mod client;
pub mod draft;
mod fixtures;
pub mod scoring;
pub mod session;
pub mod timer;
pub mod types;
