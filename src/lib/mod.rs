//! Shared frontend utilities: configuration, errors, logging, build metadata
//! and the Tailwind class constants used across views.
//!
//! ## Page flow
//!
//! 1. **Sign in:** `/login` or `/register` drive the mock auth collaborator and
//!    store a `UserSession` in the `AuthContext`.
//! 2. **Browse:** `/dashboard` lists the catalog through the quiz collaborator.
//! 3. **Author:** `/create-quiz` edits a `QuizDraft` and submits it.
//! 4. **Play:** `/quiz/:quizId` loads a `QuizDetail` and runs the timed
//!    `Attempt` state machine until finish or timeout.

pub mod build_info;
pub mod config;
pub mod errors;
pub mod logging;
pub mod theme;

pub use config::AppConfig;
pub use errors::AppError;
