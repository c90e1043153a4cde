//! Async entry points the routes call. They resolve immediately against the
//! fixture catalog today, but keep the call sites shaped for a networked
//! catalog where every call can suspend and fail.

use crate::app_lib::AppError;
use crate::features::quizzes::catalog::Catalog;
use crate::features::quizzes::draft::QuizDraft;
use crate::features::quizzes::session::QuizResult;
use crate::features::quizzes::types::{QuizDetail, QuizId, QuizSummary};

/// Fetches the dashboard listing.
pub async fn list_quizzes(catalog: &Catalog) -> Result<Vec<QuizSummary>, AppError> {
    catalog.list_quizzes()
}

/// Fetches a playable quiz by its raw `:quizId` route segment.
pub async fn quiz_detail(catalog: &Catalog, raw_id: &str) -> Result<QuizDetail, AppError> {
    let id = QuizId::parse(raw_id)?;
    catalog.quiz_detail(id)
}

/// Reports a finished attempt.
pub async fn submit_quiz_result(catalog: &Catalog, result: &QuizResult) -> Result<(), AppError> {
    catalog.submit_quiz_result(result.quiz_id, result.score_percent())
}

/// Validates and submits a draft, returning the resulting catalog entry.
pub async fn create_quiz(catalog: &Catalog, draft: &QuizDraft) -> Result<QuizSummary, AppError> {
    catalog.create_quiz(draft)
}

/// Returns the catalog provided at the app root, or the fixture catalog.
#[cfg(target_arch = "wasm32")]
pub fn use_catalog() -> Catalog {
    leptos::prelude::use_context::<Catalog>().unwrap_or_default()
}
