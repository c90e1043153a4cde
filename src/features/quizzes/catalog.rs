//! Quiz catalog collaborator. The app only ships an in-memory fixture
//! implementation; a networked catalog would implement the same trait and be
//! provided through [`Catalog`] instead.

use crate::app_lib::AppError;
use crate::features::quizzes::draft::QuizDraft;
use crate::features::quizzes::fixtures;
use crate::features::quizzes::types::{QuizDetail, QuizId, QuizSummary, time_limit_label};
use std::sync::Arc;

pub trait QuizCatalog {
    fn list_quizzes(&self) -> Result<Vec<QuizSummary>, AppError>;

    fn quiz_detail(&self, id: QuizId) -> Result<QuizDetail, AppError>;

    /// Records a finished attempt's score in percent.
    fn submit_quiz_result(&self, id: QuizId, score: f64) -> Result<(), AppError>;

    /// Accepts a validated draft and returns the entry it would list.
    fn create_quiz(&self, draft: &QuizDraft) -> Result<QuizSummary, AppError>;
}

/// Static catalog. Results and new quizzes are logged, never stored.
#[derive(Clone, Debug)]
pub struct FixtureCatalog {
    summaries: Vec<QuizSummary>,
    details: Vec<QuizDetail>,
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new(fixtures::summaries(), fixtures::details())
    }
}

impl FixtureCatalog {
    pub fn new(summaries: Vec<QuizSummary>, details: Vec<QuizDetail>) -> Self {
        Self { summaries, details }
    }

    fn next_id(&self) -> QuizId {
        let highest = self
            .summaries
            .iter()
            .map(|summary| summary.id.get())
            .max()
            .unwrap_or(0);
        QuizId::new(highest.saturating_add(1))
    }
}

impl QuizCatalog for FixtureCatalog {
    fn list_quizzes(&self) -> Result<Vec<QuizSummary>, AppError> {
        Ok(self.summaries.clone())
    }

    fn quiz_detail(&self, id: QuizId) -> Result<QuizDetail, AppError> {
        self.details
            .iter()
            .find(|detail| detail.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("quiz \"{id}\"")))
    }

    fn submit_quiz_result(&self, id: QuizId, score: f64) -> Result<(), AppError> {
        if !self.details.iter().any(|detail| detail.id == id) {
            return Err(AppError::NotFound(format!("quiz \"{id}\"")));
        }
        tracing::info!(quiz_id = %id, score, "quiz result submitted");
        Ok(())
    }

    fn create_quiz(&self, draft: &QuizDraft) -> Result<QuizSummary, AppError> {
        draft.validate()?;

        let summary = QuizSummary {
            id: self.next_id(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            question_count: draft.question_count(),
            time_limit_label: time_limit_label(draft.time_limit_minutes),
            difficulty: draft.difficulty,
            participant_count: 0,
        };

        match serde_json::to_string(draft) {
            Ok(payload) => tracing::debug!(%payload, "quiz draft payload"),
            Err(err) => tracing::warn!(error = %err, "quiz draft could not be encoded"),
        }
        tracing::info!(
            quiz_id = %summary.id,
            title = %summary.title,
            questions = summary.question_count,
            "quiz created"
        );
        Ok(summary)
    }
}

/// Shared handle to whichever catalog the app was started with.
#[derive(Clone)]
pub struct Catalog(Arc<dyn QuizCatalog + Send + Sync>);

impl Catalog {
    pub fn new(catalog: impl QuizCatalog + Send + Sync + 'static) -> Self {
        Self(Arc::new(catalog))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(FixtureCatalog::default())
    }
}

impl std::ops::Deref for Catalog {
    type Target = dyn QuizCatalog + Send + Sync;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::quizzes::draft::DraftField;
    use crate::features::quizzes::types::Difficulty;

    fn complete_draft() -> QuizDraft {
        let mut draft = QuizDraft::default();
        draft
            .update_field(DraftField::Title(" Rust Basics ".to_string()))
            .expect("title");
        draft
            .update_field(DraftField::Description("Borrowing and lifetimes".to_string()))
            .expect("description");
        draft
            .update_field(DraftField::Difficulty(Difficulty::Hard))
            .expect("difficulty");
        draft
            .update_question_text(0, "Which keyword moves a closure's captures?".to_string())
            .expect("text");
        for (index, option) in ["move", "ref", "static", "dyn"].into_iter().enumerate() {
            draft
                .update_option(0, index, option.to_string())
                .expect("option");
        }
        draft
    }

    #[test]
    fn lists_fixture_quizzes() {
        let quizzes = FixtureCatalog::default().list_quizzes().expect("list");
        assert_eq!(quizzes.len(), 3);
        assert_eq!(quizzes[0].title, "General Knowledge");
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let catalog = FixtureCatalog::new(Vec::new(), Vec::new());
        assert!(catalog.list_quizzes().expect("list").is_empty());
    }

    #[test]
    fn unknown_quiz_is_not_found() {
        let catalog = FixtureCatalog::default();
        assert!(catalog.quiz_detail(QuizId::new(2)).is_ok());
        assert_eq!(
            catalog.quiz_detail(QuizId::new(99)),
            Err(AppError::NotFound("quiz \"99\"".to_string()))
        );
    }

    #[test]
    fn submit_result_requires_known_quiz() {
        let catalog = FixtureCatalog::default();
        assert_eq!(catalog.submit_quiz_result(QuizId::new(1), 66.7), Ok(()));
        assert!(catalog.submit_quiz_result(QuizId::new(42), 10.0).is_err());
    }

    #[test]
    fn create_quiz_returns_next_summary_without_storing() {
        let catalog = FixtureCatalog::default();
        let summary = catalog.create_quiz(&complete_draft()).expect("create");

        assert_eq!(summary.id, QuizId::new(4));
        assert_eq!(summary.title, "Rust Basics");
        assert_eq!(summary.question_count, 1);
        assert_eq!(summary.time_limit_label, "10 minutes");
        assert_eq!(summary.difficulty, Difficulty::Hard);
        assert_eq!(catalog.list_quizzes().expect("list").len(), 3);
    }

    #[test]
    fn create_quiz_rejects_incomplete_draft() {
        let catalog = FixtureCatalog::default();
        assert!(matches!(
            catalog.create_quiz(&QuizDraft::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn catalog_handle_dispatches_to_inner() {
        let catalog = Catalog::default();
        assert_eq!(catalog.list_quizzes().expect("list").len(), 3);
    }
}
