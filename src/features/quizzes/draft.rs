//! In-progress quiz definition edited by the authoring form. The draft always
//! holds at least one question and every question exactly four options.

use crate::app_lib::AppError;
use crate::features::quizzes::types::Difficulty;
use serde::Serialize;

pub const OPTIONS_PER_QUESTION: usize = 4;
pub const DEFAULT_TIME_LIMIT_MINUTES: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    pub time_limit_minutes: u32,
    pub difficulty: Difficulty,
    questions: Vec<QuestionDraft>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuestionDraft {
    pub text: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_option_index: usize,
}

/// Scalar draft fields the form can replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Description(String),
    TimeLimitMinutes(u32),
    Difficulty(Difficulty),
}

impl Default for QuizDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            time_limit_minutes: DEFAULT_TIME_LIMIT_MINUTES,
            difficulty: Difficulty::default(),
            questions: vec![QuestionDraft::default()],
        }
    }
}

impl QuizDraft {
    pub fn questions(&self) -> &[QuestionDraft] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Replaces a scalar field. A zero time limit is rejected and the
    /// previous value kept.
    pub fn update_field(&mut self, field: DraftField) -> Result<(), AppError> {
        match field {
            DraftField::Title(title) => self.title = title,
            DraftField::Description(description) => self.description = description,
            DraftField::TimeLimitMinutes(0) => {
                return Err(AppError::Validation(
                    "Time limit must be at least 1 minute.".to_string(),
                ));
            }
            DraftField::TimeLimitMinutes(minutes) => self.time_limit_minutes = minutes,
            DraftField::Difficulty(difficulty) => self.difficulty = difficulty,
        }
        Ok(())
    }

    pub fn update_question_text(&mut self, question_index: usize, text: String) -> Result<(), AppError> {
        self.question_mut(question_index)?.text = text;
        Ok(())
    }

    pub fn update_option(
        &mut self,
        question_index: usize,
        option_index: usize,
        value: String,
    ) -> Result<(), AppError> {
        let question = self.question_mut(question_index)?;
        let option = question
            .options
            .get_mut(option_index)
            .ok_or_else(|| option_out_of_range(option_index))?;
        *option = value;
        Ok(())
    }

    pub fn set_correct_answer(&mut self, question_index: usize, option_index: usize) -> Result<(), AppError> {
        if option_index >= OPTIONS_PER_QUESTION {
            return Err(option_out_of_range(option_index));
        }
        self.question_mut(question_index)?.correct_option_index = option_index;
        Ok(())
    }

    /// Appends a blank question and returns its index.
    pub fn add_question(&mut self) -> usize {
        self.questions.push(QuestionDraft::default());
        self.questions.len() - 1
    }

    pub fn can_remove_question(&self) -> bool {
        self.questions.len() > 1
    }

    pub fn remove_question(&mut self, index: usize) -> Result<QuestionDraft, AppError> {
        if !self.can_remove_question() {
            return Err(AppError::Validation(
                "A quiz needs at least one question.".to_string(),
            ));
        }
        if index >= self.questions.len() {
            return Err(question_out_of_range(index));
        }
        Ok(self.questions.remove(index))
    }

    /// Checks every required field, reporting the first gap in form order.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Quiz title is required.".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation("Description is required.".to_string()));
        }
        if self.time_limit_minutes == 0 {
            return Err(AppError::Validation(
                "Time limit must be at least 1 minute.".to_string(),
            ));
        }
        if self.questions.is_empty() {
            return Err(AppError::Validation(
                "A quiz needs at least one question.".to_string(),
            ));
        }
        for (index, question) in self.questions.iter().enumerate() {
            let number = index + 1;
            if question.text.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Question {number} needs a prompt."
                )));
            }
            if let Some(blank) = question
                .options
                .iter()
                .position(|option| option.trim().is_empty())
            {
                return Err(AppError::Validation(format!(
                    "Question {number}, option {} is empty.",
                    blank + 1
                )));
            }
        }
        Ok(())
    }

    fn question_mut(&mut self, index: usize) -> Result<&mut QuestionDraft, AppError> {
        self.questions
            .get_mut(index)
            .ok_or_else(|| question_out_of_range(index))
    }
}

fn question_out_of_range(index: usize) -> AppError {
    AppError::Validation(format!("Question {} does not exist.", index + 1))
}

fn option_out_of_range(index: usize) -> AppError {
    AppError::Validation(format!(
        "Option {} is out of range; questions have {OPTIONS_PER_QUESTION} options.",
        index + 1
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> QuizDraft {
        let mut draft = QuizDraft::default();
        draft
            .update_field(DraftField::Title("Capitals".to_string()))
            .expect("title");
        draft
            .update_field(DraftField::Description("European capitals".to_string()))
            .expect("description");
        draft
            .update_question_text(0, "Capital of France?".to_string())
            .expect("text");
        for (index, city) in ["London", "Berlin", "Paris", "Madrid"].into_iter().enumerate() {
            draft.update_option(0, index, city.to_string()).expect("option");
        }
        draft.set_correct_answer(0, 2).expect("answer");
        draft
    }

    #[test]
    fn default_draft_has_one_blank_question() {
        let draft = QuizDraft::default();
        assert_eq!(draft.question_count(), 1);
        assert_eq!(draft.time_limit_minutes, DEFAULT_TIME_LIMIT_MINUTES);
        assert_eq!(draft.difficulty, Difficulty::Medium);
        let question = &draft.questions()[0];
        assert!(question.text.is_empty());
        assert!(question.options.iter().all(String::is_empty));
        assert_eq!(question.correct_option_index, 0);
    }

    #[test]
    fn removing_the_only_question_is_rejected() {
        let mut draft = QuizDraft::default();
        assert!(!draft.can_remove_question());
        assert!(matches!(draft.remove_question(0), Err(AppError::Validation(_))));
        assert_eq!(draft.question_count(), 1);
    }

    #[test]
    fn add_then_remove_question_keeps_order() {
        let mut draft = filled_draft();
        let second = draft.add_question();
        draft
            .update_question_text(second, "Capital of Spain?".to_string())
            .expect("text");
        let third = draft.add_question();
        assert_eq!(third, 2);

        let removed = draft.remove_question(0).expect("remove");
        assert_eq!(removed.text, "Capital of France?");
        assert_eq!(draft.question_count(), 2);
        assert_eq!(draft.questions()[0].text, "Capital of Spain?");
    }

    #[test]
    fn remove_question_out_of_range_is_rejected() {
        let mut draft = QuizDraft::default();
        draft.add_question();
        assert!(draft.remove_question(5).is_err());
        assert_eq!(draft.question_count(), 2);
    }

    #[test]
    fn update_option_checks_bounds() {
        let mut draft = QuizDraft::default();
        assert!(draft.update_option(0, 4, "E".to_string()).is_err());
        assert!(draft.update_option(1, 0, "A".to_string()).is_err());
        draft.update_option(0, 3, "D".to_string()).expect("option");
        assert_eq!(draft.questions()[0].options[3], "D");
    }

    #[test]
    fn set_correct_answer_checks_bounds() {
        let mut draft = QuizDraft::default();
        assert!(draft.set_correct_answer(0, 4).is_err());
        assert_eq!(draft.questions()[0].correct_option_index, 0);
        draft.set_correct_answer(0, 3).expect("answer");
        assert_eq!(draft.questions()[0].correct_option_index, 3);
    }

    #[test]
    fn zero_time_limit_is_rejected() {
        let mut draft = QuizDraft::default();
        assert!(draft.update_field(DraftField::TimeLimitMinutes(0)).is_err());
        assert_eq!(draft.time_limit_minutes, DEFAULT_TIME_LIMIT_MINUTES);
        draft
            .update_field(DraftField::TimeLimitMinutes(25))
            .expect("time limit");
        assert_eq!(draft.time_limit_minutes, 25);
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert_eq!(filled_draft().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut draft = filled_draft();
        draft.update_field(DraftField::Title("  ".to_string())).expect("title");
        assert_eq!(
            draft.validate(),
            Err(AppError::Validation("Quiz title is required.".to_string()))
        );

        let mut draft = filled_draft();
        draft.update_option(0, 1, String::new()).expect("option");
        assert_eq!(
            draft.validate(),
            Err(AppError::Validation("Question 1, option 2 is empty.".to_string()))
        );

        let mut draft = filled_draft();
        draft.add_question();
        assert_eq!(
            draft.validate(),
            Err(AppError::Validation("Question 2 needs a prompt.".to_string()))
        );
    }

    #[test]
    fn validate_rejects_draft_without_questions() {
        let draft = QuizDraft {
            questions: Vec::new(),
            ..filled_draft()
        };
        assert_eq!(draft.question_count(), 0);
        assert_eq!(
            draft.validate(),
            Err(AppError::Validation("A quiz needs at least one question.".to_string()))
        );
    }

    #[test]
    fn draft_serializes_for_logging() {
        let json = serde_json::to_string(&filled_draft()).expect("Failed to serialize");
        assert!(json.contains("Capitals"));
        assert!(json.contains("\"correct_option_index\":2"));
    }
}
