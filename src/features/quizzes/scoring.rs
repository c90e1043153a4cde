//! Score and display math for a quiz attempt.

use crate::features::quizzes::types::Question;
use std::collections::BTreeMap;

/// Recorded answers, keyed by question index.
pub type Answers = BTreeMap<usize, usize>;

/// Number of questions whose recorded option matches the answer key.
/// Unanswered questions and answers for unknown indices never count.
pub fn correct_count(questions: &[Question], answers: &Answers) -> usize {
    answers
        .iter()
        .filter(|(question_index, option_index)| {
            questions
                .get(**question_index)
                .is_some_and(|question| question.correct_option_index == **option_index)
        })
        .count()
}

/// Percentage of correct answers in `[0, 100]`. An empty quiz scores 0.
pub fn percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let correct = correct.min(total);
    correct as f64 / total as f64 * 100.0
}

pub fn score_percent(questions: &[Question], answers: &Answers) -> f64 {
    percent(correct_count(questions, answers), questions.len())
}

/// Rounds half up for display: 66.67 -> 67, 12.5 -> 13.
pub fn display_percent(score: f64) -> u32 {
    if score.is_nan() || score <= 0.0 {
        return 0;
    }
    (score.min(100.0) + 0.5).floor() as u32
}

/// `M:SS` with unpadded minutes.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Width of the progress bar in percent for a 0-based position.
pub fn progress_percent(current_index: usize, total: usize) -> f64 {
    percent(current_index.saturating_add(1), total)
}
