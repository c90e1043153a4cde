//! Quiz catalog and play types. Summaries are what the dashboard lists;
//! details carry the ordered questions and answer key used during play.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier, also the `:quizId` route segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(u32);

impl QuizId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parses a route segment. Anything that is not a plain positive integer
    /// cannot name a quiz, so it is reported as not found.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        match trimmed.parse::<u32>() {
            Ok(id) if id > 0 && !trimmed.starts_with('+') => Ok(Self(id)),
            _ => Err(AppError::NotFound(format!("quiz \"{trimmed}\""))),
        }
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Badge colors run green, yellow, red with increasing difficulty.
    pub const fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "px-2 py-1 rounded text-sm font-medium bg-green-100 text-green-800",
            Difficulty::Medium => "px-2 py-1 rounded text-sm font-medium bg-yellow-100 text-yellow-800",
            Difficulty::Hard => "px-2 py-1 rounded text-sm font-medium bg-red-100 text-red-800",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub question_count: usize,
    pub time_limit_label: String,
    pub difficulty: Difficulty,
    pub participant_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDetail {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub time_limit_minutes: u32,
    pub questions: Vec<Question>,
}

impl QuizDetail {
    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit_minutes.saturating_mul(60)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

/// Human label for a time limit, as shown on dashboard cards.
pub fn time_limit_label(minutes: u32) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

/// Option badge letter: 0 -> `A`, 1 -> `B`, ...
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_id_parses_positive_integers_only() {
        assert_eq!(QuizId::parse("3"), Ok(QuizId::new(3)));
        assert_eq!(QuizId::parse(" 12 "), Ok(QuizId::new(12)));
        assert!(matches!(QuizId::parse("0"), Err(AppError::NotFound(_))));
        assert!(matches!(QuizId::parse("-1"), Err(AppError::NotFound(_))));
        assert!(matches!(QuizId::parse("+1"), Err(AppError::NotFound(_))));
        assert!(matches!(QuizId::parse("abc"), Err(AppError::NotFound(_))));
        assert!(matches!(QuizId::parse(""), Err(AppError::NotFound(_))));
    }

    #[test]
    fn difficulty_orders_easy_to_hard() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn difficulty_badges_are_distinct() {
        let classes: Vec<_> = Difficulty::ALL.iter().map(|d| d.badge_class()).collect();
        assert!(classes[0].contains("green"));
        assert!(classes[1].contains("yellow"));
        assert!(classes[2].contains("red"));
    }

    #[test]
    fn difficulty_from_label_is_case_insensitive() {
        assert_eq!(Difficulty::from_label("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_label(" Easy "), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_label("extreme"), None);
    }

    #[test]
    fn time_limit_label_pluralizes() {
        assert_eq!(time_limit_label(1), "1 minute");
        assert_eq!(time_limit_label(15), "15 minutes");
    }

    #[test]
    fn option_letters_follow_alphabet() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(25), 'Z');
        assert_eq!(option_letter(26), '?');
    }

    #[test]
    fn summary_serializes_id_as_number() {
        let summary = QuizSummary {
            id: QuizId::new(7),
            title: "Rust".to_string(),
            description: "Ownership".to_string(),
            question_count: 4,
            time_limit_label: time_limit_label(5),
            difficulty: Difficulty::Hard,
            participant_count: 0,
        };

        let json = serde_json::to_value(&summary).expect("Failed to serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["difficulty"], "Hard");
    }
}
