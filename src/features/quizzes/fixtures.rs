//! Built-in quizzes served by [`FixtureCatalog`](super::catalog::FixtureCatalog).

use crate::features::quizzes::types::{
    Difficulty, Question, QuizDetail, QuizId, QuizSummary, time_limit_label,
};

struct Fixture {
    id: u32,
    title: &'static str,
    description: &'static str,
    time_limit_minutes: u32,
    difficulty: Difficulty,
    participants: u32,
    questions: &'static [(&'static str, [&'static str; 4], usize)],
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        id: 1,
        title: "General Knowledge",
        description: "Test your knowledge across various topics",
        time_limit_minutes: 10,
        difficulty: Difficulty::Medium,
        participants: 1234,
        questions: &[
            (
                "What is the capital of France?",
                ["London", "Berlin", "Paris", "Madrid"],
                2,
            ),
            (
                "Which planet is known as the Red Planet?",
                ["Venus", "Mars", "Jupiter", "Saturn"],
                1,
            ),
            (
                "Who painted the Mona Lisa?",
                ["Vincent van Gogh", "Pablo Picasso", "Leonardo da Vinci", "Michelangelo"],
                2,
            ),
        ],
    },
    Fixture {
        id: 2,
        title: "Science Quiz",
        description: "Explore the wonders of science",
        time_limit_minutes: 15,
        difficulty: Difficulty::Hard,
        participants: 856,
        questions: &[
            (
                "What is the chemical symbol for gold?",
                ["Ag", "Au", "Gd", "Go"],
                1,
            ),
            (
                "Which particle carries a negative charge?",
                ["Proton", "Neutron", "Electron", "Photon"],
                2,
            ),
            (
                "What is the approximate speed of light in vacuum?",
                ["300,000 km/s", "150,000 km/s", "30,000 km/s", "3,000,000 km/s"],
                0,
            ),
            (
                "Which gas makes up most of Earth's atmosphere?",
                ["Oxygen", "Carbon dioxide", "Argon", "Nitrogen"],
                3,
            ),
        ],
    },
    Fixture {
        id: 3,
        title: "History Challenge",
        description: "Journey through historical events",
        time_limit_minutes: 12,
        difficulty: Difficulty::Easy,
        participants: 2341,
        questions: &[
            (
                "In which year did World War II end?",
                ["1918", "1939", "1945", "1961"],
                2,
            ),
            (
                "Who was the first President of the United States?",
                ["Thomas Jefferson", "George Washington", "Abraham Lincoln", "John Adams"],
                1,
            ),
            (
                "Which ancient wonder stood in Alexandria?",
                ["The Colossus", "The Hanging Gardens", "The Lighthouse", "The Mausoleum"],
                2,
            ),
        ],
    },
];

impl Fixture {
    fn detail(&self) -> QuizDetail {
        QuizDetail {
            id: QuizId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            time_limit_minutes: self.time_limit_minutes,
            questions: self
                .questions
                .iter()
                .zip(1..)
                .map(|((text, options, correct), id)| Question {
                    id,
                    text: (*text).to_string(),
                    options: options.iter().map(|option| (*option).to_string()).collect(),
                    correct_option_index: *correct,
                })
                .collect(),
        }
    }

    fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: QuizId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            question_count: self.questions.len(),
            time_limit_label: time_limit_label(self.time_limit_minutes),
            difficulty: self.difficulty,
            participant_count: self.participants,
        }
    }
}

pub fn summaries() -> Vec<QuizSummary> {
    FIXTURES.iter().map(Fixture::summary).collect()
}

pub fn details() -> Vec<QuizDetail> {
    FIXTURES.iter().map(Fixture::detail).collect()
}
