//! Route paths shared by guards, links and redirects.

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const CREATE_QUIZ: &str = "/create-quiz";

/// Path of the quiz-taking page for `id`.
pub fn quiz(id: impl std::fmt::Display) -> String {
    format!("/quiz/{id}")
}
