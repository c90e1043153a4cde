use std::fmt;

/// Recoverable failures surfaced to the user through an `Alert`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// The requested quiz (or route target) does not exist.
    NotFound(String),
    /// A form or request failed local validation.
    Validation(String),
    /// The catalog or session collaborator could not provide data.
    LoadFailure(String),
    /// A configuration value could not be used.
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(message) => write!(formatter, "Not found: {message}"),
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::LoadFailure(message) => write!(formatter, "Unable to load: {message}"),
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
