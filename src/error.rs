use std::result;

use thiserror::Error as ThisError;
use serenity::prelude::SerenityError;

use crate::commands::event::models::Role;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Clone, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    // The variable is not set or holds only whitespace.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

#[derive(Debug, Clone, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("{0}")]
    SerenityError(String),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("❌ **Error:** Missing parameters. Correct format: `!new_event DD-MM-YYYY HH:MM \"Event name\"`")]
    MissingParameters,
    #[error("❌ **Invalid date.** Use the `DD-MM-YYYY` format (e.g. `21-03-2025`)")]
    InvalidDate,
    #[error("❌ **Invalid time.** Use the 24h `HH:MM` format (e.g. `13:45`)")]
    InvalidTime,
    #[error("❌ **Empty name.** Use quotes if necessary (e.g. `\"My event\"`)")]
    EmptyName,
    #[error("❌ **The event must be in the future.** Check the date and time.")]
    PastDateTime,
    #[error("`{0}` is not one of the role reactions.")]
    InvalidRole(String),
    #[error("You have already reacted as {0}! You can only pick one role. 🚫")]
    AlreadyRegistered(Role),
}

impl From<SerenityError> for Error {
    fn from(err: SerenityError) -> Error {
        let description = err.to_string();
        Error::SerenityError(description)
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::event::models::Role;
    use crate::error::Error;

    #[test]
    fn test_validation_messages_carry_error_marker() {
        let errors = vec![
            Error::MissingParameters,
            Error::InvalidDate,
            Error::InvalidTime,
            Error::EmptyName,
            Error::PastDateTime,
        ];

        for error in errors {
            assert_eq!(error.to_string().starts_with("❌"), true);
        }
    }

    #[test]
    fn test_already_registered_mentions_role() {
        let error = Error::AlreadyRegistered(Role::Healer);

        assert_eq!(error.to_string().contains("Healer"), true);
    }
}
