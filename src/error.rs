//! Error taxonomy
//!
//! Configuration and sequencing problems are errors. Gameplay no-ops
//! (collecting off a wedge space, collecting a wedge already held) are not.

use thiserror::Error;

/// Startup configuration is unusable; nothing has been built
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("No players given")]
    EmptyRoster,
    #[error("Malformed player '{token}': expected name{delimiter}color")]
    MalformedToken { token: String, delimiter: char },
    #[error("Player {index} has an empty name or color")]
    BlankField { index: usize },
    #[error("Expected 6 categories, got {0}")]
    CategoryCount(usize),
    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
    #[error("Unknown category scheme '{0}'")]
    UnknownScheme(String),
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An action arrived in a state that cannot accept it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidActionError {
    #[error("No turn in progress; advance the turn to begin {next}'s turn")]
    NotStarted { next: String },
}

/// Anything a session can fail with
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(started: bool) -> Result<(), GameError> {
        if !started {
            Err(InvalidActionError::NotStarted {
                next: "ALICE".to_string(),
            })?;
        }
        Ok(())
    }

    #[test]
    fn test_errors_convert_into_game_error() {
        let err = act(false).unwrap_err();
        assert!(matches!(err, GameError::InvalidAction(_)));
        assert_eq!(
            err.to_string(),
            "No turn in progress; advance the turn to begin ALICE's turn"
        );
        assert!(act(true).is_ok());

        let err = GameError::from(ConfigurationError::CategoryCount(5));
        assert!(matches!(err, GameError::Configuration(_)));
        assert_eq!(err.to_string(), "Expected 6 categories, got 5");
    }
}
