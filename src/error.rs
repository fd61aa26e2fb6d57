use thiserror::Error;

/// Problems with the schedule input, reported before the scheduler runs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Number of players must be a number between {min} and {max}, got '{value}'")]
    InvalidRosterSize { value: String, min: usize, max: usize },

    #[error("Expected {expected} player names, got {found}")]
    PlayerCountMismatch { expected: usize, found: usize },

    #[error("Player {position} has no name")]
    EmptyPlayerName { position: usize },

    #[error("Player name '{0}' is used more than once")]
    DuplicatePlayer(String),

    #[error("At least one reservation date is required")]
    NoSlots,

    #[error("Invalid date '{0}': use month/day/hour or month/day/hour/player")]
    InvalidSlotSyntax(String),

    #[error("Reserved player '{player}' in '{token}' is not in the player list")]
    UnknownReservedPlayer { player: String, token: String },

    #[error("Group size must be a number between 1 and {max}, got '{value}'")]
    InvalidGroupSize { value: String, max: usize },
}

/// Failures while saving or loading inputs and results
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        let err = InputError::UnknownReservedPlayer {
            player: "Zed".to_string(),
            token: "8/12/4/Zed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Reserved player 'Zed' in '8/12/4/Zed' is not in the player list"
        );

        let err = InputError::InvalidGroupSize { value: "0".to_string(), max: 4 };
        assert_eq!(err.to_string(), "Group size must be a number between 1 and 4, got '0'");
    }

    #[test]
    fn test_store_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().starts_with("File error"));
    }
}
