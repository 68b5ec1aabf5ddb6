use std::path::PathBuf;

/// Reasons a move or cell access is rejected. None of them mutate the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} out of range, columns must be between 0 and {}", .width - 1)]
    OutOfRange { column: usize, width: usize },

    #[error("cell ({row}, {column}) is outside the board")]
    CellOutOfRange { row: usize, column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell ({row}, {column}) is already occupied")]
    CellOccupied { row: usize, column: usize },

    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur when creating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}, both must be > 0")]
    InvalidDimensions { width: usize, height: usize },

    #[error("board dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfRange { column: 9, width: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 out of range, columns must be between 0 and 6"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions { width: 0, height: 6 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x6, both must be > 0"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be > 0"
        );
    }
}
