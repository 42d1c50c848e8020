use crate::domain::model::{Coordinate, Facing};
use std::path::PathBuf;
use thiserror::Error;

/// Malformed command text. Recoverable: the loop logs it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("PLACE requires parameters: PLACE <x>,<y>,<FACING>")]
    MissingPlaceParameters,

    #[error("PLACE requires exactly 3 parameters (x,y,facing), found {found}")]
    PlaceArity { found: usize },

    #[error("invalid coordinates in PLACE command: '{x}','{y}'")]
    InvalidCoordinates { x: String, y: String },

    #[error("invalid direction: {0}. Must be NORTH, EAST, SOUTH, or WEST")]
    InvalidDirection(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// A well-formed command that cannot be applied to the current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("robot has not been placed yet")]
    NotPlaced,

    #[error("cannot PLACE robot at {position}: position out of bounds (board is {width}x{height})")]
    PlacementOutOfBounds {
        position: Coordinate,
        width: i32,
        height: i32,
    },

    #[error("cannot move to {position}: position out of bounds")]
    MoveOutOfBounds { position: Coordinate },

    #[error("cannot move {facing} from {position}: coordinate overflow")]
    CoordinateOverflow { position: Coordinate, facing: Facing },
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot open or read file: {}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Parse,
    Validation,
}

impl SimError {
    pub fn config(message: impl Into<String>) -> Self {
        SimError::Config {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SimError::Config { .. } | SimError::InvalidConfigValue { .. } | SimError::TomlParse(_) => {
                ErrorCategory::Configuration
            }
            SimError::FileUnreadable { .. } | SimError::Io(_) => ErrorCategory::Io,
            SimError::Parse(_) => ErrorCategory::Parse,
            SimError::Execution(_) => ErrorCategory::Validation,
        }
    }

    /// Fatal errors abort the run; the others are counted per input line.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Configuration | ErrorCategory::Io
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Io => 1,
            ErrorCategory::Parse | ErrorCategory::Validation => 0,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
