use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Invalid input: possession has {possession} frames, assignment has {assignment}")]
    InvalidInput { possession: usize, assignment: usize },

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Invalid team code {code} at frame {frame} (expected 1 or 2)")]
    InvalidTeamCode { frame: usize, code: i64 },

    #[error("Invalid track id '{value}' at frame {frame}")]
    InvalidTrackId { frame: usize, value: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl EventError {
    /// Whether the error comes from malformed caller input rather than the engine.
    pub fn is_input_error(&self) -> bool {
        match self {
            EventError::InvalidInput { .. } => true,
            EventError::UnsupportedSchema { .. } => true,
            EventError::InvalidTeamCode { .. } => true,
            EventError::InvalidTrackId { .. } => true,
            EventError::Deserialization(_) => true,
            EventError::Serialization(_) => false,
            EventError::Config(_) => false,
        }
    }
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            EventError::Deserialization(err.to_string())
        } else {
            EventError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, EventError>;
