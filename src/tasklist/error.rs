use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    /// Malformed or out-of-range user input.
    #[error("{0}")]
    Validation(String),

    /// The first token of a line matched no command. Holds the trimmed line.
    #[error("unknown command: \"{0}\"")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TaskError {
    pub fn validation(message: impl Into<String>) -> Self {
        TaskError::Validation(message.into())
    }

    /// True for failures reading or writing the task file.
    pub fn is_persistence(&self) -> bool {
        matches!(self, TaskError::Io(_) | TaskError::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
