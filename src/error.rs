use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Salary must be a number, got {0:?}")]
    InvalidSalary(String),

    #[error("No employee with id {0}")]
    EmployeeNotFound(i64),

    #[cfg(feature = "testing")]
    #[error("Scripted prompt has no answer for {0:?}")]
    ScriptExhausted(String),

    #[error("Answer {answer:?} is not a choice of {prompt:?}")]
    UnknownChoice { prompt: String, answer: String },
}

impl TrackerError {
    /// Errors that the menu cannot recover from by redisplaying itself.
    pub fn is_fatal(&self) -> bool {
        match self {
            TrackerError::PromptError(_)
            | TrackerError::Io(_)
            | TrackerError::UnknownChoice { .. } => true,
            #[cfg(feature = "testing")]
            TrackerError::ScriptExhausted(_) => true,
            _ => false,
        }
    }
}

impl From<figment::Error> for TrackerError {
    fn from(e: figment::Error) -> Self {
        TrackerError::Config(Box::new(e))
    }
}

