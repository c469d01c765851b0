use thiserror::Error;

/// Common error types for the agenda system
#[derive(Error, Debug, Clone)]
pub enum AgendaError {
    /// Event construction or reconstruction rejected
    #[error("{0}")]
    Validation(String),

    /// An event was compared against itself
    #[error("{0}")]
    InvalidComparison(String),

    /// File system related errors
    #[error("{0}")]
    FileSystem(String),

    /// Serialization/deserialization errors
    #[error("{0}")]
    Serialization(String),

    /// Configuration related errors
    #[error("{0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String)
}

/// Convert from anyhow::Error
impl From<anyhow::Error> for AgendaError {
    fn from(err: anyhow::Error) -> Self {
        AgendaError::Generic(err.to_string())
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for AgendaError {
    fn from(err: std::io::Error) -> Self {
        AgendaError::FileSystem(err.to_string())
    }
}

/// Convert from serde_json::Error
impl From<serde_json::Error> for AgendaError {
    fn from(err: serde_json::Error) -> Self {
        AgendaError::Serialization(err.to_string())
    }
}

/// Convert from serde_yaml::Error
impl From<serde_yaml::Error> for AgendaError {
    fn from(err: serde_yaml::Error) -> Self {
        AgendaError::Serialization(err.to_string())
    }
}
