use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobboardError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] crate::db::DatabaseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl JobboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        JobboardError::Validation(message.into())
    }

    /// Storage-class failures: the store could not be reached or queried,
    /// including a missing database configuration.
    pub fn is_storage(&self) -> bool {
        matches!(self, JobboardError::Database(_))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

pub type Result<T> = std::result::Result<T, JobboardError>;
