//! Error types for the logging subsystem

/// Errors that can occur while setting up logging
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoggingError {
    /// A global subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),
}
