//! Error types for concord.

use thiserror::Error;

/// Result type for concord operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for concord operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Run configuration problem (filenames file, path overrides).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Survey export could not be read or failed validation.
    #[error("Survey data error: {0}")]
    Survey(String),

    /// Prediction document could not be read or parsed.
    #[error("Prediction error: {0}")]
    Predictions(String),

    /// Chart template or chart artifact problem.
    #[error("Chart error: {0}")]
    Chart(String),

    /// Report rendering error.
    #[error("Report error: {0}")]
    Report(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a survey data error.
    pub fn survey(msg: impl Into<String>) -> Self {
        Error::Survey(msg.into())
    }

    /// Create a prediction error.
    pub fn predictions(msg: impl Into<String>) -> Self {
        Error::Predictions(msg.into())
    }

    /// Create a chart error.
    pub fn chart(msg: impl Into<String>) -> Self {
        Error::Chart(msg.into())
    }

    /// Create a report error.
    pub fn report(msg: impl Into<String>) -> Self {
        Error::Report(msg.into())
    }
}
