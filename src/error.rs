//! Error types for aidict.

use thiserror::Error;

/// Crate-wide error type.
///
/// Lookup failures (`UnsupportedLanguagePair`, `ApiCallFailed`,
/// `ApiResponseParseFailed`) are recoverable per request. `Config` and `Io`
/// are raised during startup and abort the process.
#[derive(Error, Debug)]
pub enum DictError {
    /// No prompt template exists for the requested `source-target` pair.
    #[error("unsupported language pair: {0}")]
    UnsupportedLanguagePair(String),

    /// Transport-level failure talking to the completion API.
    #[error("failed to call AI API: {0}")]
    ApiCallFailed(String),

    /// The completion API answered with something other than a chat
    /// completion envelope, or with no choices.
    #[error("failed to parse AI response: {body}")]
    ApiResponseParseFailed { body: String },

    /// Definition store failure.
    #[error("Cache store error: {0}")]
    Store(String),

    /// Configuration loading or validation failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The word exceeds the configured character limit.
    #[error("Input too long. Max {max} characters allowed.")]
    InputTooLong { max: usize },

    /// Missing or malformed request parameters.
    #[error("{0}")]
    InvalidRequest(String),

    /// HTML template loading or rendering failure.
    #[error("Render error: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DictError {
    /// Whether the error was caused by the caller's input rather than by the
    /// service or one of its upstreams.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLanguagePair(_) | Self::InputTooLong { .. } | Self::InvalidRequest(_)
        )
    }
}

impl From<sqlx::Error> for DictError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<tera::Error> for DictError {
    fn from(err: tera::Error) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DictError>;
