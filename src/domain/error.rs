use std::io;

use thiserror::Error;

/// Library-wide error type for tubemind operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A required API credential was not provided.
    #[error("Missing credential '{0}'. Set it in the environment or the secrets file.")]
    MissingCredential(String),

    /// Caller supplied an argument the pipeline cannot accept.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// YouTube Data API request failed.
    #[error("YouTube API error{}: {message}", format_status(.status))]
    YouTubeApi { message: String, status: Option<u16> },

    /// Gemini API request failed.
    #[error("Gemini API error{}: {message}", format_status(.status))]
    GeminiApi { message: String, status: Option<u16> },

    /// Upstream returned a payload missing data the pipeline needs.
    #[error("Malformed {what}: {details}")]
    MalformedResponse { what: String, details: String },

    /// Prompt template rendering failed.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(String),
}

fn format_status(status: &Option<u16>) -> String {
    status.map(|code| format!(" (status {code})")).unwrap_or_default()
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn malformed(what: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::MalformedResponse { what: what.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidInput(_)
            | AppError::PromptRender(_) => io::ErrorKind::InvalidInput,
            AppError::MissingCredential(_) => io::ErrorKind::NotFound,
            AppError::MalformedResponse { .. } => io::ErrorKind::InvalidData,
            AppError::YouTubeApi { .. } | AppError::GeminiApi { .. } => io::ErrorKind::Other,
        }
    }
}
