//! API credentials read from the secrets file and the environment.

use std::collections::HashMap;
use std::fmt;

use crate::domain::AppError;

pub const YOUTUBE_API_KEY: &str = "YOUTUBE_API_KEY";
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// The two opaque keys the pipeline needs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub youtube_api_key: String,
    pub gemini_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("youtube_api_key", &"[REDACTED]")
            .field("gemini_api_key", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Resolve both keys. Environment wins over the secrets file; blank values are missing.
    pub fn resolve(
        file_vars: &HashMap<String, String>,
        env_lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let lookup = |key: &str| -> Result<String, AppError> {
            env_lookup(key)
                .or_else(|| file_vars.get(key).cloned())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::MissingCredential(key.to_string()))
        };

        Ok(Self {
            youtube_api_key: lookup(YOUTUBE_API_KEY)?,
            gemini_api_key: lookup(GEMINI_API_KEY)?,
        })
    }
}
