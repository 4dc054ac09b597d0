//! Application configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `tubemind.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// YouTube Data API configuration.
    #[serde(default)]
    pub youtube: YouTubeApiConfig,
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.youtube.validate()?;
        self.gemini.validate()?;
        Ok(())
    }
}

/// YouTube Data API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YouTubeApiConfig {
    /// Base URL of the Data API (resources are appended as path segments).
    #[serde(default = "default_youtube_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for YouTubeApiConfig {
    fn default() -> Self {
        Self { api_url: default_youtube_api_url(), timeout_secs: default_timeout() }
    }
}

impl YouTubeApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "youtube.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL of the Generative Language API.
    #[serde(default = "default_gemini_api_url")]
    pub api_url: Url,
    /// Model used for the narrative summary.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_gemini_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "gemini.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("gemini.model must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_youtube_api_url() -> Url {
    Url::parse("https://www.googleapis.com/youtube/v3").expect("Default API URL must be valid")
}

fn default_gemini_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}
