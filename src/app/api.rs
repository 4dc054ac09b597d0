//! API Facade for the application.
//!
//! Glues configuration loading, adapter construction and command execution.

use std::path::Path;

use crate::adapters::{HttpGeminiClient, HttpYouTubeClient};
use crate::app::AppContext;
use crate::app::commands::analyze;
use crate::domain::configuration::{load_config, load_credentials};
use crate::domain::{AnalysisOutcome, AppError};

pub use crate::app::commands::analyze::{AnalyzeOptions, DEFAULT_CHANNEL_ID};

/// Context wired to the live YouTube and Gemini APIs.
pub type HttpAppContext = AppContext<HttpYouTubeClient, HttpGeminiClient>;

/// Build the live context. Fails before any request when a credential is missing.
pub fn create_context(
    config_path: &Path,
    secrets_path: &Path,
) -> Result<HttpAppContext, AppError> {
    let credentials = load_credentials(secrets_path)?;
    let config = load_config(config_path)?;
    tracing::debug!(
        youtube = %config.youtube.api_url,
        gemini = %config.gemini.api_url,
        model = %config.gemini.model,
        "configuration loaded"
    );

    let platform = HttpYouTubeClient::new(credentials.youtube_api_key, &config.youtube)?;
    let generator = HttpGeminiClient::new(credentials.gemini_api_key, &config.gemini)?;
    Ok(AppContext::new(platform, generator))
}

/// Run one analysis against the live APIs.
pub fn analyze(
    config_path: &Path,
    secrets_path: &Path,
    options: &AnalyzeOptions,
) -> Result<AnalysisOutcome, AppError> {
    let ctx = create_context(config_path, secrets_path)?;
    analyze::execute(&ctx, options)
}
