pub mod app_config;
pub mod credentials;
pub mod loader;

pub use app_config::{AppConfig, GeminiApiConfig, YouTubeApiConfig};
pub use credentials::{Credentials, GEMINI_API_KEY, YOUTUBE_API_KEY};
pub use loader::{
    DEFAULT_CONFIG_PATH, DEFAULT_SECRETS_PATH, load_config, load_credentials,
    parse_config_content,
};
