//! Configuration and secrets loading.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::configuration::{AppConfig, Credentials};
use crate::domain::AppError;

/// Default location of the optional configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "tubemind.toml";
/// Default location of the secrets file.
pub const DEFAULT_SECRETS_PATH: &str = ".tubemind/secrets.toml";

/// Load the configuration file, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config_content(&content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(AppConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Resolve credentials from the secrets file and the process environment.
pub fn load_credentials(secrets_path: &Path) -> Result<Credentials, AppError> {
    let file_vars = read_secrets_file(secrets_path)?;
    Credentials::resolve(&file_vars, env_var_string)
}

/// Read top-level string entries from a secrets TOML file. A missing file yields no entries.
pub fn read_secrets_file(path: &Path) -> Result<HashMap<String, String>, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(err) => return Err(err.into()),
    };
    parse_secrets_content(&content)
}

/// Parse secrets content; non-string values are rejected so a typo cannot pass silently.
pub fn parse_secrets_content(content: &str) -> Result<HashMap<String, String>, AppError> {
    let table: toml::Table = toml::from_str(content)?;
    table
        .into_iter()
        .map(|(key, value)| match value {
            toml::Value::String(text) => Ok((key, text)),
            other => Err(AppError::config_error(format!(
                "Secret '{}' must be a string, found {}",
                key,
                other.type_str()
            ))),
        })
        .collect()
}

fn env_var_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
