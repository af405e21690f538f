use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - API base URL is present and has an http(s) scheme
/// - Request timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api.base_url cannot be empty".to_string(),
        ));
    }

    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "api.base_url must start with http:// or https://, got '{}'",
            config.api.base_url
        )));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "api.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
