use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    // Double underscore separates the section from the key, so
    // multi-word keys stay addressable: CINEMAGUIDE_API__BASE_URL,
    // CINEMAGUIDE_SEARCH__DEBOUNCE_MS.
    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("CINEMAGUIDE_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
