use crate::config::types::{ClientConfig, Config, LeagueConfig, RemoteConfig, SessionConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_league_config(&config.league)?;
    validate_remote_config(&config.remote)?;
    validate_client_config(&config.client)?;
    validate_session_config(&config.session)?;
    Ok(())
}

/// Validates the league identifier
fn validate_league_config(config: &LeagueConfig) -> Result<(), ConfigError> {
    if config.league_id.is_empty() {
        return Err(ConfigError::Validation(
            "league_id cannot be empty".to_string(),
        ));
    }

    if !config.league_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::Validation(format!(
            "league_id must be alphanumeric, got '{}'",
            config.league_id
        )));
    }

    Ok(())
}

/// Validates the remote base URL
fn validate_remote_config(config: &RemoteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' has no host",
            config.base_url
        )));
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_client_config(config: &ClientConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be between 1 and timeout_secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates the session cookie source
fn validate_session_config(config: &SessionConfig) -> Result<(), ConfigError> {
    if config.cookie_env.is_empty() {
        return Err(ConfigError::Validation(
            "cookie_env cannot be empty".to_string(),
        ));
    }

    if config.cookie_env.contains(['=', '\0']) {
        return Err(ConfigError::Validation(format!(
            "cookie_env '{}' is not a valid environment variable name",
            config.cookie_env
        )));
    }

    Ok(())
}
