use crate::lookup_config::{
    LookupConfig, DEFAULT_LOG_LEVEL, DEFAULT_OFF_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use crate::ConfigError;

/// Load lookup configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_lookup_config() -> Result<LookupConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_lookup_config_from_env()
}

/// Load lookup configuration from environment variables already in the process.
///
/// Unlike [`load_lookup_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_lookup_config_from_env() -> Result<LookupConfig, ConfigError> {
    build_lookup_config(|key| std::env::var(key))
}

/// Build lookup configuration using the provided env-var lookup function.
///
/// Every variable is optional; an empty environment yields
/// [`LookupConfig::default`].
fn build_lookup_config<F>(lookup: F) -> Result<LookupConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let off_base_url = or_default("FOODSCAN_OFF_BASE_URL", DEFAULT_OFF_BASE_URL);
    if !(off_base_url.starts_with("http://") || off_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "FOODSCAN_OFF_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{off_base_url}'"),
        });
    }

    let request_timeout_secs =
        parse_u64("FOODSCAN_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FOODSCAN_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least one second".to_string(),
        });
    }

    let user_agent = or_default("FOODSCAN_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("FOODSCAN_LOG_LEVEL", DEFAULT_LOG_LEVEL);

    Ok(LookupConfig {
        off_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
