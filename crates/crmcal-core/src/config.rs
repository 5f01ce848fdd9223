use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, SplitBounds};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("CRMCAL_ENV", "development"))?;

    let bind_addr: SocketAddr =
        parse_as("CRMCAL_BIND_ADDR", &or_default("CRMCAL_BIND_ADDR", "0.0.0.0:3000"))?;
    let log_level = or_default("CRMCAL_LOG_LEVEL", "info");
    let events_path = PathBuf::from(or_default("CRMCAL_EVENTS_PATH", "./config/events.yaml"));
    let preferences_path = PathBuf::from(or_default(
        "CRMCAL_PREFERENCES_PATH",
        "./.crmcal/preferences.json",
    ));

    let split_min: f64 = parse_as("CRMCAL_SPLIT_MIN", &or_default("CRMCAL_SPLIT_MIN", "40"))?;
    let split_max: f64 = parse_as("CRMCAL_SPLIT_MAX", &or_default("CRMCAL_SPLIT_MAX", "80"))?;
    let split_bounds =
        SplitBounds::new(split_min, split_max).map_err(|e| ConfigError::InvalidEnvVar {
            var: "CRMCAL_SPLIT_MIN/CRMCAL_SPLIT_MAX".to_string(),
            reason: e.to_string(),
        })?;

    let rate_limit_max_requests: usize = parse_as(
        "CRMCAL_RATE_LIMIT_MAX_REQUESTS",
        &or_default("CRMCAL_RATE_LIMIT_MAX_REQUESTS", "120"),
    )?;
    let rate_limit_window_secs: u64 = parse_as(
        "CRMCAL_RATE_LIMIT_WINDOW_SECS",
        &or_default("CRMCAL_RATE_LIMIT_WINDOW_SECS", "60"),
    )?;

    let api_url = or_default("CRMCAL_API_URL", "http://127.0.0.1:3000");
    let api_token = lookup("CRMCAL_API_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty());
    let client_timeout_secs: u64 = parse_as(
        "CRMCAL_CLIENT_TIMEOUT_SECS",
        &or_default("CRMCAL_CLIENT_TIMEOUT_SECS", "30"),
    )?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        events_path,
        preferences_path,
        split_bounds,
        rate_limit_max_requests,
        rate_limit_window_secs,
        api_url,
        api_token,
        client_timeout_secs,
    })
}

fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CRMCAL_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
