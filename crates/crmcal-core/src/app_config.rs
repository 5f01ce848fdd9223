use std::net::SocketAddr;
use std::path::PathBuf;

use crate::SplitBounds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub events_path: PathBuf,
    pub preferences_path: PathBuf,
    pub split_bounds: SplitBounds,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
    pub api_url: String,
    pub api_token: Option<String>,
    pub client_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("events_path", &self.events_path)
            .field("preferences_path", &self.preferences_path)
            .field("split_bounds", &self.split_bounds)
            .field("rate_limit_max_requests", &self.rate_limit_max_requests)
            .field("rate_limit_window_secs", &self.rate_limit_window_secs)
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[redacted]"))
            .field("client_timeout_secs", &self.client_timeout_secs)
            .finish()
    }
}
