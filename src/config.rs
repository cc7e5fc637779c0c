// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5555";
const DEFAULT_STORAGE_PATH: &str = ".sweat-junkies/storage.json";
pub(crate) const DEFAULT_ERROR_LOG_CAPACITY: usize = 16;

/// How the session store runs its initial bulk fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// Profile, then activities, then races; the first failure aborts the rest.
    #[default]
    Sequential,
    /// All three at once; every failure is reported.
    Parallel,
}

impl FromStr for FetchStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(FetchStrategy::Sequential),
            "parallel" => Ok(FetchStrategy::Parallel),
            _ => Err(ConfigError::Invalid("SWEAT_JUNKIES_FETCH_STRATEGY", s.to_string())),
        }
    }
}

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// JSON file backing the client-side credential storage
    pub storage_path: PathBuf,
    /// Bulk fetch strategy
    pub fetch_strategy: FetchStrategy,
    /// Number of recent errors kept in the store's error log
    pub error_log_capacity: usize,
    /// Per-request timeout; `None` waits forever
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    /// Default config, also used by tests.
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            fetch_strategy: FetchStrategy::Sequential,
            error_log_capacity: DEFAULT_ERROR_LOG_CAPACITY,
            request_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url = env::var("SWEAT_JUNKIES_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if api_url.is_empty() {
            return Err(ConfigError::Invalid(
                "SWEAT_JUNKIES_API_URL",
                String::new(),
            ));
        }

        let fetch_strategy = match env::var("SWEAT_JUNKIES_FETCH_STRATEGY") {
            Ok(v) => v.parse()?,
            Err(_) => FetchStrategy::default(),
        };

        Ok(Self {
            api_url,
            storage_path: env::var("SWEAT_JUNKIES_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH)),
            fetch_strategy,
            error_log_capacity: parse_var(
                "SWEAT_JUNKIES_ERROR_LOG_CAPACITY",
                DEFAULT_ERROR_LOG_CAPACITY,
            )?,
            request_timeout: match env::var("SWEAT_JUNKIES_REQUEST_TIMEOUT_SECS") {
                Ok(v) => Some(Duration::from_secs(v.trim().parse().map_err(|_| {
                    ConfigError::Invalid("SWEAT_JUNKIES_REQUEST_TIMEOUT_SECS", v.clone())
                })?)),
                Err(_) => None,
            },
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, v.clone())),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
