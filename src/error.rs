// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.
//!
//! Every variant collapses to a single human-readable message; the session
//! store records the `Display` text and nothing else.

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("User is not authenticated")]
    NotAuthenticated,

    /// Backend answered with a non-success status. The message is fixed per
    /// operation; the status code is only logged.
    #[error("{0}")]
    Request(&'static str),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    pub const PROFILE_FETCH_FAILED: &'static str = "Failed to fetch athlete data";
    pub const ACTIVITIES_FETCH_FAILED: &'static str = "Failed to fetch activities";
    pub const RACES_FETCH_FAILED: &'static str = "Failed to fetch races";
    pub const PARTICIPANTS_FETCH_FAILED: &'static str = "Failed to fetch races with participants";
    pub const ACTIVITY_CREATE_FAILED: &'static str = "Failed to add activity";
    pub const RACE_CREATE_FAILED: &'static str = "Failed to add race";
    pub const PROFILE_UPDATE_FAILED: &'static str = "Failed to update profile";
    pub const LOGIN_FAILED: &'static str = "Login failed";
    pub const REGISTER_FAILED: &'static str = "Registration failed";
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        // HashMap iteration order is unstable; keep messages deterministic.
        messages.sort();
        AppError::Validation(messages.join(", "))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, AppError>;
