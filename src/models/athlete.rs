// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Athlete profile and account models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

/// Athlete profile as returned by `/api/athlete/profile`.
///
/// The default value is the empty record the store holds before load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Athlete {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Athlete {
    /// First name for greetings, "Guest" when not loaded.
    pub fn display_first_name(&self) -> &str {
        if self.first_name.is_empty() {
            "Guest"
        } else {
            &self.first_name
        }
    }
}

/// Editable profile fields for `PUT /api/athlete/profile`.
///
/// Unset fields are left alone by the backend.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank", message = "First name cannot be empty"))]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
}

/// New account for `POST /api/register`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Registration {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(rename = "firstName")]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
}

/// Successful `POST /api/login` body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Athlete,
}
