// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout activity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

/// Activity record as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    /// Activity date (YYYY-MM-DD, as sent by the backend)
    #[serde(default)]
    pub date: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration: u32,
}

/// Activity form submitted to `POST /api/activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewActivity {
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    pub date: NaiveDate,
    /// Duration in minutes
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration: u32,
}
