// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Race result model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

/// Race record as returned by `/api/races` and `/api/races_with_participants`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: u64,
    #[serde(default)]
    pub race_name: String,
    /// Race date (YYYY-MM-DD, as sent by the backend)
    #[serde(default)]
    pub date: String,
    /// Free-form distance, e.g. "10K" or "26.2 mi"
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub finish_time: Option<String>,
    /// Participant display names (only on the participants listing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
}

impl Race {
    /// Whether at least one participant is listed.
    pub fn has_participants(&self) -> bool {
        self.participants.as_ref().is_some_and(|p| !p.is_empty())
    }
}

/// Race form submitted to `POST /api/races`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewRace {
    #[validate(custom(function = "not_blank", message = "Race name is required"))]
    pub race_name: String,
    pub date: NaiveDate,
    #[validate(custom(function = "not_blank", message = "Distance is required"))]
    pub distance: String,
    /// Finish time (hh:mm:ss)
    #[validate(custom(function = "not_blank", message = "Time is required"))]
    pub finish_time: String,
}
