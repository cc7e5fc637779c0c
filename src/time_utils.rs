// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date parsing and formatting.

use crate::error::{AppError, Result};
use chrono::NaiveDate;

/// Date format used on the wire and in forms.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a user-supplied `YYYY-MM-DD` date.
pub fn parse_form_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| AppError::Validation("Date is required (YYYY-MM-DD)".to_string()))
}

/// Format a date the way the dashboard header shows it.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
