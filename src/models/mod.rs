// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod athlete;
pub mod race;

pub use activity::{Activity, NewActivity};
pub use athlete::{Athlete, LoginResponse, ProfileUpdate, Registration};
pub use race::{NewRace, Race};

use validator::ValidationError;

/// Reject values that are empty once trimmed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
