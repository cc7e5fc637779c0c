// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard: greeting, profile summary and recent activities.

use super::write_error;
use crate::store::SessionStore;
use crate::time_utils::format_display_date;
use chrono::NaiveDate;
use std::fmt::{self, Write};

pub fn render(store: &SessionStore, today: NaiveDate, out: &mut impl Write) -> fmt::Result {
    let state = store.snapshot();
    if state.loading {
        return writeln!(out, "Loading...");
    }

    let athlete = &state.profile;
    writeln!(out, "Today's Date: {}", format_display_date(today))?;
    writeln!(
        out,
        "Dashboard for {} {}",
        athlete.display_first_name(),
        athlete.last_name
    )?;
    writeln!(out, "Welcome back, {}!", athlete.display_first_name())?;
    write_error(out, &state.error)?;

    writeln!(out)?;
    writeln!(out, "Your Profile")?;
    writeln!(out, "Email: {}", athlete.email)?;

    writeln!(out)?;
    writeln!(out, "Recent Activities")?;
    if state.activities.is_empty() {
        writeln!(out, "No activities logged.")?;
    }
    for activity in &state.activities {
        writeln!(
            out,
            "- {} - {} minutes",
            activity.description, activity.duration
        )?;
    }
    Ok(())
}
