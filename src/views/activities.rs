// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::write_error;
use crate::store::SessionStore;
use std::fmt::{self, Write};

/// Activity list with date and duration.
pub fn render(store: &SessionStore, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "Activities")?;
    write_error(out, &store.error())?;

    let activities = store.activities();
    if activities.is_empty() {
        return writeln!(out, "No activities found.");
    }
    for activity in &activities {
        writeln!(out, "{}", activity.description)?;
        writeln!(out, "  Date: {}", activity.date)?;
        writeln!(out, "  Duration: {} minutes", activity.duration)?;
    }
    Ok(())
}
