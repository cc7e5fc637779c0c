// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Race results and race participation listings.

use super::write_error;
use crate::store::SessionStore;
use std::fmt::{self, Write};

/// The athlete's own race results.
pub fn render_results(store: &SessionStore, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "Race Results")?;
    write_error(out, &store.error())?;

    let races = store.races();
    if races.is_empty() {
        return writeln!(out, "No races logged.");
    }
    for race in &races {
        writeln!(
            out,
            "{} on {} - Distance: {}, Time: {}",
            race.race_name,
            race.date,
            race.distance,
            race.finish_time.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

/// Every race that lists participants, with their names.
pub fn render_participants(store: &SessionStore, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "Other Sweat Junkie's Race Results")?;
    write_error(out, &store.error())?;

    let races = store.races_with_participants();
    if races.is_empty() {
        return writeln!(out, "No race participations found.");
    }
    for race in &races {
        writeln!(out, "{} on {}:", race.race_name, race.date)?;
        writeln!(
            out,
            "  Participant name: {}",
            race.participants.as_deref().unwrap_or_default().join(", ")
        )?;
    }
    Ok(())
}
