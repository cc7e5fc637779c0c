// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain-text views over the session store.
//!
//! Views only read from the store; fetching and mutation happen in
//! [`crate::store::SessionStore`].

pub mod activities;
pub mod dashboard;
pub mod races;

use std::fmt::{self, Write};

/// Show the store's current error, if any.
fn write_error(out: &mut impl Write, error: &str) -> fmt::Result {
    if !error.is_empty() {
        writeln!(out, "Error: {}", error)?;
    }
    Ok(())
}
