// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Sweat Junkies: log workouts and race results.
//!
//! This crate provides the client for the Sweat Junkies backend: a shared
//! session store holding the athlete's profile, activities and races, the
//! REST client it fetches through, and plain-text views over it.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;
pub mod views;

pub use store::{SessionState, SessionStore};
