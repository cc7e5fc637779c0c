// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend access and credential handling.

pub mod api;
pub mod auth;
pub mod credentials;

pub use api::ApiClient;
pub use auth::AuthService;
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_KEY};
