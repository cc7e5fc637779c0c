// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account flows around the session credential: login, registration, logout.
//!
//! These own the credential's lifecycle; the session store only reads it.

use crate::error::{AppError, Result};
use crate::models::{Athlete, Registration};
use crate::services::api::ApiClient;
use crate::services::credentials::{CredentialStore, TOKEN_KEY};
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    credentials: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(client: ApiClient, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Log in and persist the returned bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Athlete> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let response = self.client.login(email.trim(), password).await?;
        self.credentials.set(TOKEN_KEY, &response.token)?;

        tracing::info!(athlete_id = response.user.id, "Logged in");
        Ok(response.user)
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        registration.validate()?;
        self.client.register(registration).await?;
        tracing::info!("Account registered");
        Ok(())
    }

    /// Drop the stored credential.
    pub fn logout(&self) -> Result<()> {
        self.credentials.remove(TOKEN_KEY)?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.credentials.token()?.is_some())
    }
}
