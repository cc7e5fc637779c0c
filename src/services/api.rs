// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sweat Junkies REST API client.
//!
//! Every call sends `Content-Type: application/json`; authenticated calls add
//! `Authorization: Bearer <token>`. Any non-success status maps to a fixed
//! per-operation message regardless of code or body.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    Activity, Athlete, LoginResponse, NewActivity, NewRace, ProfileUpdate, Race, Registration,
};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Sweat Junkies API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:5555`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration, applying the request timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Athlete ─────────────────────────────────────────────────────────────

    /// Get the authenticated athlete's profile.
    pub async fn get_profile(&self, access_token: &str) -> Result<Athlete> {
        self.get_json(
            "/api/athlete/profile",
            access_token,
            AppError::PROFILE_FETCH_FAILED,
        )
        .await
    }

    /// Update profile fields; returns the stored profile.
    pub async fn update_profile(
        &self,
        access_token: &str,
        update: &ProfileUpdate,
    ) -> Result<Athlete> {
        let request = self
            .http
            .put(self.url("/api/athlete/profile"))
            .bearer_auth(access_token)
            .json(update);
        self.send_json(request, AppError::PROFILE_UPDATE_FAILED)
            .await
    }

    // ─── Activities ──────────────────────────────────────────────────────────

    pub async fn list_activities(&self, access_token: &str) -> Result<Vec<Activity>> {
        self.get_json(
            "/api/activities",
            access_token,
            AppError::ACTIVITIES_FETCH_FAILED,
        )
        .await
    }

    /// Create an activity; returns the record the backend stored.
    pub async fn create_activity(
        &self,
        access_token: &str,
        activity: &NewActivity,
    ) -> Result<Activity> {
        self.post_json(
            "/api/activities",
            Some(access_token),
            activity,
            AppError::ACTIVITY_CREATE_FAILED,
        )
        .await
    }

    // ─── Races ───────────────────────────────────────────────────────────────

    /// List the races the athlete took part in.
    pub async fn list_races(&self, access_token: &str) -> Result<Vec<Race>> {
        self.get_json("/api/races", access_token, AppError::RACES_FETCH_FAILED)
            .await
    }

    /// Create a race; the backend also records the athlete's participation.
    pub async fn create_race(&self, access_token: &str, race: &NewRace) -> Result<Race> {
        self.post_json(
            "/api/races",
            Some(access_token),
            race,
            AppError::RACE_CREATE_FAILED,
        )
        .await
    }

    /// List every race along with its participants' names.
    pub async fn list_races_with_participants(
        &self,
        access_token: &str,
    ) -> Result<Vec<Race>> {
        self.get_json(
            "/api/races_with_participants",
            access_token,
            AppError::PARTICIPANTS_FETCH_FAILED,
        )
        .await
    }

    // ─── Accounts ────────────────────────────────────────────────────────────

    /// Exchange email and password for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        self.post_json("/api/login", None, &body, AppError::LOGIN_FAILED)
            .await
    }

    /// Create a new account.
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        let _: serde_json::Value = self
            .post_json(
                "/api/register",
                None,
                registration,
                AppError::REGISTER_FAILED,
            )
            .await?;
        Ok(())
    }

    // ─── Plumbing ────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Generic authenticated GET with JSON response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
        failure: &'static str,
    ) -> Result<T> {
        let request = self
            .http
            .get(self.url(path))
            .bearer_auth(access_token)
            .header(CONTENT_TYPE, "application/json");
        self.send_json(request, failure).await
    }

    /// Generic POST with a JSON body and JSON response.
    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: Option<&str>,
        body: &B,
        failure: &'static str,
    ) -> Result<T> {
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        self.send_json(request, failure).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        failure: &'static str,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response, failure).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        failure: &'static str,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                url = %response.url(),
                "{}",
                failure
            );
            return Err(AppError::Request(failure));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))
    }
}
