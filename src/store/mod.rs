// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state store.
//!
//! The single source of truth for the signed-in athlete's data. It is
//! constructed once, shared by reference (`Arc<SessionStore>`) with every view,
//! and mutated only through the setters below.
//!
//! Handles:
//! - The one-time bulk fetch (profile, activities, races)
//! - Refreshing a collection wholesale
//! - Creating activities and races and appending the backend's record
//! - The shared last-error-wins message slot and the loading flag

pub mod error_log;

pub use error_log::ErrorLog;

use crate::config::{Config, FetchStrategy, DEFAULT_ERROR_LOG_CAPACITY};
use crate::error::{AppError, Result};
use crate::models::{Activity, Athlete, NewActivity, NewRace, ProfileUpdate, Race};
use crate::services::{ApiClient, CredentialStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use validator::Validate;

/// Point-in-time copy of everything the store holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub profile: Athlete,
    pub activities: Vec<Activity>,
    pub races: Vec<Race>,
    /// Last recorded error, empty when none
    pub error: String,
    /// True until the bulk fetch settles
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            profile: Athlete::default(),
            activities: Vec::new(),
            races: Vec::new(),
            error: String::new(),
            loading: true,
        }
    }
}

/// Backend operations whose failures land in the error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchProfile,
    FetchActivities,
    FetchRaces,
    FetchRaceParticipants,
    AddActivity,
    AddRace,
    UpdateProfile,
}

impl Operation {
    fn prefix(self) -> &'static str {
        match self {
            Operation::FetchProfile => "Error fetching athlete data",
            Operation::FetchActivities => "Error fetching activities",
            Operation::FetchRaces | Operation::FetchRaceParticipants => "Error fetching races",
            Operation::AddActivity => "Error adding activity",
            Operation::AddRace => "Error adding race",
            Operation::UpdateProfile => "Error updating profile",
        }
    }

    /// Text recorded in the error slot for a failure of this operation.
    pub fn failure_message(self, err: &AppError) -> String {
        match err {
            AppError::NotAuthenticated => err.to_string(),
            _ => format!("{}: {}", self.prefix(), err),
        }
    }
}

struct Inner {
    state: SessionState,
    errors: ErrorLog,
}

pub struct SessionStore {
    client: ApiClient,
    credentials: Arc<dyn CredentialStore>,
    strategy: FetchStrategy,
    inner: RwLock<Inner>,
    initialized: AtomicBool,
}

impl SessionStore {
    /// Create an empty store in the loading state. Call [`initialize`] next.
    ///
    /// [`initialize`]: SessionStore::initialize
    pub fn new(client: ApiClient, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            client,
            credentials,
            strategy: FetchStrategy::default(),
            inner: RwLock::new(Inner {
                state: SessionState::default(),
                errors: ErrorLog::new(DEFAULT_ERROR_LOG_CAPACITY),
            }),
            initialized: AtomicBool::new(false),
        }
    }

    /// Create a store using the fetch strategy and error log size from config.
    pub fn from_config(
        config: &Config,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self> {
        let client = ApiClient::from_config(config)?;
        Ok(Self::new(client, credentials)
            .with_fetch_strategy(config.fetch_strategy)
            .with_error_log_capacity(config.error_log_capacity))
    }

    pub fn with_fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_error_log_capacity(self, capacity: usize) -> Self {
        self.write().errors = ErrorLog::new(capacity);
        self
    }

    // ─── Initialization ──────────────────────────────────────────────────────

    /// Run the bulk fetch. Only the first call does anything.
    ///
    /// Failures are recorded in the error slot, never returned. The loading
    /// flag is cleared exactly once, after every attempted fetch settles.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::warn!("Session store already initialized, ignoring");
            return;
        }

        match self.credentials.token() {
            Ok(Some(token)) => match self.strategy {
                FetchStrategy::Sequential => self.fetch_sequential(&token).await,
                FetchStrategy::Parallel => self.fetch_parallel(&token).await,
            },
            Ok(None) => {
                tracing::info!("No stored credential, skipping initial fetch");
                self.record_error(AppError::NotAuthenticated.to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read credential");
                self.record_error(e.to_string());
            }
        }

        self.write().state.loading = false;
        tracing::debug!("Session store initialized");
    }

    /// Profile, then activities, then races. Stops at the first failure;
    /// whatever was fetched before it is kept.
    async fn fetch_sequential(&self, token: &str) {
        let result = async {
            let profile = self
                .client
                .get_profile(token)
                .await
                .map_err(|e| (Operation::FetchProfile, e))?;
            tracing::debug!(athlete_id = profile.id, "Fetched profile");
            self.set_profile(profile);

            let activities = self
                .client
                .list_activities(token)
                .await
                .map_err(|e| (Operation::FetchActivities, e))?;
            tracing::debug!(count = activities.len(), "Fetched activities");
            self.set_activities(activities);

            let races = self
                .client
                .list_races(token)
                .await
                .map_err(|e| (Operation::FetchRaces, e))?;
            tracing::debug!(count = races.len(), "Fetched races");
            self.set_races(races);

            Ok::<(), (Operation, AppError)>(())
        }
        .await;

        if let Err((op, e)) = result {
            self.fail(op, e);
        }
    }

    /// All three at once. Every success is applied; every failure is
    /// reported, joined in profile/activities/races order.
    async fn fetch_parallel(&self, token: &str) {
        let (profile, activities, races) = tokio::join!(
            self.client.get_profile(token),
            self.client.list_activities(token),
            self.client.list_races(token),
        );

        let mut failures = Vec::new();

        match profile {
            Ok(profile) => self.set_profile(profile),
            Err(e) => failures.push(Operation::FetchProfile.failure_message(&e)),
        }
        match activities {
            Ok(activities) => self.set_activities(activities),
            Err(e) => failures.push(Operation::FetchActivities.failure_message(&e)),
        }
        match races {
            Ok(races) => self.set_races(races),
            Err(e) => failures.push(Operation::FetchRaces.failure_message(&e)),
        }

        if failures.is_empty() {
            return;
        }

        tracing::warn!(failures = failures.len(), "Initial fetch incomplete");
        let mut inner = self.write();
        for message in &failures {
            inner.errors.push(message.clone());
        }
        inner.state.error = failures.join("; ");
    }

    // ─── Backend-backed operations ───────────────────────────────────────────

    /// Re-fetch the activity list and replace it wholesale.
    pub async fn refresh_activities(&self) -> Result<()> {
        let op = Operation::FetchActivities;
        let token = self.current_token().map_err(|e| self.fail(op, e))?;
        let activities = self
            .client
            .list_activities(&token)
            .await
            .map_err(|e| self.fail(op, e))?;
        self.set_activities(activities);
        Ok(())
    }

    /// Re-fetch the athlete's races and replace them wholesale.
    pub async fn refresh_races(&self) -> Result<()> {
        let op = Operation::FetchRaces;
        let token = self.current_token().map_err(|e| self.fail(op, e))?;
        let races = self
            .client
            .list_races(&token)
            .await
            .map_err(|e| self.fail(op, e))?;
        self.set_races(races);
        Ok(())
    }

    /// Replace the races with every race and its participants.
    pub async fn refresh_race_participants(&self) -> Result<()> {
        let op = Operation::FetchRaceParticipants;
        let token = self.current_token().map_err(|e| self.fail(op, e))?;
        let races = self
            .client
            .list_races_with_participants(&token)
            .await
            .map_err(|e| self.fail(op, e))?;
        self.set_races(races);
        Ok(())
    }

    /// Validate and create an activity, then append the created record.
    ///
    /// Validation failures are returned without touching the error slot.
    pub async fn add_activity(&self, draft: &NewActivity) -> Result<Activity> {
        draft.validate()?;

        let op = Operation::AddActivity;
        let token = self.current_token().map_err(|e| self.fail(op, e))?;
        let created = self
            .client
            .create_activity(&token, draft)
            .await
            .map_err(|e| self.fail(op, e))?;

        tracing::info!(activity_id = created.id, "Activity added");
        self.push_activity(created.clone());
        Ok(created)
    }

    /// Validate and create a race, then append the created record.
    pub async fn add_race(&self, draft: &NewRace) -> Result<Race> {
        draft.validate()?;

        let op = Operation::AddRace;
        let token = self.current_token().map_err(|e| self.fail(op, e))?;
        let created = self
            .client
            .create_race(&token, draft)
            .await
            .map_err(|e| self.fail(op, e))?;

        tracing::info!(race_id = created.id, "Race added");
        self.push_race(created.clone());
        Ok(created)
    }

    /// Save profile edits and replace the profile with the stored result.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Athlete> {
        update.validate()?;

        let op = Operation::UpdateProfile;
        let token = self.current_token().map_err(|e| self.fail(op, e))?;
        let profile = self
            .client
            .update_profile(&token, update)
            .await
            .map_err(|e| self.fail(op, e))?;

        self.set_profile(profile.clone());
        Ok(profile)
    }

    // ─── Setters ─────────────────────────────────────────────────────────────

    pub fn set_profile(&self, profile: Athlete) {
        self.write().state.profile = profile;
    }

    pub fn set_activities(&self, activities: Vec<Activity>) {
        self.write().state.activities = activities;
    }

    /// Append one activity. Identical records are kept as separate entries.
    pub fn push_activity(&self, activity: Activity) {
        self.write().state.activities.push(activity);
    }

    pub fn set_races(&self, races: Vec<Race>) {
        self.write().state.races = races;
    }

    pub fn push_race(&self, race: Race) {
        self.write().state.races.push(race);
    }

    /// Overwrite the error slot. Non-empty messages also go to the error log.
    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.clear_error();
        } else {
            self.record_error(message);
        }
    }

    pub fn clear_error(&self) {
        self.write().state.error.clear();
    }

    // ─── Readers ─────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> SessionState {
        self.read().state.clone()
    }

    pub fn profile(&self) -> Athlete {
        self.read().state.profile.clone()
    }

    pub fn activities(&self) -> Vec<Activity> {
        self.read().state.activities.clone()
    }

    pub fn races(&self) -> Vec<Race> {
        self.read().state.races.clone()
    }

    /// Races with at least one listed participant.
    pub fn races_with_participants(&self) -> Vec<Race> {
        self.read()
            .state
            .races
            .iter()
            .filter(|r| r.has_participants())
            .cloned()
            .collect()
    }

    pub fn error(&self) -> String {
        self.read().state.error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().state.loading
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Recent errors, oldest first.
    pub fn recent_errors(&self) -> Vec<String> {
        self.read().errors.entries()
    }

    // ─── Internals ───────────────────────────────────────────────────────────

    /// The credential as stored right now.
    fn current_token(&self) -> Result<String> {
        self.credentials.token()?.ok_or(AppError::NotAuthenticated)
    }

    /// Record a failed operation and hand the error back to the caller.
    fn fail(&self, op: Operation, err: AppError) -> AppError {
        let message = op.failure_message(&err);
        tracing::warn!(operation = ?op, error = %err, "Operation failed");
        self.record_error(message);
        err
    }

    fn record_error(&self, message: String) {
        let mut inner = self.write();
        inner.errors.push(message.clone());
        inner.state.error = message;
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
