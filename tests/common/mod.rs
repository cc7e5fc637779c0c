// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process fake of the Sweat Junkies backend.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use sweat_junkies::services::{ApiClient, CredentialStore, MemoryCredentialStore};
use sweat_junkies::SessionStore;

pub const TEST_TOKEN: &str = "tok123";
pub const TEST_PASSWORD: &str = "secret";

/// A request as seen by the fake backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct SeenRequest {
    pub route: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

/// Backend data and request log, shared with the router.
pub struct FakeBackend {
    pub profile: Mutex<Value>,
    pub activities: Mutex<Vec<Value>>,
    pub races: Mutex<Vec<Value>>,
    pub races_with_participants: Mutex<Vec<Value>>,
    accepted_tokens: Mutex<HashSet<String>>,
    failing: Mutex<HashSet<String>>,
    requests: Mutex<Vec<SeenRequest>>,
    next_id: AtomicU64,
}

#[allow(dead_code)]
impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            profile: Mutex::new(json!({
                "id": 1,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com"
            })),
            activities: Mutex::new(Vec::new()),
            races: Mutex::new(Vec::new()),
            races_with_participants: Mutex::new(Vec::new()),
            accepted_tokens: Mutex::new(HashSet::from([TEST_TOKEN.to_string()])),
            failing: Mutex::new(HashSet::new()),
            requests: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(100),
        })
    }

    /// Make `route` (e.g. "GET /api/activities") answer 500.
    pub fn fail(&self, route: &str) {
        self.failing.lock().unwrap().insert(route.to_string());
    }

    pub fn accept_token(&self, token: &str) {
        self.accepted_tokens
            .lock()
            .unwrap()
            .insert(token.to_string());
    }

    pub fn set_profile(&self, profile: Value) {
        *self.profile.lock().unwrap() = profile;
    }

    pub fn set_activities(&self, activities: Vec<Value>) {
        *self.activities.lock().unwrap() = activities;
    }

    pub fn set_races(&self, races: Vec<Value>) {
        *self.races.lock().unwrap() = races;
    }

    pub fn set_races_with_participants(&self, races: Vec<Value>) {
        *self.races_with_participants.lock().unwrap() = races;
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Routes requested so far, in order.
    pub fn routes(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.route).collect()
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Log the request, then apply failure injection and bearer auth.
    fn check(&self, route: &str, headers: &HeaderMap, needs_auth: bool) -> Result<(), StatusCode> {
        let header_value = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let authorization = header_value(header::AUTHORIZATION);

        self.requests.lock().unwrap().push(SeenRequest {
            route: route.to_string(),
            authorization: authorization.clone(),
            content_type: header_value(header::CONTENT_TYPE),
        });

        if self.failing.lock().unwrap().contains(route) {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }

        if needs_auth {
            let token = authorization
                .as_deref()
                .and_then(|h| h.strip_prefix("Bearer "))
                .ok_or(StatusCode::UNAUTHORIZED)?;
            if !self.accepted_tokens.lock().unwrap().contains(token) {
                return Err(StatusCode::UNAUTHORIZED);
            }
        }
        Ok(())
    }
}

type Shared = Arc<FakeBackend>;

async fn get_profile(
    State(b): State<Shared>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    b.check("GET /api/athlete/profile", &headers, true)?;
    Ok(Json(b.profile.lock().unwrap().clone()))
}

async fn put_profile(
    State(b): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    b.check("PUT /api/athlete/profile", &headers, true)?;
    let mut profile = b.profile.lock().unwrap();
    for key in ["first_name", "email"] {
        if let Some(value) = body.get(key) {
            profile[key] = value.clone();
        }
    }
    Ok(Json(profile.clone()))
}

async fn list_activities(
    State(b): State<Shared>,
    headers: HeaderMap,
) -> Result<Json<Vec<Value>>, StatusCode> {
    b.check("GET /api/activities", &headers, true)?;
    Ok(Json(b.activities.lock().unwrap().clone()))
}

async fn create_activity(
    State(b): State<Shared>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    b.check("POST /api/activities", &headers, true)?;
    body["id"] = json!(b.next_id());
    b.activities.lock().unwrap().push(body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn list_races(
    State(b): State<Shared>,
    headers: HeaderMap,
) -> Result<Json<Vec<Value>>, StatusCode> {
    b.check("GET /api/races", &headers, true)?;
    Ok(Json(b.races.lock().unwrap().clone()))
}

async fn create_race(
    State(b): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    b.check("POST /api/races", &headers, true)?;
    let race = json!({
        "id": b.next_id(),
        "race_name": body["race_name"],
        "date": body["date"],
        "distance": body["distance"],
        "finish_time": body["finish_time"],
    });
    b.races.lock().unwrap().push(race.clone());
    Ok((StatusCode::CREATED, Json(race)))
}

async fn list_races_with_participants(
    State(b): State<Shared>,
    headers: HeaderMap,
) -> Result<Json<Vec<Value>>, StatusCode> {
    b.check("GET /api/races_with_participants", &headers, true)?;
    Ok(Json(b.races_with_participants.lock().unwrap().clone()))
}

async fn login(
    State(b): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    b.check("POST /api/login", &headers, false)
        .map_err(|s| (s, Json(json!({"message": "unavailable"}))))?;
    if body["password"] != TEST_PASSWORD {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Incorrect password"})),
        ));
    }
    let user = b.profile.lock().unwrap().clone();
    Ok(Json(json!({"token": TEST_TOKEN, "user": user})))
}

async fn register(
    State(b): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    b.check("POST /api/register", &headers, false)?;
    if body["firstName"].is_null() || body["lastName"].is_null() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "User registered successfully"})),
    ))
}

fn router(backend: Shared) -> Router {
    Router::new()
        .route("/api/athlete/profile", get(get_profile).put(put_profile))
        .route("/api/activities", get(list_activities).post(create_activity))
        .route("/api/races", get(list_races).post(create_race))
        .route(
            "/api/races_with_participants",
            get(list_races_with_participants),
        )
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .with_state(backend)
}

/// Serve the fake backend on an ephemeral port; returns its base URL.
pub async fn spawn_backend(backend: Shared) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router(backend))
            .await
            .expect("Fake backend crashed");
    });
    format!("http://{}", addr)
}

/// Base URL where nothing is listening.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}

/// A running fake backend plus a store pointed at it.
#[allow(dead_code)]
pub struct TestApp {
    pub backend: Shared,
    pub credentials: Arc<MemoryCredentialStore>,
    pub store: SessionStore,
    pub base_url: String,
}

/// Spawn a backend and build a store holding `token` (or no credential).
#[allow(dead_code)]
pub async fn create_test_app(backend: Shared, token: Option<&str>) -> TestApp {
    let base_url = spawn_backend(backend.clone()).await;
    let credentials = Arc::new(match token {
        Some(t) => MemoryCredentialStore::with_token(t),
        None => MemoryCredentialStore::new(),
    });
    let store = SessionStore::new(
        ApiClient::new(base_url.clone()),
        credentials.clone() as Arc<dyn CredentialStore>,
    );
    TestApp {
        backend,
        credentials,
        store,
        base_url,
    }
}
