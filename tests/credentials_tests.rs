// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed credential storage.

use sweat_junkies::error::AppError;
use sweat_junkies::services::{CredentialStore, FileCredentialStore, TOKEN_KEY};

#[test]
fn test_missing_file_means_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("storage.json"));

    assert_eq!(store.token().unwrap(), None);
}

#[test]
fn test_set_get_remove() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("storage.json"));

    store.set(TOKEN_KEY, "tok123").unwrap();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.token().unwrap().as_deref(), Some("tok123"));

    store.remove(TOKEN_KEY).unwrap();
    assert_eq!(store.token().unwrap(), None);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_reads_are_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let reader = FileCredentialStore::new(&path);
    let writer = FileCredentialStore::new(&path);

    writer.set(TOKEN_KEY, "first").unwrap();
    assert_eq!(reader.token().unwrap().as_deref(), Some("first"));

    writer.remove(TOKEN_KEY).unwrap();
    assert_eq!(reader.token().unwrap(), None);
}

#[test]
fn test_corrupt_file_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = FileCredentialStore::new(&path).token().unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));
}

#[test]
fn test_empty_file_is_empty_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "").unwrap();

    assert_eq!(FileCredentialStore::new(&path).token().unwrap(), None);
}
