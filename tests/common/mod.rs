//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use omnitool::startup::AppConfig;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Model name used by every wiremock-backed test.
pub const TEST_MODEL: &str = "test-model";
pub const TEST_KEY: &str = "wire-test-key";

/// Config pointing at a mock server.
pub fn config_for(base_url: &str) -> AppConfig {
    AppConfig::new()
        .with_api_key(TEST_KEY)
        .with_model(TEST_MODEL)
        .with_base_url(base_url)
        .with_request_timeout(5)
}

/// Path served by the mock for the test model.
pub fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", TEST_MODEL)
}

/// A successful `generateContent` body with a single text part.
pub fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

/// Write `bytes` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write temp file");
    (dir, path)
}
