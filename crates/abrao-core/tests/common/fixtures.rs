//! Test fixture loading utilities

use std::path::PathBuf;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load a mock API response fixture as JSON
pub fn load_response_fixture(name: &str) -> serde_json::Value {
    let text = load_fixture(&format!("responses/{}", name));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Bad fixture {}: {}", name, e))
}

/// Load a mock API response fixture into a typed document
#[allow(dead_code)]
pub fn load_typed<T: serde::de::DeserializeOwned>(name: &str) -> T {
    serde_json::from_value(load_response_fixture(name))
        .unwrap_or_else(|e| panic!("Fixture {} does not decode: {}", name, e))
}
