//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a JSON error body with the given status and a message containing `needle`
pub fn assert_json_error(response: &TestResponse, expected: StatusCode, needle: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Full response: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
    let message = json["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(needle),
        "Expected error containing {needle:?}, got {message:?}"
    );
}

/// Assert a filter report is well formed and return its filter string
pub fn assert_valid_filter_report(response: &TestResponse) -> String {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert!(json["target"]["hex"].is_string(), "Expected target.hex");
    assert_eq!(json["target"]["rgb"].as_array().map(Vec::len), Some(3));
    assert!(json["loss"].is_number(), "Expected loss");
    assert!(
        matches!(
            json["quality"].as_str(),
            Some("perfect" | "excellent" | "good" | "poor")
        ),
        "Unexpected quality {:?}",
        json["quality"]
    );
    for key in ["invert", "sepia", "saturate", "hue_rotate", "brightness", "contrast"] {
        assert!(json["values"][key].is_number(), "Expected values.{key}");
    }

    let filter = json["filter"].as_str().expect("Expected filter string");
    assert!(filter.starts_with("filter: invert("), "{filter}");
    assert!(filter.ends_with(';'), "{filter}");
    filter.to_string()
}
