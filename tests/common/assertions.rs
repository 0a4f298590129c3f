//! Assertion helpers for tests.

use axum::http::StatusCode;
use base64::Engine;
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

/// Assert an error response with the JSON `{status, error}` body
pub fn assert_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert_eq!(
        json["error"].as_str(),
        Some(message),
        "Unexpected error message. Full response: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Decode a `data:image/png;base64,...` URL from a response into pixels
pub fn decode_png_data_url(url: &str) -> image::RgbImage {
    let payload = url
        .strip_prefix("data:image/png;base64,")
        .unwrap_or_else(|| panic!("Expected PNG data URL, got {}", &url[..url.len().min(40)]));
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .expect("Invalid base64 in data URL");
    assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n", "Expected PNG signature");
    image::load_from_memory(&bytes)
        .expect("Failed to decode PNG")
        .to_rgb8()
}

/// Assert the histogram in a bead color response is consistent:
/// counts sum to the bead total, one entry per unique color, sorted by count
pub fn assert_consistent_histogram(json: &serde_json::Value) {
    let colors = json["beadColors"]
        .as_array()
        .expect("beadColors should be an array");
    let total = json["totalBeads"].as_u64().expect("totalBeads");
    let cols = json["gridSize"]["cols"].as_u64().expect("gridSize.cols");
    let rows = json["gridSize"]["rows"].as_u64().expect("gridSize.rows");

    assert_eq!(total, cols * rows, "totalBeads should equal cols * rows");
    assert_eq!(json["uniqueColors"].as_u64(), Some(colors.len() as u64));

    let counts: Vec<u64> = colors
        .iter()
        .map(|c| c["count"].as_u64().expect("count"))
        .collect();
    assert_eq!(counts.iter().sum::<u64>(), total, "counts should sum to totalBeads");
    assert!(
        counts.windows(2).all(|w| w[0] >= w[1]),
        "beadColors should be sorted by descending count: {counts:?}"
    );
}
