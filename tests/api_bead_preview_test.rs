//! Integration tests for /api/bead-preview.

mod common;

use axum::http::StatusCode;
use common::fixtures::{self, BLUE, RED};
use common::{assert_consistent_histogram, assert_error, assert_ok, decode_png_data_url, TestApp};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn test_red_blue_board_without_palette() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url(&fixtures::red_blue(20, 20)),
        "pixelSize": 10,
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_ok(&response);
    let json: Value = response.json();

    assert_eq!(json["width"], 20);
    assert_eq!(json["height"], 20);
    assert_eq!(json["totalBeads"], 4);
    assert_eq!(json["uniqueColors"], 2);
    assert_eq!(json["gridSize"], json!({"cols": 2, "rows": 2}));
    assert_eq!(
        json["beadColors"],
        json!([
            {"hex": "#ff0000", "rgb": [255, 0, 0], "count": 2, "percentage": 50.0},
            {"hex": "#0000ff", "rgb": [0, 0, 255], "count": 2, "percentage": 50.0},
        ])
    );
    assert_consistent_histogram(&json);

    let preview = decode_png_data_url(json["beadPreviewUrl"].as_str().unwrap());
    assert_eq!(preview.dimensions(), (20, 20));
    assert_eq!(preview.get_pixel(5, 5).0, RED);
    assert_eq!(preview.get_pixel(15, 15).0, BLUE);
    // background between beads
    assert_eq!(preview.get_pixel(0, 0).0, [255, 255, 255]);
}

#[tokio::test]
async fn test_inline_palette_labels_by_name() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url(&fixtures::red_blue(20, 20)),
        "pixelSize": 10,
        "colorPalette": [
            {"hex": "#000000", "name": "Black"},
            {"hex": "#E00000", "name": "Cherry"},
            {"hex": "#0000E0"},
        ],
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_ok(&response);
    let json: Value = response.json();

    let labels: Vec<&str> = json["beadColors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["hex"].as_str().unwrap())
        .collect();
    // unnamed entries are labeled by their hex as supplied
    assert_eq!(labels, vec!["Cherry", "#0000E0"]);
    // rgb is the sampled color, not the palette color
    assert_eq!(json["beadColors"][0]["rgb"], json!([255, 0, 0]));

    let preview = decode_png_data_url(json["beadPreviewUrl"].as_str().unwrap());
    assert_eq!(preview.get_pixel(5, 5).0, [224, 0, 0]);
    assert_eq!(preview.get_pixel(15, 5).0, [0, 0, 224]);
}

#[tokio::test]
async fn test_palette_merges_colors() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url(&fixtures::red_blue(40, 20)),
        "pixelSize": 10,
        "colorPalette": [{"hex": "#FFFFFF", "name": "White"}],
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_ok(&response);
    let json: Value = response.json();

    assert_eq!(json["uniqueColors"], 1);
    assert_eq!(json["beadColors"][0]["hex"], "White");
    assert_eq!(json["beadColors"][0]["count"], 8);
    assert_eq!(json["beadColors"][0]["percentage"], 100.0);
}

#[tokio::test]
async fn test_named_palette_from_config() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url(&fixtures::solid(10, 10, [250, 250, 250])),
        "pixelSize": 5,
        "paletteName": "grayscale",
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["totalBeads"], 4);
    assert_eq!(json["uniqueColors"], 1);
    assert_consistent_histogram(&json);
}

#[tokio::test]
async fn test_empty_palette_keeps_sampled_colors() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url(&fixtures::red_blue(20, 20)),
        "pixelSize": 10,
        "colorPalette": [],
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["beadColors"][0]["hex"], "#ff0000");
}

#[tokio::test]
async fn test_small_pixel_size_uses_minimum_bead() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url(&fixtures::solid(12, 7, [1, 2, 3])),
        "pixelSize": 1,
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_ok(&response);
    let json: Value = response.json();
    // beads are at least 5px: ceil(12/5) x ceil(7/5)
    assert_eq!(json["gridSize"], json!({"cols": 3, "rows": 2}));
    assert_eq!(json["totalBeads"], 6);
}

#[tokio::test]
async fn test_uneven_counts_round_percentages() {
    let app = TestApp::new();
    // 3x1 grid: two red beads, one blue
    let image = image::RgbImage::from_fn(30, 10, |x, _| {
        if x < 20 {
            image::Rgb(RED)
        } else {
            image::Rgb(BLUE)
        }
    });
    let body = json!({"imageUrl": fixtures::data_url(&image), "pixelSize": 10});

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_ok(&response);
    let json: Value = response.json();
    assert_eq!(json["beadColors"][0]["percentage"], 66.67);
    assert_eq!(json["beadColors"][1]["percentage"], 33.33);
}

#[tokio::test]
async fn test_invalid_palette_hex_rejected() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url(&fixtures::red_blue(20, 20)),
        "pixelSize": 10,
        "colorPalette": [{"hex": "#FF0000"}, {"hex": "#GG0000", "name": "Bad"}],
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_error(
        &response,
        StatusCode::BAD_REQUEST,
        "Invalid palette: invalid color \"#GG0000\" at index 1: invalid hex digit",
    );
}

#[tokio::test]
async fn test_unknown_palette_name() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url(&fixtures::red_blue(20, 20)),
        "pixelSize": 10,
        "paletteName": "perler",
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_error(&response, StatusCode::NOT_FOUND, "Palette not found: perler");
}

#[tokio::test]
async fn test_pixel_size_out_of_range() {
    let app = TestApp::new();
    for size in [0, 101, -3] {
        let body = json!({
            "imageUrl": fixtures::data_url(&fixtures::red_blue(20, 20)),
            "pixelSize": size,
        });
        let response = app.post_json("/api/bead-preview", &body).await;
        assert_error(
            &response,
            StatusCode::BAD_REQUEST,
            "Invalid request: pixelSize must be between 1 and 100",
        );
    }
}

#[tokio::test]
async fn test_undecodable_image_gives_generic_error() {
    let app = TestApp::new();
    let body = json!({
        "imageUrl": fixtures::data_url_from_bytes(b"GIF89a but not really"),
        "pixelSize": 10,
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_error(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Failed to generate bead preview",
    );
}

#[tokio::test]
async fn test_transparent_pixels_sample_as_white() {
    let app = TestApp::new();
    let bytes = fixtures::png_bytes(image::DynamicImage::ImageRgba8(
        fixtures::half_transparent(20, 10),
    ));
    let body = json!({
        "imageUrl": fixtures::data_url_from_bytes(&bytes),
        "pixelSize": 10,
    });

    let response = app.post_json("/api/bead-preview", &body).await;
    assert_ok(&response);
    let json: Value = response.json();
    let labels: Vec<&str> = json["beadColors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["hex"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["#ff0000", "#ffffff"]);
}
