//! Exercise analysis API integration tests.
//!
//! Run with: `cargo test -p formcheck-api --test exercise_analysis_test`

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use formcheck_core::Config;

fn test_server(max_video_size_bytes: usize) -> TestServer {
    let config = Config {
        server_port: 0,
        environment: "test".to_string(),
        max_video_size_bytes,
        cors_origins: vec!["*".to_string()],
    };
    TestServer::new(formcheck_api::routes::router(config)).expect("test server")
}

#[tokio::test]
async fn upload_returns_filename_and_size() {
    let server = test_server(1024 * 1024);

    let video = vec![0x42u8; 2048];
    let part = Part::bytes(video).file_name("kickback.mp4").mime_type("video/mp4");
    let multipart = MultipartForm::new().add_part("file", part);

    let response = server.post("/exercise-analysis").multipart(multipart).await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body.get("filename").and_then(|v| v.as_str()), Some("kickback.mp4"));
    assert_eq!(body.get("size").and_then(|v| v.as_u64()), Some(2048));
}

#[tokio::test]
async fn upload_without_filename_gets_a_default() {
    let server = test_server(1024 * 1024);

    let multipart = MultipartForm::new().add_part("file", Part::bytes(vec![1u8; 16]));
    let response = server.post("/exercise-analysis").multipart(multipart).await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body.get("filename").and_then(|v| v.as_str()), Some("upload.mp4"));
}

#[tokio::test]
async fn missing_file_field_is_bad_request() {
    let server = test_server(1024 * 1024);

    let part = Part::bytes(vec![1u8; 16]).file_name("clip.mp4");
    let multipart = MultipartForm::new().add_part("attachment", part);
    let response = server.post("/exercise-analysis").multipart(multipart).await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body.get("code").and_then(|v| v.as_str()), Some("BAD_REQUEST"));
}

#[tokio::test]
async fn empty_file_is_invalid_input() {
    let server = test_server(1024 * 1024);

    let part = Part::bytes(Vec::<u8>::new()).file_name("empty.mp4");
    let multipart = MultipartForm::new().add_part("file", part);
    let response = server.post("/exercise-analysis").multipart(multipart).await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body.get("code").and_then(|v| v.as_str()), Some("INVALID_INPUT"));
}

#[tokio::test]
async fn oversized_file_is_rejected_with_413() {
    let server = test_server(1024);

    let part = Part::bytes(vec![0u8; 4096]).file_name("big.mp4");
    let multipart = MultipartForm::new().add_part("file", part);
    let response = server.post("/exercise-analysis").multipart(multipart).await;

    assert_eq!(response.status_code(), 413);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body.get("code").and_then(|v| v.as_str()),
        Some("PAYLOAD_TOO_LARGE")
    );
}

#[tokio::test]
async fn non_multipart_body_is_rejected() {
    let server = test_server(1024 * 1024);

    let response = server
        .post("/exercise-analysis")
        .text("just some text")
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn root_returns_banner() {
    let server = test_server(1024 * 1024);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some("Api Content")
    );
}
