//! Router-level tests for the generation endpoints, using the mock provider
//! so no network is involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chat_service::config::{ChatConfig, GoogleConfig, ModelConfig};
use chat_service::services::providers::mock::MockProvider;
use chat_service::services::providers::GenerationProvider;
use chat_service::startup::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_state(provider: Arc<dyn GenerationProvider>) -> AppState {
    AppState {
        config: ChatConfig {
            common: service_core::config::Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            google: GoogleConfig {
                api_key: "test-api-key".to_string(),
            },
            models: ModelConfig {
                text_model: "gemini-2.0-flash".to_string(),
                image_model: "gemini-2.0-flash".to_string(),
                audio_model: "gemini-2.0-flash".to_string(),
                document_model: "gemini-2.0-flash".to_string(),
            },
        },
        provider,
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body was not JSON")
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

#[tokio::test]
async fn generate_text_returns_extracted_result() {
    let app = build_router(test_state(Arc::new(MockProvider::with_text(
        "hello from the model",
    ))));

    let response = app
        .oneshot(json_request("/generate-text", json!({ "prompt": "hi" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], "hello from the model");
}

#[tokio::test]
async fn generate_text_without_prompt_is_rejected() {
    let app = build_router(test_state(Arc::new(MockProvider::with_text("unused"))));

    let response = app
        .oneshot(json_request("/generate-text", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("prompt"));
}

#[tokio::test]
async fn generate_text_with_non_string_prompt_is_rejected() {
    let app = build_router(test_state(Arc::new(MockProvider::with_text("unused"))));

    let response = app
        .oneshot(json_request("/generate-text", json!({ "prompt": 42 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upstream_failure_surfaces_as_500() {
    let app = build_router(test_state(Arc::new(MockProvider::failing(
        "Gemini API error 503 Service Unavailable: model overloaded",
    ))));

    let response = app
        .oneshot(json_request("/generate-text", json!({ "prompt": "hi" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("model overloaded"));
}

#[tokio::test]
async fn unknown_result_shape_falls_back_to_raw_dump() {
    let odd = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
    let app = build_router(test_state(Arc::new(MockProvider::with_value(odd.clone()))));

    let response = app
        .oneshot(json_request("/generate-text", json!({ "prompt": "hi" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["result"],
        serde_json::to_string_pretty(&odd).unwrap().as_str()
    );
}

#[tokio::test]
async fn chat_reply_is_rendered_to_html() {
    let app = build_router(test_state(Arc::new(MockProvider::with_text(
        "**bold** and *italic*",
    ))));

    let response = app
        .oneshot(json_request(
            "/api/chat",
            json!({ "messages": [{ "role": "user", "content": "hi" }] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], "**bold** and *italic*");
    assert_eq!(body["html"], "<strong>bold</strong> and <em>italic</em>");
}

#[tokio::test]
async fn chat_without_message_text_is_rejected() {
    let app = build_router(test_state(Arc::new(MockProvider::with_text("unused"))));

    for body in [
        json!({ "messages": [] }),
        json!({ "messages": [{ "role": "user", "content": "   " }] }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("/api/chat", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

fn multipart_request(uri: &str, boundary: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .expect("Failed to build request")
}

#[tokio::test]
async fn image_upload_is_forwarded() {
    let app = build_router(test_state(Arc::new(MockProvider::with_text(
        "a small test image",
    ))));

    let boundary = "test-boundary";
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"prompt\"\r\n\r\n\
         what is this?\r\n\
         --{b}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"pixel.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         not-really-png-bytes\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let response = app
        .oneshot(multipart_request("/generate-from-image", boundary, body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], "a small test image");
}

#[tokio::test]
async fn image_upload_without_file_is_rejected() {
    let app = build_router(test_state(Arc::new(MockProvider::with_text("unused"))));

    let boundary = "test-boundary";
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"prompt\"\r\n\r\n\
         no file attached\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let response = app
        .oneshot(multipart_request("/generate-from-image", boundary, body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("image"));
}

#[tokio::test]
async fn document_upload_uses_default_prompt() {
    let app = build_router(test_state(Arc::new(MockProvider::with_text(
        "a short summary",
    ))));

    let boundary = "test-boundary";
    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"document\"; filename=\"notes.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         some document text\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let response = app
        .oneshot(multipart_request("/generate-from-document", boundary, body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], "a short summary");
}
