//! Helpdesk API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//!
//! Layer stack (outermost → innermost):
//! CORS → Cache-Control → Audit logger → Body limit → Handler

use axum::extract::DefaultBodyLimit;
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Maximum accepted request body (uploads included).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the helpdesk router.
///
/// Layers are applied from bottom (innermost) to top (outermost).
pub fn helpdesk_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/send_message", post(endpoints::chat::send))
        .route("/upload_file", post(endpoints::upload::upload))
        .route("/languages", get(endpoints::languages::list))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        // Replies may contain health details; never cache them.
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::catalog::{DISCLAIMER, HELPLINE};
    use crate::models::Sender;
    use crate::pipeline::orchestrator::test_support::*;
    use crate::pipeline::ConversationStore;

    const BOUNDARY: &str = "helpdesk-test-boundary";

    fn test_router(
        detected: Option<&'static str>,
        translator: RecordingTranslator,
        store: Arc<dyn ConversationStore>,
    ) -> Router {
        let pipeline = pipeline_with(FixedDetector(detected), Arc::new(translator), store);
        helpdesk_router(ApiContext::new(Arc::new(pipeline)))
    }

    fn english_router() -> Router {
        test_router(Some("en"), RecordingTranslator::new(), memory_store())
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Hand-built multipart body. `file` is (filename, bytes).
    fn multipart_post(file: Option<(&str, &[u8])>, lang_code: Option<&str>) -> Request<Body> {
        let mut body: Vec<u8> = Vec::new();
        if let Some(lang) = lang_code {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"lang_code\"\r\n\r\n{lang}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((filename, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload_file")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn send_message_returns_fever_advice() {
        let response = english_router()
            .oneshot(json_post(
                "/send_message",
                r#"{"message":"I have fever","lang_code":"en"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let reply = json["reply"].as_str().unwrap();
        assert!(reply.contains("For fever: Drink fluids, rest, monitor temperature."));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[tokio::test]
    async fn send_message_defaults_missing_fields() {
        let response = english_router()
            .oneshot(json_post("/send_message", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let reply = json["reply"].as_str().unwrap();
        assert!(reply.starts_with("You said: "));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[tokio::test]
    async fn send_message_translates_reply_for_hindi_user() {
        let translator = RecordingTranslator::new().with_english("मुझे बुखार है", "I have fever");
        let router = test_router(Some("hi"), translator, memory_store());

        let response = router
            .oneshot(json_post(
                "/send_message",
                r#"{"message":"मुझे बुखार है","lang_code":"hi"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let reply = json["reply"].as_str().unwrap();
        assert!(reply.starts_with("[hi] "));
        assert!(reply.contains("For fever"));
    }

    #[tokio::test]
    async fn send_message_logs_both_turns() {
        let store = memory_store();
        let router = test_router(Some("en"), RecordingTranslator::new(), store.clone());

        router
            .oneshot(json_post(
                "/send_message",
                r#"{"message":"I have fever","lang_code":"en"}"#,
            ))
            .await
            .unwrap();

        let messages = store.recent(10).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "I have fever");
        assert_eq!(messages[1].sender, Sender::Bot);
    }

    #[tokio::test]
    async fn send_message_rejects_non_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/send_message")
            .header("Content-Type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let response = english_router().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn upload_returns_dosage_explanation() {
        let response = english_router()
            .oneshot(multipart_post(Some(("rx.jpg", b"fake image bytes")), Some("en")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let reply = json["reply"].as_str().unwrap();
        assert!(reply.contains("Simulated OCR of rx.jpg"));
        assert!(reply.contains("Paracetamol 500 mg"));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[tokio::test]
    async fn upload_without_lang_code_defaults_to_english() {
        let translator = Arc::new(RecordingTranslator::new());
        let pipeline = pipeline_with(FixedDetector(Some("en")), translator.clone(), memory_store());
        let router = helpdesk_router(ApiContext::new(Arc::new(pipeline)));

        let response = router
            .oneshot(multipart_post(Some(("rx.jpg", b"bytes")), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(translator.call_count(), 0);
    }

    #[tokio::test]
    async fn upload_translates_for_telugu_user() {
        let response = english_router()
            .oneshot(multipart_post(Some(("rx.jpg", b"bytes")), Some("te")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert!(json["reply"].as_str().unwrap().starts_with("[te] "));
    }

    #[tokio::test]
    async fn upload_without_file_returns_400() {
        let response = english_router()
            .oneshot(multipart_post(None, Some("en")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        let reply = json["reply"].as_str().unwrap();
        assert!(reply.starts_with("No file received."));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[tokio::test]
    async fn upload_with_empty_file_part_returns_400() {
        let response = english_router()
            .oneshot(multipart_post(Some(("", b"")), Some("en")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn upload_with_nameless_file_bytes_returns_400() {
        let response = english_router()
            .oneshot(multipart_post(Some(("", b"stray bytes")), Some("en")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert!(json["reply"].as_str().unwrap().starts_with("No file received."));
    }

    #[tokio::test]
    async fn upload_without_body_returns_missing_file_reply() {
        let request = Request::builder()
            .method("POST")
            .uri("/upload_file")
            .body(Body::empty())
            .unwrap();
        let response = english_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        let reply = json["reply"].as_str().unwrap();
        assert!(reply.starts_with("No file received."));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[tokio::test]
    async fn urlencoded_upload_returns_missing_file_reply() {
        let request = Request::builder()
            .method("POST")
            .uri("/upload_file")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from("lang_code=en"))
            .unwrap();
        let response = english_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert!(json["reply"].as_str().unwrap().starts_with("No file received."));
    }

    #[tokio::test]
    async fn languages_lists_catalog_and_helpline() {
        let request = Request::builder()
            .uri("/languages")
            .body(Body::empty())
            .unwrap();
        let response = english_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let languages = json["languages"].as_array().unwrap();
        assert_eq!(languages.len(), 4);
        assert!(languages
            .iter()
            .any(|l| l["code"] == "hi" && l["name"] == "हिंदी (Hindi)"));
        assert_eq!(json["helpline"], HELPLINE);
    }

    #[tokio::test]
    async fn health_reports_ok_and_version() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = english_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::config::APP_VERSION);
    }

    #[tokio::test]
    async fn responses_are_not_cacheable() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = english_router().oneshot(request).await.unwrap();

        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/health")
            .header("Origin", "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = english_router().oneshot(request).await.unwrap();

        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let request = Request::builder()
            .uri("/nonexistent")
            .body(Body::empty())
            .unwrap();
        let response = english_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
