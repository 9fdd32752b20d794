//! Router assembly: HTTP endpoints, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - the tutoring endpoint at `/api/chat`
/// - REST-ish auxiliary API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS (allow any origin/method/headers) – adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        // Tutoring
        .route("/api/chat", post(http::http_post_chat))
        // Auxiliary API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/quiz", get(http::http_get_quiz))
        .route("/api/v1/quiz/result", post(http::http_post_quiz_result))
        .route("/api/v1/learning-style/questions", get(http::http_get_style_questions))
        .route("/api/v1/learning-style/result", post(http::http_post_style_result))
        .route("/api/v1/profile", get(http::http_get_profile))
        .route("/api/v1/progress", get(http::http_get_progress))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(AppState::for_tests()))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn chat_payload(contents: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "messages": contents
                .iter()
                .map(|c| serde_json::json!({"role": "user", "content": c}))
                .collect::<Vec<_>>(),
        })
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = app()
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, serde_json::json!({"ok": true}));
    }

    #[tokio::test]
    async fn empty_message_list_yields_500_error_payload() {
        let res = app()
            .oneshot(post_json("/api/chat", serde_json::json!({"messages": []})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_body_yields_500_not_a_crash() {
        let res = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn first_turn_returns_profiling_prompt() {
        let res = app()
            .oneshot(post_json("/api/chat", chat_payload(&["explain photosynthesis"])))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("How much time can you spend learning per day?"));
        assert_eq!(body["metadata"]["messageCount"], 1);
        assert_eq!(body["metadata"]["level"], "beginner");
    }

    #[tokio::test]
    async fn even_turn_appends_cycled_validation_question() {
        let payload = chat_payload(&["hi", "ok", "sure", "explain photosynthesis please"]);
        let res = app().oneshot(post_json("/api/chat", payload)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        // count=4 → intermediate, even → validation index floor(4/3) % 3 = 1
        assert_eq!(body["metadata"]["topic"], "photosynthesis");
        assert_eq!(body["metadata"]["level"], "intermediate");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .ends_with("Why do plants need both light and darkness for photosynthesis?"));
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_metadata() {
        let payload = chat_payload(&["a", "b", "c", "d", "solve this equation"]);
        let first = body_json(
            app().oneshot(post_json("/api/chat", payload.clone())).await.unwrap(),
        )
        .await;
        let second =
            body_json(app().oneshot(post_json("/api/chat", payload)).await.unwrap()).await;
        assert_eq!(first["metadata"], second["metadata"]);
        assert_eq!(first["message"], second["message"]);
    }

    #[tokio::test]
    async fn quiz_endpoint_filters_by_difficulty() {
        let res = app()
            .oneshot(
                Request::get("/api/v1/quiz?topic=math&difficulty=easy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["topic"], "math");
        for q in body["questions"].as_array().unwrap() {
            assert_eq!(q["difficulty"], "easy");
        }
    }

    #[tokio::test]
    async fn quiz_result_round_trip_updates_progress() {
        let state = Arc::new(AppState::for_tests());
        let app = build_router(state.clone());

        let res = app
            .clone()
            .oneshot(post_json(
                "/api/v1/quiz/result",
                serde_json::json!({"topic": "math", "difficulty": "easy", "answers": [0, 0]}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["score"], 100);

        let res = app
            .oneshot(Request::get("/api/v1/progress").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(res).await;
        let skills = body["skills"].as_array().unwrap();
        assert!(skills.iter().any(|s| s["topic"] == "math"));
    }

    #[tokio::test]
    async fn style_questionnaire_round_trip() {
        let app = app();
        let res = app
            .clone()
            .oneshot(
                Request::get("/api/v1/learning-style/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(res).await;
        assert_eq!(body["questions"].as_array().unwrap().len(), 5);

        let res = app
            .oneshot(post_json(
                "/api/v1/learning-style/result",
                serde_json::json!({"answers": [3, 3, 3, 3, 3]}),
            ))
            .await
            .unwrap();
        let body = body_json(res).await;
        assert_eq!(body["style"], "kinesthetic");
        assert_eq!(body["scores"]["kinesthetic"], 5);
        assert!(!body["tips"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn profile_reads_with_defaults() {
        let res = app()
            .oneshot(Request::get("/api/v1/profile").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["name"], "Student");
        assert_eq!(body["learningStyle"], "unknown");
    }
}
