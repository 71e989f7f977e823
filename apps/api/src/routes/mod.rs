pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/language/detect",
            post(handlers::handle_detect_language),
        )
        .route(
            "/api/v1/keywords/extract",
            post(handlers::handle_extract_keywords),
        )
        .route("/api/v1/ats/score", post(handlers::handle_score))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/feedback", post(handlers::handle_feedback))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Json;
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use crate::analysis::Analyzer;
    use crate::config::Config;
    use crate::feedback::FeedbackClient;
    use crate::keywords::lexical::{LexicalConfig, LexicalExtractor};
    use crate::language::LanguageDetector;
    use crate::scoring::embedder::HashEmbedder;
    use crate::scoring::AtsScorer;
    use crate::skills::pipeline::PipelineRegistry;
    use crate::skills::SkillExtractor;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// API server whose feedback client talks to a stub generation service.
    async fn spawn_api() -> String {
        let generator = Router::new().route(
            "/api/generate",
            post(|| async { Json(json!({ "response": "- Quantify your impact" })) }),
        );
        let generator_url = serve(generator).await;

        let config = Config::from_lookup(|_| None).unwrap();
        let analyzer = Analyzer::new(
            LanguageDetector::new(),
            LexicalExtractor::new(LexicalConfig::default()),
            SkillExtractor::new(Arc::new(PipelineRegistry::builtin())),
            AtsScorer::new(Arc::new(HashEmbedder::default())),
        );
        let state = AppState {
            analyzer: Arc::new(analyzer),
            feedback: FeedbackClient::new(&generator_url, "mistral", Duration::from_secs(5))
                .unwrap(),
            config,
        };

        serve(build_router(state)).await
    }

    async fn post_json(url: String, body: Value) -> (StatusCode, Value) {
        let response = reqwest::Client::new()
            .post(url)
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn_api().await;
        let body: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_detect_language() {
        let base = spawn_api().await;
        let (status, body) = post_json(
            format!("{base}/api/v1/language/detect"),
            json!({ "text": "Erfahrener Softwareentwickler mit Kenntnissen in der Entwicklung \
                von Webanwendungen und mehrjähriger Erfahrung in der Leitung von Projekten." }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "de");
        assert!(body["fallback_reason"].is_null());

        let (_, body) = post_json(format!("{base}/api/v1/language/detect"), json!({ "text": "" })).await;
        assert_eq!(body["language"], "en");
        assert!(body["fallback_reason"].is_string());
    }

    #[tokio::test]
    async fn test_extract_keywords() {
        let base = spawn_api().await;
        let (status, body) = post_json(
            format!("{base}/api/v1/keywords/extract"),
            json!({
                "text": "Backend engineer building Python services with Docker and Kubernetes.",
                "top_k": 5
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "en");
        assert!(body["keywords"].as_array().unwrap().len() <= 5);
        assert!(body["skills"]
            .as_array()
            .unwrap()
            .iter()
            .any(|k| k["text"] == "docker"));
        assert_eq!(body["attempts"][0]["strategy"], "annotator");
    }

    #[tokio::test]
    async fn test_extract_rejects_bad_params() {
        let base = spawn_api().await;
        let (status, body) = post_json(
            format!("{base}/api/v1/keywords/extract"),
            json!({ "text": "Rust", "top_k": 0 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = post_json(
            format!("{base}/api/v1/keywords/extract"),
            json!({ "text": "Python", "top_k": u64::MAX }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = post_json(
            format!("{base}/api/v1/keywords/extract"),
            json!({ "text": "Rust", "lang": "fr" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_json(format!("{base}/api/v1/keywords/extract"), json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_score() {
        let base = spawn_api().await;
        let (status, body) = post_json(
            format!("{base}/api/v1/ats/score"),
            json!({
                "resume_text": "I have experience with Python and Docker.",
                "keywords": ["python", "docker", "kubernetes"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"]["keyword_score"], 66.67);
        assert_eq!(body["report"]["matched_keywords"], json!(["docker", "python"]));
        assert_eq!(body["coverage"]["missing"], json!(["kubernetes"]));
    }

    #[tokio::test]
    async fn test_analyze_requires_a_target() {
        let base = spawn_api().await;
        let (status, body) = post_json(
            format!("{base}/api/v1/analyze"),
            json!({ "resume_text": "Rust engineer" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_with_keywords_and_feedback() {
        let base = spawn_api().await;
        let (status, body) = post_json(
            format!("{base}/api/v1/analyze"),
            json!({
                "resume_text": "I have experience with Python and Docker.",
                "keywords": ["Python", "Kubernetes"],
                "include_feedback": true
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "en");
        assert_eq!(body["target_keywords"], json!(["kubernetes", "python"]));
        assert_eq!(body["report"]["keyword_score"], 50.0);
        assert_eq!(body["feedback"], "- Quantify your impact");
    }

    #[tokio::test]
    async fn test_analyze_empty_resume_warns() {
        let base = spawn_api().await;
        let (status, body) = post_json(
            format!("{base}/api/v1/analyze"),
            json!({ "resume_text": "", "job_description": "Python developer wanted." }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"]["final_score"], 0.0);
        assert!(body["feedback"].is_null());
        assert!(!body["warnings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feedback() {
        let base = spawn_api().await;
        let (status, body) = post_json(
            format!("{base}/api/v1/feedback"),
            json!({ "resume_text": "Rust engineer" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feedback"], "- Quantify your impact");
        assert_eq!(body["model"], "mistral");
    }
}
