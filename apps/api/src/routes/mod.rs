pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::careers::handlers as careers;
use crate::market::handlers as market;
use crate::personality::handlers as personality;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career matching
        .route("/predict-career", post(careers::handle_predict_career))
        .route("/career-path", post(careers::handle_career_path))
        .route("/career-prediction", post(careers::handle_career_prediction))
        .route(
            "/personality-assessment",
            post(personality::handle_personality_assessment),
        )
        // Market data
        .route("/skills-analysis", post(market::handle_skills_analysis))
        .route("/job-market", get(market::handle_job_market))
        .route("/job-trends", get(market::handle_job_trends))
        .route("/learning-resources", get(market::handle_learning_resources))
        .route("/ai/insights", get(market::handle_insights))
        // Assistant
        .route("/ai/chat", post(assistant::handle_chat))
        .route("/ai-data-mining", post(assistant::handle_data_mining))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    use super::*;
    use crate::catalog::Catalogs;
    use crate::config::Config;
    use crate::errors::panic_response;
    use crate::llm_client::UnconfiguredGenerator;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                anthropic_api_key: None,
                llm_timeout: Duration::from_secs(1),
                mock_data_seed: Some(7),
                usd_to_inr_rate: 83.0,
            },
            catalogs: Arc::new(Catalogs::load().unwrap()),
            llm: Arc::new(UnconfiguredGenerator),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn get_uri(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_uri("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "career-api");
    }

    #[tokio::test]
    async fn test_predict_career_ranks_software_developer_first() {
        let (status, body) = post_json(
            "/predict-career",
            json!({
                "interests": ["technology"],
                "skills": ["javascript", "html"],
                "education": "Computer Science"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"][0]["title"], "Software Developer");
        assert!(body["recommendations"].as_array().unwrap().len() <= 3);
        assert!(body["skillGaps"].is_array());
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_predict_career_missing_field_is_400() {
        let (status, body) = post_json(
            "/predict-career",
            json!({ "interests": ["technology"], "skills": [] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["error"].as_str().unwrap().contains("education"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (status, body) = send(
            Request::builder()
                .method(Method::POST)
                .uri("/career-path")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"interests\": ["))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_personality_all_fives() {
        let answers: Vec<Value> = (1..=10)
            .map(|i| json!({ "questionId": format!("q{i}"), "value": 5 }))
            .collect();
        let (status, body) =
            post_json("/personality-assessment", json!({ "answers": answers })).await;
        assert_eq!(status, StatusCode::OK);
        for dimension in body["dimensions"].as_array().unwrap() {
            assert_eq!(dimension["score"], 60);
        }
        assert_eq!(body["primaryTrait"], "Analytical");
        assert_eq!(body["secondaryTrait"], "Creative");
    }

    #[tokio::test]
    async fn test_personality_out_of_range_answer_is_400() {
        let (status, _) = post_json(
            "/personality-assessment",
            json!({ "answers": [{ "questionId": "q1", "value": 9 }] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_learning_resources_requires_skill() {
        let (status, _) = get_uri("/learning-resources?level=beginner").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get_uri("/learning-resources?skill=Rust").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["level"], "beginner");
        assert_eq!(body["recommendedPath"]["steps"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_400() {
        let (status, body) = get_uri("/learning-resources?skill=a&skill=b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["error"].as_str().unwrap().contains("skill"));
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_json_500() {
        let app = Router::new()
            .route("/boom", get(|| async {
                panic!("boom");
                #[allow(unreachable_code)]
                ()
            }))
            .layer(CatchPanicLayer::custom(panic_response));
        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"], "An internal server error occurred");
    }

    #[tokio::test]
    async fn test_seeded_learning_resources_repeat() {
        let (_, a) = get_uri("/learning-resources?skill=SQL").await;
        let (_, b) = get_uri("/learning-resources?skill=SQL").await;
        assert_eq!(a["resources"], b["resources"]);
    }

    #[tokio::test]
    async fn test_job_market_india_prefix() {
        let (status, body) = get_uri("/job-market?industry=indian-technology").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["region"], "India");
        assert_eq!(body["currency"], "INR (₹)");
    }

    #[tokio::test]
    async fn test_chat_without_key_uses_fallback() {
        let (status, body) =
            post_json("/ai/chat", json!({ "message": "Data science salaries?" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert!(body["reply"].as_str().unwrap().contains("35%"));
    }

    #[tokio::test]
    async fn test_data_mining_without_key_uses_fallback() {
        let (status, body) = post_json(
            "/ai-data-mining",
            json!({ "query": "nurse", "sector": "healthcare" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["insights"]["demandLevel"], "Medium");
        assert_eq!(body["marketData"]["sector"], "healthcare");
        assert_eq!(body["marketData"]["country"], "India");

        let (status, _) = post_json("/ai-data-mining", json!({ "query": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
