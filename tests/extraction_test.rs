//! Extraction endpoint tests: validation short-circuit, the mocked rule
//! table, and the retriable service-failure path.

use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;

use bindline::extraction::{BusinessExtractor, ExtractError, ExtractionResult, MockExtractor};
use bindline::handlers;

/// An extractor that is always down, for the 502 path.
struct DownExtractor;

#[async_trait]
impl BusinessExtractor for DownExtractor {
    async fn extract(&self, _website: &str) -> Result<ExtractionResult, ExtractError> {
        Err(ExtractError::Unavailable("connection reset".to_string()))
    }
}

macro_rules! extract_app {
    ($extractor:expr) => {{
        let data: web::Data<dyn BusinessExtractor> = web::Data::from($extractor);
        test::init_service(
            App::new()
                .app_data(data)
                .route("/api/extract", web::post().to(handlers::extraction_handlers::extract)),
        )
        .await
    }};
}

fn mock() -> Arc<dyn BusinessExtractor> {
    Arc::new(MockExtractor::new(Duration::ZERO))
}

#[actix_rt::test]
async fn tech_url_extracts_technology_services() {
    let app = extract_app!(mock());

    let req = test::TestRequest::post()
        .uri("/api/extract")
        .set_json(serde_json::json!({ "website": "https://mytechstartup.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["businessCategory"], "Technology Services");
    assert_eq!(body["naicsCode"], "541511");
    assert_eq!(body["businessName"], "Mytechstartup");
    assert!(body["estimatedEmployees"].as_str().unwrap().contains('-'));
}

#[actix_rt::test]
async fn unmatched_url_gets_the_professional_services_fallback() {
    let app = extract_app!(mock());

    let req = test::TestRequest::post()
        .uri("/api/extract")
        .set_json(serde_json::json!({ "website": "https://greenfield-consulting.com" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["businessCategory"], "Professional Services");
    assert_eq!(body["naicsCode"], "541990");
}

#[actix_rt::test]
async fn malformed_url_is_rejected_before_extraction() {
    let app = extract_app!(mock());

    for bad in ["not a url", "", "https://", "   "] {
        let req = test::TestRequest::post()
            .uri("/api/extract")
            .set_json(serde_json::json!({ "website": bad }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "input: {bad:?}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["field"], "website");
        assert!(body["error"].as_str().unwrap().contains("valid URL"));
    }
}

#[actix_rt::test]
async fn service_failure_surfaces_as_retriable_bad_gateway() {
    let app = extract_app!(Arc::new(DownExtractor) as Arc<dyn BusinessExtractor>);

    let req = test::TestRequest::post()
        .uri("/api/extract")
        .set_json(serde_json::json!({ "website": "https://example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("try again"));
}
