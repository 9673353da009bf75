//! Tests for the `generateContent` backend against a mock server.

mod helpers;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{domain_document, gemini_answer, keyword_document, mock_config};
use seo_insight::error_handling::ValidationReason;
use seo_insight::{AnalysisBackend, AnalysisError, GeminiClient, Region};

const ENDPOINT: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

async fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::from_config(&mock_config(&server.uri()))
        .await
        .expect("client builds")
}

async fn answer_with(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1, "exactly one backend call");
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}

#[tokio::test]
async fn test_keyword_request_shape_and_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_answer(&keyword_document("coffee maker").to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let analysis = client_for(&server)
        .await
        .analyze_keyword("  coffee maker ", Region::Mx)
        .await
        .unwrap();

    assert_eq!(analysis.main_keyword.keyword, "coffee maker");
    assert_eq!(analysis.main_keyword.volume, 12100);
    assert_eq!(analysis.main_keyword.trend.len(), 12);
    assert_eq!(analysis.variations.len(), 2);
    assert_eq!(analysis.serp[0].authority, 71);

    let body = request_body(&server).await;
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("\"coffee maker\""));
    assert!(prompt.contains("México (MX) market"));
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(body["tools"], json!([{"googleSearch": {}}]));

    let schema = &body["generationConfig"]["responseSchema"];
    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(
        schema["required"],
        json!(["mainKeyword", "variations", "questions", "related", "serp"])
    );
    assert_eq!(
        schema["properties"]["mainKeyword"]["required"],
        json!(["keyword", "volume", "difficulty", "cpc", "intent", "trend"])
    );
    assert_eq!(schema["properties"]["serp"]["type"], "ARRAY");
}

#[tokio::test]
async fn test_domain_request_uses_domain_schema() {
    let server = MockServer::start().await;
    let fenced = format!("```json\n{}\n```", domain_document("apple.com"));
    answer_with(&server, gemini_answer(&fenced)).await;

    let analysis = client_for(&server)
        .await
        .analyze_domain("apple.com", Region::Uk)
        .await
        .unwrap();

    assert_eq!(analysis.domain, "apple.com");
    assert_eq!(analysis.authority_score, 87);
    assert_eq!(analysis.top_keywords[0].position, 1);
    assert_eq!(analysis.main_competitors[0].common_keywords, 5400);

    let body = request_body(&server).await;
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Domain Overview analysis for \"apple.com\""));
    assert!(prompt.contains("United Kingdom (UK) market"));
    let required = body["generationConfig"]["responseSchema"]["required"]
        .as_array()
        .unwrap();
    assert!(required.contains(&json!("authorityScore")));
    assert!(!required.contains(&json!("displayAds")));
}

#[tokio::test]
async fn test_quota_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .analyze_keyword("seo", Region::Us)
        .await
        .unwrap_err();

    match &err {
        AnalysisError::Status { status, message } => {
            assert_eq!(*status, 429);
            assert!(message.contains("Resource has been exhausted"));
            assert!(message.contains("RESOURCE_EXHAUSTED"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .analyze_domain("apple.com", Region::Us)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Status { status: 503, ref message } if message == "upstream unavailable"
    ));
}

#[tokio::test]
async fn test_empty_candidates_and_blocked_prompts() {
    let server = MockServer::start().await;
    answer_with(&server, json!({"candidates": []})).await;
    let err = client_for(&server)
        .await
        .analyze_keyword("seo", Region::Us)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyResponse));

    let blocked = MockServer::start().await;
    answer_with(
        &blocked,
        json!({"promptFeedback": {"blockReason": "SAFETY"}}),
    )
    .await;
    let err = client_for(&blocked)
        .await
        .analyze_keyword("seo", Region::Us)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Blocked(ref reason) if reason == "SAFETY"));
}

#[tokio::test]
async fn test_invalid_json_answer() {
    let server = MockServer::start().await;
    answer_with(&server, gemini_answer("Sorry, I cannot help with that.")).await;
    let err = client_for(&server)
        .await
        .analyze_keyword("seo", Region::Us)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedJson(_)));
}

#[tokio::test]
async fn test_missing_required_field_reports_path() {
    let server = MockServer::start().await;
    let mut document = domain_document("apple.com");
    document.as_object_mut().unwrap().remove("authorityScore");
    answer_with(&server, gemini_answer(&document.to_string())).await;

    let err = client_for(&server)
        .await
        .analyze_domain("apple.com", Region::Us)
        .await
        .unwrap_err();
    match err {
        AnalysisError::Validation(validation) => {
            assert_eq!(validation.path, "authorityScore");
            assert_eq!(validation.reason, ValidationReason::Missing);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_required_lists_become_empty() {
    let server = MockServer::start().await;
    let document = json!({
        "mainKeyword": keyword_document("seo")["mainKeyword"].clone(),
        "variations": null
    });
    answer_with(&server, gemini_answer(&document.to_string())).await;

    let analysis = client_for(&server)
        .await
        .analyze_keyword("seo", Region::Us)
        .await
        .unwrap();
    assert!(analysis.variations.is_empty());
    assert!(analysis.questions.is_empty());
    assert!(analysis.related.is_empty());
    assert!(analysis.serp.is_empty());
}

#[tokio::test]
async fn test_mistyped_list_is_rejected() {
    let server = MockServer::start().await;
    let mut document = keyword_document("seo");
    document["serp"] = json!("none");
    answer_with(&server, gemini_answer(&document.to_string())).await;

    let err = client_for(&server)
        .await
        .analyze_keyword("seo", Region::Us)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("serp"));
}

#[tokio::test]
async fn test_blank_input_never_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .analyze_domain("   ", Region::Us)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput(_)));
}
