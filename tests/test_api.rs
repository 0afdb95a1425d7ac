//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt), so no TCP binding is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use life_mapping::context::LifeMapContext;
use life_mapping::server::create_router;
use life_mapping::types::Variant;

fn app() -> axum::Router {
    create_router(Arc::new(LifeMapContext::new(Variant::Reflective)))
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn example_scores() -> serde_json::Value {
    serde_json::json!({
        "Philosophy": 4.5,
        "Environment": 2.0,
        "Talent": 4.2,
        "Vision": 4.3,
        "Vitality": 3.8,
        "Connection": 3.0,
    })
}

// ── GET /health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200() {
    let resp = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["status"], "OK");
}

// ── GET /questionnaire ───────────────────────────────────────────────

#[tokio::test]
async fn questionnaire_default_variant() {
    let resp = app().oneshot(get("/questionnaire")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["variant"], "reflective");
    assert_eq!(json["total_questions"], 36);
    assert_eq!(json["default_answer"], 3);
    assert_eq!(json["options"].as_array().unwrap().len(), 5);
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 6);
    assert_eq!(sections[0]["category"], "Philosophy");
    assert_eq!(sections[0]["questions"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn questionnaire_extended_variant() {
    let resp = app()
        .oneshot(get("/questionnaire?variant=extended"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["total_questions"], 47);
}

#[tokio::test]
async fn questionnaire_unknown_variant() {
    let resp = app()
        .oneshot(get("/questionnaire?variant=v9"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("v9"));
}

// ── GET /archetypes ──────────────────────────────────────────────────

#[tokio::test]
async fn archetypes_per_variant() {
    let resp = app()
        .oneshot(get("/archetypes?variant=classic"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    let list = json["archetypes"].as_array().unwrap();
    assert_eq!(list.len(), 9);
    assert_eq!(list[0]["id"], "burnout_warrior");
    assert!(list[0]["question"].is_null());

    let resp = app().oneshot(get("/archetypes")).await.unwrap();
    let json = body_json(resp.into_body()).await;
    let list = json["archetypes"].as_array().unwrap();
    assert_eq!(list.len(), 13);
    assert!(list.iter().all(|a| a["question"].is_string()));
}

// ── GET /feedback ────────────────────────────────────────────────────

#[tokio::test]
async fn feedback_boundary() {
    let resp = app()
        .oneshot(get("/feedback?category=vitality&score=2.5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["level"], "M");
    assert_eq!(json["category"], "Vitality");

    let resp = app()
        .oneshot(get("/feedback?category=vitality&score=2.49"))
        .await
        .unwrap();
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["level"], "L");
}

#[tokio::test]
async fn feedback_rejects_bad_input() {
    let resp = app()
        .oneshot(get("/feedback?category=mood&score=3"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app()
        .oneshot(get("/feedback?category=talent&score=7"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── POST /aggregate ──────────────────────────────────────────────────

#[tokio::test]
async fn aggregate_mean() {
    let resp = app()
        .oneshot(post_json(
            "/aggregate",
            serde_json::json!({ "responses": [1, 2, 3, 4, 5] }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["score"].as_f64().unwrap(), 3.0);
}

#[tokio::test]
async fn aggregate_empty_is_bad_request() {
    let resp = app()
        .oneshot(post_json("/aggregate", serde_json::json!({ "responses": [] })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["error"], "response list is empty");
}

// ── POST /classify ───────────────────────────────────────────────────

#[tokio::test]
async fn classify_example_profile() {
    let resp = app()
        .oneshot(post_json(
            "/classify",
            serde_json::json!({ "variant": "extended", "scores": example_scores() }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["archetype"], "visionary_architect");
    assert_eq!(json["name"], "Type 13: Visionary Architect");
    assert_eq!(json["variant"], "extended");
    assert!(json["question"].is_null());
    assert!(json["focus"].is_null());
}

#[tokio::test]
async fn classify_reflective_includes_question() {
    let resp = app()
        .oneshot(post_json(
            "/classify",
            serde_json::json!({ "scores": example_scores() }),
        ))
        .await
        .unwrap();
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["variant"], "reflective");
    assert!(json["question"].is_string());
}

#[tokio::test]
async fn classify_missing_category() {
    let mut scores = example_scores();
    scores.as_object_mut().unwrap().remove("Vision");
    let resp = app()
        .oneshot(post_json("/classify", serde_json::json!({ "scores": scores })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("Vision"));
}

#[tokio::test]
async fn classify_duplicate_category() {
    let mut scores = example_scores();
    scores["vision"] = serde_json::json!(2.0);
    let resp = app()
        .oneshot(post_json("/classify", serde_json::json!({ "scores": scores })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["error"], "category Vision given more than once");
}

#[tokio::test]
async fn classify_out_of_range() {
    let mut scores = example_scores();
    scores["Talent"] = serde_json::json!(5.5);
    let resp = app()
        .oneshot(post_json("/classify", serde_json::json!({ "scores": scores })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── POST /diagnose ───────────────────────────────────────────────────

fn answers(per_category: usize, value: u8) -> serde_json::Value {
    let list = vec![value; per_category];
    serde_json::json!({
        "Philosophy": list,
        "Environment": list,
        "Talent": list,
        "Vision": list,
        "Vitality": list,
        "Connection": list,
    })
}

#[tokio::test]
async fn diagnose_full_report() {
    let resp = app()
        .oneshot(post_json(
            "/diagnose",
            serde_json::json!({ "name": "Taro", "answers": answers(6, 5) }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["respondent"], "Taro");
    assert_eq!(json["variant"], "reflective");
    assert_eq!(json["archetype"]["archetype"], "integrated_sovereign");
    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0]["level"], "H");
    assert_eq!(categories[0]["bar_percent"].as_f64().unwrap(), 100.0);
    assert_eq!(json["radar"]["values"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn diagnose_requires_name() {
    let resp = app()
        .oneshot(post_json(
            "/diagnose",
            serde_json::json!({ "name": "  ", "answers": answers(6, 3) }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["error"], "respondent name is required");
}

#[tokio::test]
async fn diagnose_wrong_answer_count() {
    let resp = app()
        .oneshot(post_json(
            "/diagnose",
            serde_json::json!({ "name": "Hanako", "variant": "classic", "answers": answers(6, 3) }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("expects 5 answers"));
}

#[tokio::test]
async fn diagnose_duplicate_category() {
    let mut sheet = answers(6, 3);
    sheet["TALENT"] = serde_json::json!([5, 5, 5, 5, 5, 5]);
    let resp = app()
        .oneshot(post_json(
            "/diagnose",
            serde_json::json!({ "name": "Hanako", "answers": sheet }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["error"], "category Talent given more than once");
}

#[tokio::test]
async fn diagnose_off_scale_answer() {
    let mut sheet = answers(6, 3);
    sheet["Talent"] = serde_json::json!([3, 3, 3, 0, 3, 3]);
    let resp = app()
        .oneshot(post_json(
            "/diagnose",
            serde_json::json!({ "name": "Hanako", "answers": sheet }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
