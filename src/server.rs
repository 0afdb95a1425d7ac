//! Axum HTTP server: stateless endpoints for the Life Mapping front end.
//!
//! Every endpoint is a pure function of its request and the shared
//! `LifeMapContext` (rule tables per variant). Nothing is stored between
//! requests.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/questionnaire` | Questions per category + Likert labels |
//! | GET | `/archetypes` | Archetypes a variant can produce |
//! | GET | `/feedback` | Level tag + feedback for one category score |
//! | POST | `/aggregate` | Mean of one category's answers |
//! | POST | `/classify` | Archetype for six category scores |
//! | POST | `/diagnose` | Full report for a named answer sheet |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::context::LifeMapContext;
use crate::error::InvalidInput;
use crate::feedback::feedback_for_score;
use crate::questions::questionnaire;
use crate::report::diagnose;
use crate::scoring::aggregate;
use crate::types::{Category, CategoryScores};

pub type AppState = Arc<LifeMapContext>;

type ApiResult = Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)>;

pub fn create_router(ctx: Arc<LifeMapContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/questionnaire", get(handle_get_questionnaire))
        .route("/archetypes", get(handle_get_archetypes))
        .route("/feedback", get(handle_get_feedback))
        .route("/aggregate", post(handle_aggregate))
        .route("/classify", post(handle_classify))
        .route("/diagnose", post(handle_diagnose))
        .layer(cors)
        .with_state(ctx)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct VariantQuery {
    variant: Option<String>,
}

#[derive(Deserialize)]
struct FeedbackQuery {
    category: String,
    score: f64,
}

#[derive(Deserialize)]
struct AggregateRequest {
    responses: Vec<u8>,
}

#[derive(Deserialize)]
struct ClassifyRequest {
    variant: Option<String>,
    scores: BTreeMap<String, f64>,
}

#[derive(Deserialize)]
struct DiagnoseRequest {
    name: String,
    variant: Option<String>,
    answers: BTreeMap<String, Vec<u8>>,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

fn bad_request(err: InvalidInput) -> (StatusCode, Json<serde_json::Value>) {
    tracing::info!(error = %err, "rejected request");
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> ApiResult {
    serde_json::to_value(value).map(Json).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize response");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "serialization failed")
    })
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_questionnaire(
    State(ctx): State<AppState>,
    Query(params): Query<VariantQuery>,
) -> ApiResult {
    let variant = ctx
        .resolve_variant(params.variant.as_deref())
        .map_err(bad_request)?;
    to_json(&questionnaire(variant))
}

async fn handle_get_archetypes(
    State(ctx): State<AppState>,
    Query(params): Query<VariantQuery>,
) -> ApiResult {
    let variant = ctx
        .resolve_variant(params.variant.as_deref())
        .map_err(bad_request)?;
    let table = ctx.table(variant);
    let archetypes: Vec<serde_json::Value> = table
        .archetypes()
        .into_iter()
        .map(|id| {
            let profile = id.profile();
            serde_json::json!({
                "id": id,
                "type_number": profile.type_number,
                "name": profile.display_name(),
                "description": profile.description,
                "icon": profile.icon,
                "question": table.reflections.then_some(profile.reflection),
            })
        })
        .collect();
    Ok(Json(serde_json::json!({
        "variant": variant,
        "table": table.name,
        "archetypes": archetypes,
    })))
}

async fn handle_get_feedback(Query(params): Query<FeedbackQuery>) -> ApiResult {
    let category: Category = params.category.parse().map_err(bad_request)?;
    if !crate::constants::is_valid_score(params.score) {
        return Err(bad_request(InvalidInput::ScoreOutOfRange {
            category,
            score: params.score,
        }));
    }
    let (level, cell) = feedback_for_score(category, params.score);
    Ok(Json(serde_json::json!({
        "category": category,
        "score": params.score,
        "level": level,
        "tag": cell.tag,
        "feedback": cell.text,
    })))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_aggregate(Json(req): Json<AggregateRequest>) -> ApiResult {
    let score = aggregate(&req.responses).map_err(bad_request)?;
    Ok(Json(serde_json::json!({ "score": score })))
}

async fn handle_classify(
    State(ctx): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> ApiResult {
    let variant = ctx
        .resolve_variant(req.variant.as_deref())
        .map_err(bad_request)?;
    let scores = CategoryScores::from_named(&req.scores).map_err(bad_request)?;
    let result = ctx.table(variant).classify(&scores);
    tracing::info!(variant = %variant, archetype = %result.archetype, "classify");
    let mut json = to_json(&result)?;
    json.0["variant"] = serde_json::json!(variant);
    Ok(json)
}

async fn handle_diagnose(
    State(ctx): State<AppState>,
    Json(req): Json<DiagnoseRequest>,
) -> ApiResult {
    let variant = ctx
        .resolve_variant(req.variant.as_deref())
        .map_err(bad_request)?;
    let report =
        diagnose(&req.name, variant, ctx.table(variant), &req.answers).map_err(bad_request)?;
    tracing::info!(
        variant = %variant,
        archetype = %report.archetype.archetype,
        "diagnose"
    );
    to_json(&report)
}
