use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::advisor::SchemeAdvisor;
use crate::eligibility::{DecisionResult, DecisionSummary, Scheme, UserProfile};
use crate::explain::{Locale, NarrationOutcome, UnsupportedLocale};

pub(crate) const GENERIC_FAILURE: &str = "Recommendation failed. Please try again later.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub user_profile: UserProfile,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub structured_result: DecisionResult,
    pub summary: DecisionSummary,
    pub ai_explanation: String,
    pub explanation_status: NarrationOutcome,
    pub language: Locale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub structured_result: DecisionResult,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub ai_explanation: String,
    pub explanation_status: NarrationOutcome,
    pub language: Locale,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemeListing<'a> {
    pub count: usize,
    pub schemes: &'a [Scheme],
}

/// Request-level failure surfaced to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Invalid userProfile: {0}")]
    InvalidProfile(String),
    #[error("Invalid request: {0}")]
    InvalidPayload(String),
    #[error(transparent)]
    UnsupportedLocale(#[from] UnsupportedLocale),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match self {
            RequestError::Internal(detail) => {
                error!(%detail, "request failed");
                let body = Json(json!({ "error": GENERIC_FAILURE }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            other => {
                let body = Json(json!({ "error": other.to_string() }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

/// Absent language selects English; anything other than a supported tag is rejected.
pub fn resolve_locale(language: Option<&str>) -> Result<Locale, UnsupportedLocale> {
    match language {
        None => Ok(Locale::default()),
        Some(tag) => tag.parse(),
    }
}

/// Router builder exposing the recommendation endpoints.
pub fn advisor_router(advisor: Arc<SchemeAdvisor>) -> Router {
    Router::new()
        .route("/api/v1/recommend", post(recommend_handler))
        .route("/api/v1/explain", post(explain_handler))
        .route("/api/v1/schemes", get(schemes_handler))
        .route("/api/v1/narrator/status", get(narrator_status_handler))
        .with_state(advisor)
}

fn to_json<T: Serialize>(value: &T) -> Result<Json<serde_json::Value>, RequestError> {
    serde_json::to_value(value)
        .map(Json)
        .map_err(|err| RequestError::Internal(err.to_string()))
}

/// Only failures located inside `userProfile` are reported as profile errors.
fn recommend_rejection(rejection: JsonRejection) -> RequestError {
    let detail = rejection.body_text();
    if detail.contains("userProfile") {
        RequestError::InvalidProfile(detail)
    } else {
        RequestError::InvalidPayload(detail)
    }
}

pub(crate) async fn recommend_handler(
    State(advisor): State<Arc<SchemeAdvisor>>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, RequestError> {
    let Json(request) = payload.map_err(recommend_rejection)?;
    let locale = resolve_locale(request.language.as_deref())?;

    info!(%locale, top_n = ?request.top_n, "recommendation requested");
    let recommendation = advisor
        .recommend(&request.user_profile, locale, request.top_n)
        .await;

    to_json(&RecommendResponse {
        structured_result: recommendation.decision,
        summary: recommendation.summary,
        ai_explanation: recommendation.narrative.text,
        explanation_status: recommendation.narrative.outcome,
        language: locale,
    })
}

pub(crate) async fn explain_handler(
    State(advisor): State<Arc<SchemeAdvisor>>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, RequestError> {
    let Json(request) =
        payload.map_err(|rejection| RequestError::InvalidPayload(rejection.body_text()))?;
    let locale = resolve_locale(request.language.as_deref())?;

    info!(%locale, "re-narration requested");
    let narrative = advisor.narrate(&request.structured_result, locale).await;

    to_json(&ExplainResponse {
        ai_explanation: narrative.text,
        explanation_status: narrative.outcome,
        language: locale,
    })
}

pub(crate) async fn schemes_handler(
    State(advisor): State<Arc<SchemeAdvisor>>,
) -> Result<Json<serde_json::Value>, RequestError> {
    let catalog = advisor.catalog();
    to_json(&SchemeListing {
        count: catalog.len(),
        schemes: catalog.schemes(),
    })
}

pub(crate) async fn narrator_status_handler(
    State(advisor): State<Arc<SchemeAdvisor>>,
) -> Response {
    let status = advisor.narrator_status().await;
    (StatusCode::OK, Json(status)).into_response()
}
