// ABOUTME: Risk assessment route handlers calling the engine in-process
// ABOUTME: Assessment creation, specialist referral suggestions and active thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Risk routes
//!
//! Bodies are decoded by hand rather than through the `Json` extractor so
//! that malformed input is reported in the same `ErrorResponse` shape as
//! every other error.

use crate::constants::routes;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::middleware::REQUEST_ID_HEADER;
use crate::models::{AnswerRecord, Condition, ConditionMap, ScoreRecord, SpecialistReferral};
use crate::server::ServerResources;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use carebridge_intelligence::config::{ClassificationTable, PopulationThresholds, ReferralConfig};
use carebridge_intelligence::{DetailedAssessment, RiskEngineConfig};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Assessment report returned to the portal
///
/// Flattens the engine's detailed assessment next to an ID and timestamp the
/// persistence and booking collaborators key on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique ID for this assessment
    pub assessment_id: Uuid,
    /// When the assessment was computed
    pub assessed_at: DateTime<Utc>,
    /// Scores, levels, confidence, recommendations and referrals
    #[serde(flatten)]
    pub result: DetailedAssessment,
}

impl AssessmentReport {
    /// Stamp a fresh ID and the current time on an assessment
    #[must_use]
    pub fn new(result: DetailedAssessment) -> Self {
        Self {
            assessment_id: Uuid::new_v4(),
            assessed_at: Utc::now(),
            result,
        }
    }
}

/// Active engine thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdsResponse {
    /// Risk level cutoffs per condition
    pub classification: ClassificationTable,
    /// Upper end of each condition's score range
    pub max_scores: ConditionMap<u32>,
    /// BMI and waist thresholds
    pub population: PopulationThresholds,
    /// Specialist referral cutoffs on the 0-10 scale
    pub referral: ReferralConfig,
}

impl ThresholdsResponse {
    /// Snapshot of an engine configuration
    #[must_use]
    pub fn from_config(config: &RiskEngineConfig) -> Self {
        Self {
            classification: config.classification,
            max_scores: ConditionMap::from_fn(Condition::max_score),
            population: config.population.clone(),
            referral: config.referral.clone(),
        }
    }
}

/// Risk routes implementation
pub struct RiskRoutes;

impl RiskRoutes {
    /// Create all risk routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::RISK_ASSESSMENTS, post(Self::handle_assess))
            .route(routes::RISK_SPECIALISTS, post(Self::handle_specialists))
            .route(routes::RISK_THRESHOLDS, get(Self::handle_thresholds))
            .with_state(resources)
    }

    /// Handle POST /api/risk/assessments
    async fn handle_assess(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, AppError> {
        let request_id = request_id(&headers);
        let answers: AnswerRecord = decode_body(body, "answer record")
            .map_err(|e| attach_request_id(e, request_id))?;
        let answers = resources
            .validator
            .validate(answers)
            .map_err(|e| attach_request_id(e, request_id))?;

        let report = AssessmentReport::new(resources.engine.assess(&answers));

        info!(
            assessment_id = %report.assessment_id,
            confidence = %report.result.assessment.confidence,
            elevated = report.result.assessment.recommendations.len(),
            "Risk assessment created"
        );

        Ok((StatusCode::OK, Json(report)).into_response())
    }

    /// Handle POST /api/risk/specialists
    async fn handle_specialists(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Bytes, BytesRejection>,
    ) -> AppResult<Json<Vec<SpecialistReferral>>> {
        let scores: ScoreRecord = decode_body(body, "score record")
            .map_err(|e| attach_request_id(e, request_id(&headers)))?;

        Ok(Json(resources.engine.recommend_specialists(&scores)))
    }

    /// Handle GET /api/risk/thresholds
    async fn handle_thresholds(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<ThresholdsResponse> {
        Json(ThresholdsResponse::from_config(resources.engine.config()))
    }
}

fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

fn attach_request_id(error: AppError, request_id: Option<&str>) -> AppError {
    match request_id {
        Some(id) => error.with_request_id(id),
        None => error,
    }
}

/// Decode a JSON body, reporting failures as `InvalidFormat`
///
/// A body cut off by the size limit is reported as `PayloadTooLarge`.
fn decode_body<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
    what: &str,
) -> AppResult<T> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::new(ErrorCode::PayloadTooLarge, rejection.body_text())
        } else {
            AppError::invalid_input(rejection.body_text())
        }
    })?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::invalid_input(format!("Request body must be a JSON {what}")));
    }
    serde_json::from_slice(&body)
        .map_err(|e| AppError::invalid_format(format!("Request body is not a valid {what}: {e}")))
}
