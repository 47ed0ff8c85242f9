// ABOUTME: Shared fixtures for CareBridge integration tests
// ABOUTME: Builds server resources and representative questionnaire answers

use axum::Router;
use carebridge_server::config::ServerConfig;
use carebridge_server::intelligence::RiskEngine;
use carebridge_server::server::{build_router, ServerResources};
use serde_json::{json, Value};
use std::sync::Arc;

/// Resources with default configuration and lenient validation
pub fn test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(ServerConfig::default(), RiskEngine::default()))
}

/// Resources with strict validation
#[allow(dead_code)]
pub fn strict_resources() -> Arc<ServerResources> {
    let mut config = ServerConfig::default();
    config.risk.strict_validation = true;
    Arc::new(ServerResources::new(config, RiskEngine::default()))
}

/// Full middleware stack over default resources
#[allow(dead_code)]
pub fn test_router() -> Router {
    build_router(test_resources())
}

/// 60-year-old sedentary male smoker with obesity, central obesity and
/// both parents diabetic
#[allow(dead_code)]
pub fn high_risk_answers() -> Value {
    json!({
        "age": 60,
        "bmi": 29,
        "waist": "high",
        "gender": "male",
        "physical_activity": "sedentary",
        "family_diabetes": "both",
        "tobacco_use": "yes"
    })
}

/// 25-year-old active female with no risk factors
#[allow(dead_code)]
pub fn low_risk_answers() -> Value {
    json!({
        "age": 25,
        "gender": "female",
        "bmi": 21,
        "waist": 70,
        "physical_activity": "high",
        "family_diabetes": "no",
        "family_hypertension": "no",
        "family_heart": "no",
        "family_cholesterol": "no",
        "family_thyroid": "no",
        "tobacco_use": "no",
        "diet_salt": "low",
        "stress_level": "low",
        "diet_fried": "low",
        "thyroid_symptoms": "no",
        "symptom_thirst": "no",
        "symptom_urination": "no"
    })
}
