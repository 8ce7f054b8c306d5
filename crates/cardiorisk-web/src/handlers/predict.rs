//! Risk prediction API — scores one intake form submission.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use cardiorisk_common::ApiError;
use cardiorisk_model::{PatientRecord, PredictionResult, RiskSummary};
use crate::state::SharedState;

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub assessment_id: Uuid,
    pub assessed_at: DateTime<Utc>,
    pub result: PredictionResult,
    pub summary: RiskSummary,
}

/// POST /api/predict — Score a patient record
pub async fn api_predict(
    State(state): State<SharedState>,
    payload: Result<Json<PatientRecord>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(record) = payload?;
    if let Some(limits) = &state.form_limits {
        limits.check(&record)?;
    }

    let result = state.predictor.predict(&record)?;
    let response = PredictResponse {
        assessment_id: Uuid::new_v4(),
        assessed_at: Utc::now(),
        summary: RiskSummary::from_result(&result),
        result,
    };
    tracing::info!(
        assessment_id = %response.assessment_id,
        high_risk = result.high_risk,
        "Risk assessment completed"
    );
    Ok(Json(response))
}
