//! Model layout introspection.

use axum::Json;
use serde::Serialize;
use cardiorisk_model::features::{Feature, FEATURE_ORDER, SCALED_FEATURES};
use cardiorisk_model::scorer::HIGH_RISK_THRESHOLD;

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub feature_order: Vec<Feature>,
    pub scaled_features: Vec<Feature>,
    pub high_risk_threshold: f64,
}

/// GET /api/model — Feature layout and decision threshold
pub async fn api_model_info() -> Json<ModelInfo> {
    Json(ModelInfo {
        feature_order: FEATURE_ORDER.to_vec(),
        scaled_features: SCALED_FEATURES.to_vec(),
        high_risk_threshold: HIGH_RISK_THRESHOLD,
    })
}
