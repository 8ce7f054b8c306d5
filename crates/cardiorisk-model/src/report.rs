//! Display-ready summary of a prediction.

use serde::{Deserialize, Serialize};
use crate::bmi::{BmiCategory, BmiTone};
use crate::predictor::PredictionResult;

pub const DISCLAIMER: &str = "This tool provides a risk assessment based on a statistical model and \
    should not replace professional medical advice, diagnosis, or treatment. Always consult a \
    qualified healthcare provider for medical decisions.";

const HIGH_RISK_GUIDANCE: &str = "This assessment indicates elevated cardiovascular risk. Please \
    consult a healthcare professional for a comprehensive evaluation and a personalised treatment plan.";

const LOW_RISK_GUIDANCE: &str = "Your cardiovascular risk appears to be low. Keep up a healthy \
    lifestyle with regular exercise and balanced nutrition.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Probability × 100, one decimal
    pub probability_pct: f64,
    pub risk_label: String,
    pub guidance: String,
    /// BMI, one decimal
    pub bmi_rounded: f64,
    pub bmi_category: BmiCategory,
    pub bmi_tone: BmiTone,
    pub disclaimer: String,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl RiskSummary {
    pub fn from_result(result: &PredictionResult) -> Self {
        let (label, guidance) = if result.high_risk {
            ("High Risk", HIGH_RISK_GUIDANCE)
        } else {
            ("Low Risk", LOW_RISK_GUIDANCE)
        };
        Self {
            probability_pct: round1(result.probability * 100.0),
            risk_label: label.to_string(),
            guidance: guidance.to_string(),
            bmi_rounded: round1(result.bmi),
            bmi_category: result.bmi_category,
            bmi_tone: result.bmi_category.tone(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
