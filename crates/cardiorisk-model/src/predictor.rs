//! Risk prediction pipeline.
//!
//! record → BMI → 12-feature row → scaler → z = w·x + b → σ(z) → risk flag

use std::path::Path;
use serde::{Deserialize, Serialize};
use cardiorisk_common::{ArtifactLoadError, InvalidInputError};
use crate::artifacts::{load_parameters, load_scaler, ArtifactSource, FileArtifact};
use crate::bmi::BmiCategory;
use crate::features::Feature;
use crate::patient::PatientRecord;
use crate::scaler::Scaler;
use crate::scorer::{is_high_risk, sigmoid, Scorer};

/// Outcome of scoring one patient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Estimated probability of cardiovascular disease, in [0, 1]
    pub probability: f64,
    /// probability ≥ 0.5
    pub high_risk: bool,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

/// Owns the fitted scaler and scorer for the life of the process.
///
/// Both are read-only after construction, so a single predictor can be
/// shared across threads behind an `Arc` without locking.
pub struct RiskPredictor {
    scorer: Box<dyn Scorer>,
    scaler: Box<dyn Scaler>,
}

impl std::fmt::Debug for RiskPredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskPredictor").finish_non_exhaustive()
    }
}

impl RiskPredictor {
    /// Assemble a predictor from any scorer and scaler.
    pub fn new(scorer: impl Scorer + 'static, scaler: impl Scaler + 'static) -> Self {
        Self {
            scorer: Box::new(scorer),
            scaler: Box::new(scaler),
        }
    }

    /// Load weights and scaler from their artifacts. All-or-nothing.
    pub fn load(
        weights: &dyn ArtifactSource,
        scaler: &dyn ArtifactSource,
    ) -> Result<Self, ArtifactLoadError> {
        let params = load_parameters(weights)?;
        let scaler = load_scaler(scaler)?;
        Ok(Self::new(params, scaler))
    }

    pub fn from_paths(
        weights_path: impl AsRef<Path>,
        scaler_path: impl AsRef<Path>,
    ) -> Result<Self, ArtifactLoadError> {
        Self::load(
            &FileArtifact::new(weights_path.as_ref()),
            &FileArtifact::new(scaler_path.as_ref()),
        )
    }

    /// Score one patient. Pure: same record, same result, bit for bit.
    pub fn predict(&self, record: &PatientRecord) -> Result<PredictionResult, InvalidInputError> {
        let raw = record.to_features()?;
        let bmi = raw[Feature::Bmi];

        let scaled = self.scaler.transform(&raw);
        let score = self.scorer.score(&scaled);
        if score.is_nan() {
            return Err(InvalidInputError::UndefinedScore);
        }

        let probability = sigmoid(score);
        let result = PredictionResult {
            probability,
            high_risk: is_high_risk(probability),
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
        };
        tracing::debug!(
            probability = result.probability,
            high_risk = result.high_risk,
            bmi = result.bmi,
            "Scored patient record"
        );
        Ok(result)
    }
}
