//! Shared application state for the web server.

use std::sync::Arc;
use cardiorisk_common::ArtifactLoadError;
use cardiorisk_model::{FormLimits, RiskPredictor};
use crate::config::Config;

/// Shared state injected into every Axum handler.
pub struct AppState {
    /// Loaded once at startup, read-only afterwards
    pub predictor: RiskPredictor,
    /// Intake form ranges; None disables the check
    pub form_limits: Option<FormLimits>,
}

impl AppState {
    pub fn new(predictor: RiskPredictor, form_limits: Option<FormLimits>) -> Self {
        Self { predictor, form_limits }
    }

    /// Load the model artifacts named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, ArtifactLoadError> {
        let predictor = RiskPredictor::from_paths(
            &config.artifacts.weights_path,
            &config.artifacts.scaler_path,
        )?;
        let form_limits = config
            .validation
            .enforce_form_limits
            .then(FormLimits::default);
        Ok(Self::new(predictor, form_limits))
    }
}

pub type SharedState = Arc<AppState>;
