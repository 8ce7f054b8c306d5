//! Feature standardization.
//!
//! Only the six numerical columns are scaled: x' = (x − mean) / scale.
//! Categorical and binary columns pass through untouched.

use serde::{Deserialize, Serialize};
use crate::features::{Feature, FeatureVector, SCALED_FEATURES, SCALED_FEATURE_COUNT};

/// Transforms a raw feature row into the space the model was fitted in.
///
/// Implementations:
/// - `StandardScaler` (fitted mean/scale loaded from an artifact)
/// - `IdentityScaler` (tests, or models trained on raw features)
pub trait Scaler: Send + Sync {
    fn transform(&self, row: &FeatureVector) -> FeatureVector;
}

/// Fitted parameters for one numerical column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleParams {
    pub mean: f64,
    pub scale: f64,
}

impl ScaleParams {
    pub fn apply(&self, value: f64) -> f64 {
        (value - self.mean) / self.scale
    }
}

/// Per-feature standardization for exactly the six `SCALED_FEATURES`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    /// Indexed like `SCALED_FEATURES`.
    params: [ScaleParams; SCALED_FEATURE_COUNT],
}

impl StandardScaler {
    /// Build from named columns, as a fitted scaler exports them.
    /// Columns may come in any order but must cover each numerical feature
    /// exactly once.
    pub fn from_columns(names: &[String], mean: &[f64], scale: &[f64]) -> Result<Self, String> {
        if names.len() != SCALED_FEATURE_COUNT {
            return Err(format!(
                "expected {} scaled features, found {}",
                SCALED_FEATURE_COUNT,
                names.len()
            ));
        }
        if mean.len() != names.len() || scale.len() != names.len() {
            return Err(format!(
                "{} feature names but {} means and {} scales",
                names.len(),
                mean.len(),
                scale.len()
            ));
        }

        let mut slots: [Option<ScaleParams>; SCALED_FEATURE_COUNT] = [None; SCALED_FEATURE_COUNT];
        for ((name, &m), &s) in names.iter().zip(mean).zip(scale) {
            let feature: Feature = name.parse()?;
            let slot = SCALED_FEATURES
                .iter()
                .position(|f| *f == feature)
                .ok_or_else(|| format!("feature '{name}' is categorical and must not be scaled"))?;
            if slots[slot].is_some() {
                return Err(format!("feature '{name}' appears more than once"));
            }
            if !m.is_finite() {
                return Err(format!("mean for '{name}' is not finite ({m})"));
            }
            if !s.is_finite() || s == 0.0 {
                return Err(format!("scale for '{name}' must be finite and non-zero ({s})"));
            }
            slots[slot] = Some(ScaleParams { mean: m, scale: s });
        }

        // Six distinct names drawn from six slots leave no slot empty.
        let mut params = [ScaleParams { mean: 0.0, scale: 1.0 }; SCALED_FEATURE_COUNT];
        for (i, slot) in slots.iter().enumerate() {
            params[i] = slot.ok_or_else(|| format!("missing scaler entry for '{}'", SCALED_FEATURES[i]))?;
        }
        Ok(Self { params })
    }

    /// Fitted parameters for `feature`, or None for pass-through columns.
    pub fn params_for(&self, feature: Feature) -> Option<ScaleParams> {
        SCALED_FEATURES
            .iter()
            .position(|f| *f == feature)
            .map(|i| self.params[i])
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, row: &FeatureVector) -> FeatureVector {
        let mut out = *row;
        for (feature, params) in SCALED_FEATURES.iter().zip(self.params.iter()) {
            out[*feature] = params.apply(row[*feature]);
        }
        out
    }
}

/// Leaves every column unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScaler;

impl Scaler for IdentityScaler {
    fn transform(&self, row: &FeatureVector) -> FeatureVector {
        *row
    }
}
