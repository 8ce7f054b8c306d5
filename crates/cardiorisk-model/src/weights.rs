//! Trained logistic-regression parameters.

use serde::{Deserialize, Serialize};
use crate::features::{Feature, FeatureVector, FEATURE_COUNT, FEATURE_ORDER};

/// The 12-component weight vector W plus bias b.
/// Weights are stored in `FEATURE_ORDER`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    weights: [f64; FEATURE_COUNT],
    bias: f64,
}

impl ModelParameters {
    pub fn new(weights: [f64; FEATURE_COUNT], bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Build from an untyped weight list, checking the 12-weight contract.
    pub fn from_slice(weights: &[f64], bias: f64) -> Result<Self, String> {
        let weights: [f64; FEATURE_COUNT] = weights.try_into().map_err(|_| {
            format!("expected {} weights, found {}", FEATURE_COUNT, weights.len())
        })?;
        let params = Self { weights, bias };
        params.validate()?;
        Ok(params)
    }

    /// Every weight and the bias must be finite.
    pub fn validate(&self) -> Result<(), String> {
        if let Some((feature, w)) = FEATURE_ORDER
            .iter()
            .zip(self.weights.iter())
            .find(|(_, w)| !w.is_finite())
        {
            return Err(format!("weight for {feature} is not finite ({w})"));
        }
        if !self.bias.is_finite() {
            return Err(format!("bias is not finite ({})", self.bias));
        }
        Ok(())
    }

    pub fn weight_for(&self, feature: Feature) -> f64 {
        self.weights[feature.index()]
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Linear score z = Σ(w_i × x_i) + b.
    pub fn linear_score(&self, features: &FeatureVector) -> f64 {
        let weighted_sum: f64 = features
            .as_array()
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();
        weighted_sum + self.bias
    }
}
