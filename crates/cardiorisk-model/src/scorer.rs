//! Linear scoring and the logistic link.
//!
//! p = σ(Σ(w_i × x_i) + b), high risk iff p ≥ 0.5

use crate::features::FeatureVector;
use crate::weights::ModelParameters;

/// Decision threshold on the probability. Inclusive on the high side.
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;

/// Maps a scaled feature row to a real-valued log-odds score.
pub trait Scorer: Send + Sync {
    fn score(&self, features: &FeatureVector) -> f64;
}

impl Scorer for ModelParameters {
    fn score(&self, features: &FeatureVector) -> f64 {
        self.linear_score(features)
    }
}

/// Returns the same score for every row. Used to pin the probability in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer(pub f64);

impl Scorer for FixedScorer {
    fn score(&self, _features: &FeatureVector) -> f64 {
        self.0
    }
}

/// Logistic function 1 / (1 + e^(−z)).
///
/// Two-branch form: the exponent is never positive, so e^x cannot overflow
/// and the result stays in [0, 1] for every non-NaN z, including ±∞.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

pub fn is_high_risk(probability: f64) -> bool {
    probability >= HIGH_RISK_THRESHOLD
}
