//! Feature layout of the trained model.
//!
//! The column order below is the order the scaler and weights were fitted
//! in. Changing it silently corrupts every prediction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

pub const FEATURE_COUNT: usize = 12;
pub const SCALED_FEATURE_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Gender,
    Height,
    Weight,
    ApHi,
    ApLo,
    Cholesterol,
    Gluc,
    Smoke,
    Alco,
    Active,
    AgeYears,
    Bmi,
}

/// Column order fed into the linear model.
pub const FEATURE_ORDER: [Feature; FEATURE_COUNT] = [
    Feature::Gender,
    Feature::Height,
    Feature::Weight,
    Feature::ApHi,
    Feature::ApLo,
    Feature::Cholesterol,
    Feature::Gluc,
    Feature::Smoke,
    Feature::Alco,
    Feature::Active,
    Feature::AgeYears,
    Feature::Bmi,
];

/// Numerical columns standardized before scoring, in the scaler's fitting order.
pub const SCALED_FEATURES: [Feature; SCALED_FEATURE_COUNT] = [
    Feature::AgeYears,
    Feature::Height,
    Feature::Weight,
    Feature::ApHi,
    Feature::ApLo,
    Feature::Bmi,
];

impl Feature {
    /// Position of this feature in `FEATURE_ORDER`.
    pub fn index(self) -> usize {
        match self {
            Feature::Gender => 0,
            Feature::Height => 1,
            Feature::Weight => 2,
            Feature::ApHi => 3,
            Feature::ApLo => 4,
            Feature::Cholesterol => 5,
            Feature::Gluc => 6,
            Feature::Smoke => 7,
            Feature::Alco => 8,
            Feature::Active => 9,
            Feature::AgeYears => 10,
            Feature::Bmi => 11,
        }
    }

    /// Column name used in the training data and the artifacts.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Gender => "gender",
            Feature::Height => "height",
            Feature::Weight => "weight",
            Feature::ApHi => "ap_hi",
            Feature::ApLo => "ap_lo",
            Feature::Cholesterol => "cholesterol",
            Feature::Gluc => "gluc",
            Feature::Smoke => "smoke",
            Feature::Alco => "alco",
            Feature::Active => "active",
            Feature::AgeYears => "age_years",
            Feature::Bmi => "bmi",
        }
    }

    pub fn is_scaled(self) -> bool {
        SCALED_FEATURES.contains(&self)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FEATURE_ORDER
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown feature '{s}'"))
    }
}

/// One model input row, indexed by `Feature`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.0[feature.index()]
    }
}

impl IndexMut<Feature> for FeatureVector {
    fn index_mut(&mut self, feature: Feature) -> &mut f64 {
        &mut self.0[feature.index()]
    }
}
