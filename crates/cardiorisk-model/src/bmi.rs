//! Body Mass Index and its WHO adult categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI = weight_kg / height_m². Height is taken in centimetres.
/// No rounding; callers round only for display.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Half-open bands: [.., 18.5) [18.5, 25) [25, 30) [30, ..)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Display severity of a BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiTone {
    Good,
    Caution,
    Alert,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn tone(self) -> BmiTone {
        match self {
            BmiCategory::Normal => BmiTone::Good,
            BmiCategory::Underweight | BmiCategory::Overweight => BmiTone::Caution,
            BmiCategory::Obese => BmiTone::Alert,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
