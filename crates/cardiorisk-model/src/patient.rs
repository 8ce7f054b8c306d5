//! Patient attributes as collected by the intake form.

use serde::{Deserialize, Serialize};
use cardiorisk_common::InvalidInputError;
use crate::bmi::body_mass_index;
use crate::features::{Feature, FeatureVector, FEATURE_COUNT};

/// The ten user-supplied attributes. BMI is derived, never collected.
///
/// Categorical codes follow the training data:
/// gender 1 = female, 2 = male; cholesterol and gluc 1 = normal,
/// 2 = above normal, 3 = well above normal; smoke/alco/active 0 = no, 1 = yes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub gender: u8,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Systolic blood pressure (mmHg)
    pub ap_hi: f64,
    /// Diastolic blood pressure (mmHg)
    pub ap_lo: f64,
    pub cholesterol: u8,
    pub gluc: u8,
    pub smoke: u8,
    pub alco: u8,
    pub active: u8,
    #[serde(alias = "age")]
    pub age_years: f64,
}

const GENDER_DOMAIN: (&[u8], &str) = (&[1, 2], "{1, 2}");
const LEVEL_DOMAIN: (&[u8], &str) = (&[1, 2, 3], "{1, 2, 3}");
const FLAG_DOMAIN: (&[u8], &str) = (&[0, 1], "{0, 1}");

fn check_domain(field: &'static str, value: u8, domain: (&[u8], &'static str)) -> Result<(), InvalidInputError> {
    if domain.0.contains(&value) {
        Ok(())
    } else {
        Err(InvalidInputError::OutOfDomain {
            field,
            value: i64::from(value),
            domain: domain.1,
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::NonFinite { field })
    }
}

impl PatientRecord {
    /// Reject anything the model cannot meaningfully score.
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        check_domain("gender", self.gender, GENDER_DOMAIN)?;
        check_domain("cholesterol", self.cholesterol, LEVEL_DOMAIN)?;
        check_domain("gluc", self.gluc, LEVEL_DOMAIN)?;
        check_domain("smoke", self.smoke, FLAG_DOMAIN)?;
        check_domain("alco", self.alco, FLAG_DOMAIN)?;
        check_domain("active", self.active, FLAG_DOMAIN)?;

        for (field, value) in self.numeric_fields() {
            check_finite(field, value)?;
        }

        // Height feeds the BMI denominator
        if self.height <= 0.0 {
            return Err(InvalidInputError::NotPositive { field: "height", value: self.height });
        }
        if self.weight <= 0.0 {
            return Err(InvalidInputError::NotPositive { field: "weight", value: self.weight });
        }
        if self.age_years < 0.0 {
            return Err(InvalidInputError::OutOfRange {
                field: "age_years",
                value: self.age_years,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        Ok(())
    }

    pub fn bmi(&self) -> f64 {
        body_mass_index(self.weight, self.height)
    }

    /// Validate, then lay the record out in model column order with BMI last.
    pub fn to_features(&self) -> Result<FeatureVector, InvalidInputError> {
        self.validate()?;
        // A positive but tiny height still overflows the quotient
        let bmi = self.bmi();
        check_finite("bmi", bmi)?;

        let mut row = FeatureVector::from_array([0.0; FEATURE_COUNT]);
        row[Feature::Gender] = f64::from(self.gender);
        row[Feature::Height] = self.height;
        row[Feature::Weight] = self.weight;
        row[Feature::ApHi] = self.ap_hi;
        row[Feature::ApLo] = self.ap_lo;
        row[Feature::Cholesterol] = f64::from(self.cholesterol);
        row[Feature::Gluc] = f64::from(self.gluc);
        row[Feature::Smoke] = f64::from(self.smoke);
        row[Feature::Alco] = f64::from(self.alco);
        row[Feature::Active] = f64::from(self.active);
        row[Feature::AgeYears] = self.age_years;
        row[Feature::Bmi] = bmi;
        Ok(row)
    }

    fn numeric_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("height", self.height),
            ("weight", self.weight),
            ("ap_hi", self.ap_hi),
            ("ap_lo", self.ap_lo),
            ("age_years", self.age_years),
        ]
    }
}

// ── Intake form limits ───────────────────────────────────────────────────────

/// Ranges the intake form accepts. Stricter than `PatientRecord::validate`,
/// which only rejects values the model cannot score at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormLimits {
    pub age_years: (f64, f64),
    pub height: (f64, f64),
    pub weight: (f64, f64),
    pub ap_hi: (f64, f64),
    pub ap_lo: (f64, f64),
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            age_years: (1.0, 120.0),
            height: (50.0, 250.0),
            weight: (10.0, 300.0),
            ap_hi: (70.0, 240.0),
            ap_lo: (40.0, 140.0),
        }
    }
}

impl FormLimits {
    pub fn check(&self, record: &PatientRecord) -> Result<(), InvalidInputError> {
        let checks = [
            ("age_years", record.age_years, self.age_years),
            ("height", record.height, self.height),
            ("weight", record.weight, self.weight),
            ("ap_hi", record.ap_hi, self.ap_hi),
            ("ap_lo", record.ap_lo, self.ap_lo),
        ];
        for (field, value, (min, max)) in checks {
            if !(min..=max).contains(&value) {
                return Err(InvalidInputError::OutOfRange { field, value, min, max });
            }
        }
        Ok(())
    }
}
