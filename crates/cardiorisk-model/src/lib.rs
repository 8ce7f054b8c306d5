//! cardiorisk-model — Cardiovascular disease risk prediction engine.
//!
//! Raw patient attributes → BMI → standardized 12-feature vector →
//! linear score → sigmoid → risk classification.

pub mod features;
pub mod weights;
pub mod scaler;
pub mod scorer;
pub mod artifacts;
pub mod bmi;
pub mod patient;
pub mod predictor;
pub mod report;

pub use bmi::{BmiCategory, BmiTone};
pub use patient::{FormLimits, PatientRecord};
pub use predictor::{PredictionResult, RiskPredictor};
pub use report::RiskSummary;
