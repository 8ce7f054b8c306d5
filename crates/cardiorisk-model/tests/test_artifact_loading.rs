//! Loading the predictor from artifact files on disk.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use cardiorisk_common::ArtifactLoadError;
use cardiorisk_model::{BmiCategory, PatientRecord, RiskPredictor};

const WEIGHTS: &str = r#"{"weights": [0.01, -0.02, 0.15, 0.9, 0.12, 0.35, -0.05, -0.06, -0.07, -0.2, 0.33, 0.05], "bias": -1.1}"#;
const SCALER: &str = r#"{
    "feature_names": ["age_years", "height", "weight", "ap_hi", "ap_lo", "bmi"],
    "mean": [53.3, 164.4, 74.1, 126.6, 81.4, 27.5],
    "scale": [6.8, 8.2, 14.3, 16.7, 9.6, 5.3]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn patient() -> PatientRecord {
    PatientRecord {
        gender: 2,
        height: 165.0,
        weight: 70.0,
        ap_hi: 140.0,
        ap_lo: 90.0,
        cholesterol: 2,
        gluc: 1,
        smoke: 1,
        alco: 0,
        active: 0,
        age_years: 58.0,
    }
}

#[test]
fn test_load_and_predict_from_files() {
    let weights = write_temp(WEIGHTS);
    let scaler = write_temp(SCALER);

    let predictor = RiskPredictor::from_paths(weights.path(), scaler.path()).unwrap();
    let result = predictor.predict(&patient()).unwrap();

    assert!((0.0..=1.0).contains(&result.probability));
    assert_eq!(result.bmi_category, BmiCategory::Overweight);
    // Elevated pressure with these weights pushes the score positive
    assert!(result.high_risk, "p = {}", result.probability);
}

#[test]
fn test_missing_weights_file() {
    let scaler = write_temp(SCALER);
    let err = RiskPredictor::from_paths("/definitely/not/here.json", scaler.path()).unwrap_err();
    assert!(matches!(err, ArtifactLoadError::Unreadable { .. }), "{err}");
}

#[test]
fn test_eleven_weights_rejected() {
    let weights = write_temp(r#"{"weights": [0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1], "bias": 0.0}"#);
    let scaler = write_temp(SCALER);
    let err = RiskPredictor::from_paths(weights.path(), scaler.path()).unwrap_err();
    assert!(matches!(err, ArtifactLoadError::Shape { .. }), "{err}");
}

#[test]
fn test_five_scaler_features_rejected() {
    let weights = write_temp(WEIGHTS);
    let scaler = write_temp(
        r#"{"feature_names": ["age_years", "height", "weight", "ap_hi", "ap_lo"],
            "mean": [53.3, 164.4, 74.1, 126.6, 81.4], "scale": [6.8, 8.2, 14.3, 16.7, 9.6]}"#,
    );
    let err = RiskPredictor::from_paths(weights.path(), scaler.path()).unwrap_err();
    assert!(matches!(err, ArtifactLoadError::Shape { .. }), "{err}");
}

#[test]
fn test_zero_scale_rejected() {
    let weights = write_temp(WEIGHTS);
    let scaler = write_temp(
        r#"{"feature_names": ["age_years", "height", "weight", "ap_hi", "ap_lo", "bmi"],
            "mean": [53.3, 164.4, 74.1, 126.6, 81.4, 27.5], "scale": [6.8, 8.2, 14.3, 0.0, 9.6, 5.3]}"#,
    );
    let err = RiskPredictor::from_paths(weights.path(), scaler.path()).unwrap_err();
    assert!(err.to_string().contains("ap_hi"), "{err}");
}

#[test]
fn test_unknown_feature_name_rejected() {
    let weights = write_temp(WEIGHTS);
    let scaler = write_temp(
        r#"{"feature_names": ["age", "height", "weight", "ap_hi", "ap_lo", "bmi"],
            "mean": [53.3, 164.4, 74.1, 126.6, 81.4, 27.5], "scale": [6.8, 8.2, 14.3, 16.7, 9.6, 5.3]}"#,
    );
    let err = RiskPredictor::from_paths(weights.path(), scaler.path()).unwrap_err();
    assert!(err.to_string().contains("unknown feature 'age'"), "{err}");
}

#[test]
fn test_bundled_artifacts_load() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../model");
    let predictor = RiskPredictor::from_paths(
        root.join("custom_model_params.json"),
        root.join("scaler_params.json"),
    )
    .unwrap();
    let p = predictor.predict(&patient()).unwrap().probability;
    assert!((0.0..=1.0).contains(&p));
}
