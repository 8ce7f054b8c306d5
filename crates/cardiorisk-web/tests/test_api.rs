//! End-to-end tests of the HTTP API against an in-process router.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use cardiorisk_model::{
    scaler::IdentityScaler, scorer::FixedScorer, FormLimits, RiskPredictor,
};
use cardiorisk_web::{router::build_router, state::AppState};

fn app_with(predictor: RiskPredictor, limits: Option<FormLimits>) -> Router {
    build_router(AppState::new(predictor, limits))
}

fn bundled_app() -> Router {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../model");
    let predictor = RiskPredictor::from_paths(
        root.join("custom_model_params.json"),
        root.join("scaler_params.json"),
    )
    .expect("bundled artifacts load");
    app_with(predictor, Some(FormLimits::default()))
}

fn form() -> Value {
    json!({
        "gender": 1,
        "height": 165,
        "weight": 70.0,
        "ap_hi": 120,
        "ap_lo": 80,
        "cholesterol": 1,
        "gluc": 1,
        "smoke": 0,
        "alco": 0,
        "active": 1,
        "age_years": 50
    })
}

async fn post_predict(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_predict_returns_result_and_summary() {
    let (status, body) = post_predict(bundled_app(), form()).await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let p = body["result"]["probability"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&p));
    assert_eq!(body["result"]["high_risk"].as_bool().unwrap(), p >= 0.5);
    assert_eq!(body["result"]["bmi_category"], "Overweight");
    assert_eq!(body["summary"]["bmi_rounded"].as_f64().unwrap(), 25.7);
    assert_eq!(body["summary"]["bmi_tone"], "caution");
    assert!(body["assessment_id"].is_string());
}

#[tokio::test]
async fn test_gender_three_is_unprocessable() {
    let mut body = form();
    body["gender"] = json!(3);
    let (status, body) = post_predict(bundled_app(), body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("gender"));
}

#[tokio::test]
async fn test_zero_height_is_unprocessable_without_form_limits() {
    let predictor = RiskPredictor::new(FixedScorer(0.0), IdentityScaler);
    let mut body = form();
    body["height"] = json!(0);
    let (status, body) = post_predict(app_with(predictor, None), body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("height"));
}

#[tokio::test]
async fn test_form_limits_toggle() {
    let mut body = form();
    body["ap_hi"] = json!(260);

    let strict = RiskPredictor::new(FixedScorer(0.0), IdentityScaler);
    let (status, _) = post_predict(app_with(strict, Some(FormLimits::default())), body.clone()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let lenient = RiskPredictor::new(FixedScorer(0.0), IdentityScaler);
    let (status, body) = post_predict(app_with(lenient, None), body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["probability"].as_f64().unwrap(), 0.5);
    assert_eq!(body["summary"]["risk_label"], "High Risk");
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let mut body = form();
    body.as_object_mut().unwrap().remove("weight");
    let (status, body) = post_predict(bundled_app(), body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("weight"), "{message}");
}

#[tokio::test]
async fn test_out_of_range_code_gets_json_error() {
    let mut body = form();
    body["gender"] = json!(300);
    let (status, body) = post_predict(bundled_app(), body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string(), "{body}");
}

#[tokio::test]
async fn test_malformed_json_gets_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header("content-type", "application/json")
        .body(Body::from("{\"gender\": 1,"))
        .unwrap();
    let response = bundled_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string(), "{body}");
}

#[tokio::test]
async fn test_model_info() {
    let request = Request::builder().uri("/api/model").body(Body::empty()).unwrap();
    let response = bundled_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let info: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(info["feature_order"][0], "gender");
    assert_eq!(info["feature_order"][11], "bmi");
    assert_eq!(info["scaled_features"].as_array().unwrap().len(), 6);
    assert_eq!(info["high_risk_threshold"].as_f64().unwrap(), 0.5);
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = bundled_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
