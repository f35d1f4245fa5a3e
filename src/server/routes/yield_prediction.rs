//! Yield prediction endpoint
//!
//! Accepts a loose JSON object rather than a strict schema: missing numeric
//! fields default to 0.0, a missing crop type defaults to "wheat", and
//! numeric strings are parsed. Only unparseable values are rejected.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::data::FeatureVector;
use crate::error::{Result, ServiceError};
use crate::server::state::SharedState;

#[derive(Serialize)]
pub struct YieldResponse {
    pub success: bool,
    pub predicted_yield: f32,
    pub recommendations: Vec<String>,
    pub unit: &'static str,
}

/// POST /predict_yield - Predict crop yield from soil and weather features
pub async fn predict_yield(
    State(state): State<SharedState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<YieldResponse>> {
    let Json(body) = body.map_err(|e| ServiceError::Validation(e.body_text()))?;
    let features = parse_features(&body)?;

    debug!(?features, "yield prediction request");

    let predictor = state.yield_predictor.lock().await;
    let predicted_yield = predictor.predict(&features)?;
    let recommendations = predictor.recommend(&features);

    Ok(Json(YieldResponse {
        success: true,
        predicted_yield,
        recommendations,
        unit: "tons/hectare",
    }))
}

/// Assemble a feature vector from a loose JSON object
fn parse_features(body: &Value) -> Result<FeatureVector> {
    Ok(FeatureVector {
        area: numeric_field(body, "area")?,
        rainfall: numeric_field(body, "rainfall")?,
        temperature: numeric_field(body, "temperature")?,
        humidity: numeric_field(body, "humidity")?,
        ph: numeric_field(body, "ph")?,
        nitrogen: numeric_field(body, "nitrogen")?,
        phosphorus: numeric_field(body, "phosphorus")?,
        potassium: numeric_field(body, "potassium")?,
        crop_type: body
            .get("crop_type")
            .and_then(Value::as_str)
            .unwrap_or("wheat")
            .to_string(),
    })
}

/// Read a numeric field. Missing or null fields default to 0.0; strings are
/// parsed as numbers; anything else is a validation error.
fn numeric_field(body: &Value, field: &str) -> Result<f32> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0) as f32),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f32>()
            .map_err(|_| ServiceError::Validation(format!("field '{field}' is not a number: {s:?}"))),
        Some(other) => Err(ServiceError::Validation(format!(
            "field '{field}' is not a number: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::backend::default_device;
    use crate::inference::{DiseaseDetector, YieldPredictor};
    use crate::model::{
        DiseaseNetConfig, DiseaseTrainingConfig, YieldNetConfig, YieldTrainingConfig,
    };
    use crate::server::state::AppState;
    use serde_json::json;

    #[tokio::test]
    async fn test_handler_predicts_from_partial_body() {
        let dir = tempfile::tempdir().unwrap();
        let device = default_device();
        let yield_predictor = YieldPredictor::load_or_train(
            dir.path(),
            &YieldNetConfig::default(),
            &YieldTrainingConfig::quick(),
            &device,
        )
        .unwrap();
        let disease_detector = DiseaseDetector::load_or_train(
            dir.path(),
            &DiseaseNetConfig {
                image_size: 32,
                ..Default::default()
            },
            &DiseaseTrainingConfig::quick(),
            &device,
        )
        .unwrap();
        let state = Arc::new(AppState::new(yield_predictor, disease_detector));

        let body = json!({"area": 10, "ph": 6.5, "crop_type": "rice"});
        let Json(response) = predict_yield(State(state), Ok(Json(body)))
            .await
            .unwrap();

        assert!(response.success);
        assert!(response.predicted_yield >= 0.0);
        assert_eq!(response.unit, "tons/hectare");
        // Zero-valued nutrients and rainfall trip their advisory rules
        assert!(!response.recommendations.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_zero_and_wheat() {
        let features = parse_features(&json!({})).unwrap();
        assert_eq!(features.area, 0.0);
        assert_eq!(features.ph, 0.0);
        assert_eq!(features.crop_type, "wheat");
    }

    #[test]
    fn test_numeric_and_string_fields_parse() {
        let body = json!({
            "area": 12.5,
            "rainfall": "850",
            "temperature": 24,
            "crop_type": "rice"
        });

        let features = parse_features(&body).unwrap();
        assert_eq!(features.area, 12.5);
        assert_eq!(features.rainfall, 850.0);
        assert_eq!(features.temperature, 24.0);
        assert_eq!(features.crop_type, "rice");
    }

    #[test]
    fn test_unparseable_field_is_rejected() {
        let result = parse_features(&json!({"ph": "slightly acidic"}));
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        let result = parse_features(&json!({"area": [1, 2]}));
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_null_field_defaults_to_zero() {
        let features = parse_features(&json!({"nitrogen": null})).unwrap();
        assert_eq!(features.nitrogen, 0.0);
    }
}
