//! Disease detection endpoint
//!
//! Accepts a multipart upload with an "image" file field, classifies it, and
//! attaches treatment advice. Low-confidence predictions get no medicine
//! suggestions, only a tip that the image quality was insufficient.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ServiceError};
use crate::recommend::{MedicineSuggestions, RecommendationEngine};
use crate::server::state::SharedState;

/// Minimum confidence for the diagnosis to be acted on. At or below this the
/// response carries no medicine suggestions.
const CONFIDENCE_THRESHOLD: f32 = 0.7;

const LOW_CONFIDENCE_TIP: &str = "Image quality insufficient for accurate diagnosis";

#[derive(Serialize)]
pub struct DiseaseResponse {
    pub success: bool,
    pub disease: String,
    pub confidence: f32,
    pub medicine_suggestions: MedicineSuggestions,
    pub treatment_tips: Vec<&'static str>,
}

/// POST /detect_disease - Classify a plant image and suggest treatment
pub async fn detect_disease(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Json<DiseaseResponse>> {
    let image_bytes = extract_image(multipart).await?;

    let prediction = state.disease_detector.lock().await.predict_bytes(&image_bytes)?;
    debug!(
        disease = %prediction.disease,
        confidence = prediction.confidence,
        "disease prediction"
    );

    let (medicine_suggestions, treatment_tips) =
        disease_advice(&state.engine, &prediction.disease, prediction.confidence);

    Ok(Json(DiseaseResponse {
        success: true,
        disease: prediction.disease,
        confidence: prediction.confidence,
        medicine_suggestions,
        treatment_tips,
    }))
}

/// Pull the raw bytes of the "image" field out of the multipart body
async fn extract_image(mut multipart: Multipart) -> Result<Vec<u8>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServiceError::Validation(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let selected = field.file_name().is_some_and(|name| !name.is_empty());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        if !selected || bytes.is_empty() {
            return Err(ServiceError::Validation("No image selected".into()));
        }
        return Ok(bytes.to_vec());
    }

    Err(ServiceError::Validation("No image provided".into()))
}

/// Advice attached to a diagnosis. Confidence at or below the threshold
/// suppresses the medicine lookup entirely.
fn disease_advice(
    engine: &RecommendationEngine,
    disease: &str,
    confidence: f32,
) -> (MedicineSuggestions, Vec<&'static str>) {
    if confidence > CONFIDENCE_THRESHOLD {
        (
            engine.medicine_suggestions(disease),
            engine.treatment_tips(disease),
        )
    } else {
        (MedicineSuggestions::empty(), vec![LOW_CONFIDENCE_TIP])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confident_diagnosis_gets_medicine() {
        let engine = RecommendationEngine::new();
        let (suggestions, tips) = disease_advice(&engine, "brown_spot", 0.92);

        assert_eq!(suggestions.medicines.len(), 2);
        assert_eq!(tips.len(), 8);
    }

    #[test]
    fn test_low_confidence_suppresses_medicine() {
        let engine = RecommendationEngine::new();
        let (suggestions, tips) = disease_advice(&engine, "brown_spot", 0.4);

        assert!(suggestions.medicines.is_empty());
        assert!(suggestions.organic_alternatives.is_empty());
        assert_eq!(tips, vec![LOW_CONFIDENCE_TIP]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly 0.7 is still "not confident enough"
        let engine = RecommendationEngine::new();
        let (suggestions, tips) = disease_advice(&engine, "leaf_blast", 0.7);

        assert!(suggestions.medicines.is_empty());
        assert_eq!(tips, vec![LOW_CONFIDENCE_TIP]);
    }

    #[test]
    fn test_confident_unknown_disease_gets_fallback() {
        let engine = RecommendationEngine::new();
        let (suggestions, tips) = disease_advice(&engine, "tungro", 0.95);

        assert!(suggestions.medicines.is_empty());
        assert_eq!(
            suggestions.organic_alternatives,
            vec!["Consult agricultural extension officer for specific treatment"]
        );
        // General tips only; tungro has no specific tip list
        assert_eq!(tips.len(), 5);
    }
}
