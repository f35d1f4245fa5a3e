//! Cultivation recommendations endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ServiceError};
use crate::recommend::CropRecommendations;
use crate::server::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsRequest {
    pub crop_type: Option<String>,
    pub season: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: CropRecommendations,
}

/// POST /get_recommendations - Cultivation advice by crop and season
pub async fn get_recommendations(
    State(state): State<SharedState>,
    body: std::result::Result<Json<RecommendationsRequest>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>> {
    let Json(request) = body.map_err(|e| ServiceError::Validation(e.body_text()))?;

    let recommendations = state.engine.crop_recommendations(
        request.crop_type.as_deref(),
        request.season.as_deref(),
        request.location.as_deref(),
    );

    Ok(Json(RecommendationsResponse {
        success: true,
        recommendations,
    }))
}
