//! Recommendation Engine
//!
//! Read-only lookups over the static tables. Built once at startup and
//! shared immutably across requests.

use std::collections::HashMap;

use serde::Serialize;

use super::tables::{
    CropGuide, MedicineEntry, MedicineRecord, CROP_GUIDES, DISEASE_SPECIFIC_TIPS,
    GENERAL_CROP_TIPS, GENERAL_TREATMENT_TIPS, MEDICINE_DATABASE, SEASON_TIPS,
    UNKNOWN_DISEASE_FALLBACK,
};

/// Treatment lookup result: conventional medicines plus organic options
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MedicineSuggestions {
    pub medicines: Vec<MedicineRecord>,
    pub organic_alternatives: Vec<&'static str>,
}

impl MedicineSuggestions {
    /// The shape returned when no confident diagnosis is available
    pub fn empty() -> Self {
        Self {
            medicines: Vec::new(),
            organic_alternatives: Vec::new(),
        }
    }
}

/// Cultivation lookup result. Crop-specific sections are present only when
/// the crop is recognized, seasonal tips only when the season is.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropRecommendations {
    pub general_tips: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertilization: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrigation: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pest_management: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_tips: Option<Vec<&'static str>>,
}

/// Indexed view over the static recommendation tables
pub struct RecommendationEngine {
    medicines: HashMap<&'static str, &'static MedicineEntry>,
    disease_tips: HashMap<&'static str, &'static [&'static str]>,
    crop_guides: HashMap<&'static str, &'static CropGuide>,
    season_tips: HashMap<&'static str, &'static [&'static str]>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            medicines: MEDICINE_DATABASE.iter().map(|e| (e.disease, e)).collect(),
            disease_tips: DISEASE_SPECIFIC_TIPS.iter().map(|&(d, t)| (d, t)).collect(),
            crop_guides: CROP_GUIDES.iter().map(|g| (g.crop, g)).collect(),
            season_tips: SEASON_TIPS.iter().map(|&(s, t)| (s, t)).collect(),
        }
    }

    /// Medicine suggestions for a disease. Unrecognized diseases get an empty
    /// medicines list and a single consult-an-expert alternative.
    pub fn medicine_suggestions(&self, disease: &str) -> MedicineSuggestions {
        match self.medicines.get(disease) {
            Some(entry) => MedicineSuggestions {
                medicines: entry.medicines.to_vec(),
                organic_alternatives: entry.organic_alternatives.to_vec(),
            },
            None => MedicineSuggestions {
                medicines: Vec::new(),
                organic_alternatives: vec![UNKNOWN_DISEASE_FALLBACK],
            },
        }
    }

    /// General treatment tips, extended with disease-specific tips when the
    /// disease is recognized.
    pub fn treatment_tips(&self, disease: &str) -> Vec<&'static str> {
        let mut tips = GENERAL_TREATMENT_TIPS.to_vec();
        if let Some(specific) = self.disease_tips.get(disease) {
            tips.extend_from_slice(specific);
        }
        tips
    }

    /// Cultivation recommendations for a crop and season. Unknown values are
    /// silently ignored; `location` is accepted for API compatibility but
    /// carries no data.
    pub fn crop_recommendations(
        &self,
        crop_type: Option<&str>,
        season: Option<&str>,
        _location: Option<&str>,
    ) -> CropRecommendations {
        let guide = crop_type.and_then(|c| self.crop_guides.get(c));
        let seasonal = season.and_then(|s| self.season_tips.get(s));

        CropRecommendations {
            general_tips: GENERAL_CROP_TIPS.to_vec(),
            planting: guide.map(|g| g.planting.to_vec()),
            fertilization: guide.map(|g| g.fertilization.to_vec()),
            irrigation: guide.map(|g| g.irrigation.to_vec()),
            pest_management: guide.map(|g| g.pest_management.to_vec()),
            seasonal_tips: seasonal.map(|t| t.to_vec()),
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_disease_medicines() {
        let engine = RecommendationEngine::new();
        let result = engine.medicine_suggestions("bacterial_blight");

        assert_eq!(result.medicines.len(), 2);
        assert_eq!(result.medicines[0].name, "Copper Hydroxide");
        assert_eq!(result.organic_alternatives.len(), 3);
    }

    #[test]
    fn test_healthy_has_alternatives_but_no_medicines() {
        let engine = RecommendationEngine::new();
        let result = engine.medicine_suggestions("healthy");

        assert!(result.medicines.is_empty());
        assert!(!result.organic_alternatives.is_empty());
    }

    #[test]
    fn test_unknown_disease_fallback() {
        let engine = RecommendationEngine::new();
        let result = engine.medicine_suggestions("unknown_disease_xyz");

        assert!(result.medicines.is_empty());
        assert_eq!(
            result.organic_alternatives,
            vec!["Consult agricultural extension officer for specific treatment"]
        );
    }

    #[test]
    fn test_treatment_tips_known_disease() {
        let engine = RecommendationEngine::new();
        let tips = engine.treatment_tips("leaf_blast");

        // 5 general + 3 disease-specific
        assert_eq!(tips.len(), 8);
        assert_eq!(tips[0], "Remove and destroy infected plant parts");
        assert!(tips.contains(&"Avoid excessive nitrogen fertilization"));
    }

    #[test]
    fn test_treatment_tips_unknown_disease() {
        let engine = RecommendationEngine::new();
        let tips = engine.treatment_tips("tungro");
        assert_eq!(tips.len(), 5);
    }

    #[test]
    fn test_crop_recommendations_full_match() {
        let engine = RecommendationEngine::new();
        let result = engine.crop_recommendations(Some("wheat"), Some("summer"), Some("anywhere"));

        assert_eq!(result.general_tips.len(), 4);
        assert!(result.planting.is_some());
        assert!(result.fertilization.is_some());
        assert!(result.irrigation.is_some());
        assert!(result.pest_management.is_some());
        assert_eq!(
            result.seasonal_tips.unwrap(),
            vec![
                "Ensure adequate irrigation",
                "Monitor for heat stress",
                "Increase disease surveillance"
            ]
        );
    }

    #[test]
    fn test_crop_recommendations_unknown_keys() {
        let engine = RecommendationEngine::new();
        let result = engine.crop_recommendations(Some("unknown_crop"), Some("monsoon"), None);

        assert_eq!(result.general_tips.len(), 4);
        assert!(result.planting.is_none());
        assert!(result.seasonal_tips.is_none());
    }

    #[test]
    fn test_crop_sections_omitted_from_json_when_unknown() {
        let engine = RecommendationEngine::new();
        let result = engine.crop_recommendations(None, None, None);

        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("general_tips"));
        assert!(!obj.contains_key("planting"));
        assert!(!obj.contains_key("seasonal_tips"));
    }
}
