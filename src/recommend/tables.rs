//! Static recommendation tables
//!
//! All knowledge the engine serves lives here as typed constants, so an
//! unknown key is a lookup miss handled by the engine's fallbacks rather
//! than a runtime data error.

use serde::Serialize;

/// One treatment product with usage guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MedicineRecord {
    pub name: &'static str,
    pub dosage: &'static str,
    pub application: &'static str,
    pub precautions: &'static str,
}

/// Per-disease treatment entry
pub struct MedicineEntry {
    pub disease: &'static str,
    pub medicines: &'static [MedicineRecord],
    pub organic_alternatives: &'static [&'static str],
}

pub const MEDICINE_DATABASE: &[MedicineEntry] = &[
    MedicineEntry {
        disease: "bacterial_blight",
        medicines: &[
            MedicineRecord {
                name: "Copper Hydroxide",
                dosage: "2-3g per liter of water",
                application: "Foliar spray every 7-10 days",
                precautions: "Avoid spraying during flowering",
            },
            MedicineRecord {
                name: "Streptomycin Sulfate",
                dosage: "1g per liter of water",
                application: "Spray in early morning or evening",
                precautions: "Do not exceed recommended dosage",
            },
        ],
        organic_alternatives: &[
            "Neem oil spray (5ml per liter)",
            "Turmeric powder paste application",
            "Garlic extract spray",
        ],
    },
    MedicineEntry {
        disease: "brown_spot",
        medicines: &[
            MedicineRecord {
                name: "Mancozeb",
                dosage: "2.5g per liter of water",
                application: "Spray at 15-day intervals",
                precautions: "Use protective equipment",
            },
            MedicineRecord {
                name: "Propiconazole",
                dosage: "1ml per liter of water",
                application: "Apply at first sign of disease",
                precautions: "Avoid drift to water bodies",
            },
        ],
        organic_alternatives: &[
            "Baking soda spray (1 tsp per liter)",
            "Milk spray (100ml per liter water)",
            "Compost tea application",
        ],
    },
    MedicineEntry {
        disease: "leaf_blast",
        medicines: &[
            MedicineRecord {
                name: "Tricyclazole",
                dosage: "0.6g per liter of water",
                application: "Prophylactic spray at tillering stage",
                precautions: "Rotate with other fungicides",
            },
            MedicineRecord {
                name: "Isoprothiolane",
                dosage: "1.5ml per liter of water",
                application: "Apply before symptom appearance",
                precautions: "Maintain spray equipment properly",
            },
        ],
        organic_alternatives: &[
            "Silicon-based foliar spray",
            "Trichoderma viride application",
            "Pseudomonas fluorescens treatment",
        ],
    },
    MedicineEntry {
        disease: "healthy",
        medicines: &[],
        organic_alternatives: &[
            "Continue regular organic fertilization",
            "Maintain proper plant nutrition",
            "Ensure good air circulation",
        ],
    },
];

/// Fallback advice when a disease has no entry
pub const UNKNOWN_DISEASE_FALLBACK: &str =
    "Consult agricultural extension officer for specific treatment";

/// Treatment tips that apply to any disease
pub const GENERAL_TREATMENT_TIPS: &[&str] = &[
    "Remove and destroy infected plant parts",
    "Improve air circulation around plants",
    "Avoid overhead watering",
    "Apply treatments during cooler parts of the day",
    "Monitor plants regularly for early detection",
];

/// Per-disease additions to the general treatment tips
pub const DISEASE_SPECIFIC_TIPS: &[(&str, &[&str])] = &[
    (
        "bacterial_blight",
        &[
            "Use disease-free seeds",
            "Avoid working in wet fields",
            "Copper-based fungicides are effective",
        ],
    ),
    (
        "brown_spot",
        &[
            "Ensure proper plant nutrition",
            "Avoid water stress",
            "Remove crop residues after harvest",
        ],
    ),
    (
        "leaf_blast",
        &[
            "Avoid excessive nitrogen fertilization",
            "Maintain proper plant spacing",
            "Use resistant varieties when available",
        ],
    ),
];

/// Per-crop cultivation guide
pub struct CropGuide {
    pub crop: &'static str,
    pub planting: &'static [&'static str],
    pub fertilization: &'static [&'static str],
    pub irrigation: &'static [&'static str],
    pub pest_management: &'static [&'static str],
}

pub const CROP_GUIDES: &[CropGuide] = &[
    CropGuide {
        crop: "wheat",
        planting: &[
            "Plant when soil temperature is 50-60\u{b0}F",
            "Use certified disease-free seeds",
            "Maintain 6-8 inch row spacing",
        ],
        fertilization: &[
            "Apply NPK 120:60:40 kg/hectare",
            "Split nitrogen application in 2-3 doses",
            "Apply phosphorus at sowing time",
        ],
        irrigation: &[
            "Provide 4-6 irrigations during crop season",
            "Critical stages: crown root initiation, tillering, flowering",
            "Avoid waterlogging conditions",
        ],
        pest_management: &[
            "Monitor for aphids and termites",
            "Use integrated pest management",
            "Rotate crops to break pest cycles",
        ],
    },
    CropGuide {
        crop: "rice",
        planting: &[
            "Transplant 25-30 day old seedlings",
            "Maintain 2-3 seedlings per hill",
            "Keep 20x15 cm spacing between plants",
        ],
        fertilization: &[
            "Apply NPK 100:50:50 kg/hectare",
            "Use urea in split doses",
            "Apply zinc sulfate if deficient",
        ],
        irrigation: &[
            "Maintain 2-5 cm standing water",
            "Drain field before harvesting",
            "Alternate wetting and drying in later stages",
        ],
        pest_management: &[
            "Monitor for stem borers and leaf folders",
            "Use pheromone traps",
            "Practice crop rotation",
        ],
    },
];

/// Cultivation tips that apply to any crop
pub const GENERAL_CROP_TIPS: &[&str] = &[
    "Conduct soil testing before planting",
    "Use quality seeds from certified sources",
    "Follow recommended planting dates",
    "Implement integrated pest management",
];

/// Season-specific cultivation tips
pub const SEASON_TIPS: &[(&str, &[&str])] = &[
    (
        "spring",
        &[
            "Prepare soil when it's workable",
            "Watch for late frost warnings",
            "Begin pest monitoring early",
        ],
    ),
    (
        "summer",
        &[
            "Ensure adequate irrigation",
            "Monitor for heat stress",
            "Increase disease surveillance",
        ],
    ),
    (
        "fall",
        &[
            "Time harvest properly",
            "Prepare for storage",
            "Plan cover crops",
        ],
    ),
    (
        "winter",
        &[
            "Plan next season's crops",
            "Maintain equipment",
            "Analyze previous season's data",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_has_no_medicines() {
        let healthy = MEDICINE_DATABASE
            .iter()
            .find(|e| e.disease == "healthy")
            .unwrap();
        assert!(healthy.medicines.is_empty());
        assert!(!healthy.organic_alternatives.is_empty());
    }

    #[test]
    fn test_every_specific_tip_disease_has_medicine_entry() {
        for (disease, tips) in DISEASE_SPECIFIC_TIPS {
            assert_eq!(tips.len(), 3);
            assert!(MEDICINE_DATABASE.iter().any(|e| e.disease == *disease));
        }
    }

    #[test]
    fn test_table_shapes() {
        assert_eq!(GENERAL_TREATMENT_TIPS.len(), 5);
        assert_eq!(GENERAL_CROP_TIPS.len(), 4);
        assert_eq!(SEASON_TIPS.len(), 4);
        assert_eq!(CROP_GUIDES.len(), 2);
    }
}
