//! Data module for synthetic dataset generation and preprocessing
//!
//! This module provides:
//! - The yield feature vector consumed by the regression model
//! - Seeded synthetic training data generation
//! - Standardization (zero mean, unit variance) fit on the training split
//! - Categorical crop encoding

pub mod encoder;
pub mod scaler;
pub mod synthetic;

pub use encoder::CropEncoder;
pub use scaler::StandardScaler;
pub use synthetic::{generate_yield_dataset, train_val_split, YieldSample};

/// The five crop types the yield model knows about.
///
/// Declaration order defines the encoded index (wheat = 0); the same order is
/// used for training data generation and request-time encoding.
pub const CROP_TYPES: [&str; 5] = ["wheat", "rice", "corn", "soybean", "cotton"];

/// Number of model input features (8 numeric + 1 encoded crop index)
pub const NUM_FEATURES: usize = 9;

/// Input features for a single yield prediction.
///
/// Numeric ranges are not validated; out-of-range values pass through to the
/// model unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Cultivated area in hectares
    pub area: f32,
    /// Annual rainfall in mm
    pub rainfall: f32,
    /// Average temperature in Celsius
    pub temperature: f32,
    /// Relative humidity in percent
    pub humidity: f32,
    /// Soil pH
    pub ph: f32,
    /// Soil nitrogen in kg/ha
    pub nitrogen: f32,
    /// Soil phosphorus in kg/ha
    pub phosphorus: f32,
    /// Soil potassium in kg/ha
    pub potassium: f32,
    /// Crop type name (one of [`CROP_TYPES`], anything else encodes to 0)
    pub crop_type: String,
}

impl FeatureVector {
    /// Assemble the raw model input row: 8 numeric features followed by the
    /// encoded crop index.
    pub fn to_row(&self, encoder: &CropEncoder) -> [f32; NUM_FEATURES] {
        [
            self.area,
            self.rainfall,
            self.temperature,
            self.humidity,
            self.ph,
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            encoder.encode(&self.crop_type) as f32,
        ]
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            area: 0.0,
            rainfall: 0.0,
            temperature: 0.0,
            humidity: 0.0,
            ph: 0.0,
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            crop_type: "wheat".to_string(),
        }
    }
}
