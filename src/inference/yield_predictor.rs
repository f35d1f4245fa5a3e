//! Yield Prediction
//!
//! Wraps the trained regression model together with the scaler and crop
//! encoder it was fitted with. Predictions are clamped to be non-negative.
//! Also provides the threshold-rule advisory list derived from the raw
//! feature values (independent of the model output).

use std::path::{Path, PathBuf};

use burn::{
    module::Module,
    record::{FullPrecisionSettings, NamedMpkFileRecorder},
    tensor::{ElementConversion, Tensor, TensorData},
};
use tracing::{info, warn};

use crate::backend::{DefaultBackend, TrainingBackend};
use crate::data::{CropEncoder, FeatureVector, StandardScaler, NUM_FEATURES};
use crate::error::{Result, ServiceError};
use crate::model::{YieldNet, YieldNetConfig, YieldTrainingConfig};
use crate::training::train_yield_model;

/// Artifact file names under the artifacts directory. The model file gets the
/// recorder's own extension appended on save.
const MODEL_FILE: &str = "crop_yield_model";
const SCALER_FILE: &str = "yield_scaler.json";
const ENCODER_FILE: &str = "yield_crop_encoder.json";

// Full precision so reloaded weights reproduce predictions exactly
type ModelRecorder = NamedMpkFileRecorder<FullPrecisionSettings>;

type Device = <DefaultBackend as burn::tensor::backend::Backend>::Device;

/// Trained yield model plus the preprocessors it must be served with
pub struct YieldPredictor {
    model: YieldNet<DefaultBackend>,
    scaler: StandardScaler,
    encoder: CropEncoder,
    device: Device,
}

impl YieldPredictor {
    /// Predict the yield in tons/hectare for one feature vector.
    ///
    /// The raw prediction is clamped at zero; a negative yield is never
    /// returned.
    pub fn predict(&self, features: &FeatureVector) -> Result<f32> {
        let row = features.to_row(&self.encoder);
        let scaled = self.scaler.transform(&row);

        let input = Tensor::<DefaultBackend, 2>::from_floats(
            TensorData::new(scaled.to_vec(), [1, NUM_FEATURES]),
            &self.device,
        );
        let output = self.model.forward(input);
        let value: f32 = output.into_scalar().elem();

        Ok(value.max(0.0))
    }

    /// Advisory strings for these features, see [`yield_recommendations`]
    pub fn recommend(&self, features: &FeatureVector) -> Vec<String> {
        yield_recommendations(features)
    }

    /// Persist the model, scaler, and encoder to the artifacts directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;

        self.model
            .clone()
            .save_file(dir.join(MODEL_FILE), &ModelRecorder::new())
            .map_err(|e| ServiceError::Model(format!("failed to save yield model: {e}")))?;
        self.scaler.save(&dir.join(SCALER_FILE))?;
        self.encoder.save(&dir.join(ENCODER_FILE))?;

        Ok(())
    }

    /// Load a persisted predictor from the artifacts directory
    pub fn load(dir: &Path, device: &Device) -> Result<Self> {
        let model_path = model_weights_path(dir);
        if !model_path.exists() {
            return Err(ServiceError::PathNotFound(model_path));
        }

        let scaler = StandardScaler::load(&dir.join(SCALER_FILE))?;
        let encoder = CropEncoder::load(&dir.join(ENCODER_FILE))?;

        let model = YieldNet::<DefaultBackend>::new(&YieldNetConfig::default(), device)
            .load_file(dir.join(MODEL_FILE), &ModelRecorder::new(), device)
            .map_err(|e| ServiceError::Model(format!("failed to load yield model: {e}")))?;

        Ok(Self {
            model,
            scaler,
            encoder,
            device: device.clone(),
        })
    }

    /// Load the persisted predictor, or train from scratch and persist the
    /// result when no artifacts are found. Runs synchronously; callers invoke
    /// this once at startup before serving requests.
    pub fn load_or_train(
        dir: &Path,
        net_config: &YieldNetConfig,
        training_config: &YieldTrainingConfig,
        device: &Device,
    ) -> Result<Self> {
        match Self::load(dir, device) {
            Ok(predictor) => {
                info!("Loaded persisted yield model from {}", dir.display());
                return Ok(predictor);
            }
            Err(ServiceError::PathNotFound(_)) => {
                info!("No persisted yield model found, training from scratch");
            }
            Err(e) => {
                warn!("Failed to load persisted yield model ({e}), training from scratch");
            }
        }

        let trained = train_yield_model::<TrainingBackend>(net_config, training_config, device)?;

        let predictor = Self {
            model: trained.model,
            scaler: trained.scaler,
            encoder: trained.encoder,
            device: device.clone(),
        };
        predictor.save(dir)?;
        info!("Persisted freshly trained yield model to {}", dir.display());

        Ok(predictor)
    }
}

fn model_weights_path(dir: &Path) -> PathBuf {
    let mut path = dir.join(MODEL_FILE);
    path.set_extension("mpk");
    path
}

/// Advisory list derived from the raw feature values.
///
/// Each threshold rule is evaluated independently and all matching advice
/// strings are appended in a fixed order; zero, one, or many rules may fire.
pub fn yield_recommendations(features: &FeatureVector) -> Vec<String> {
    let mut recommendations = Vec::new();

    if features.ph < 6.0 {
        recommendations.push("Soil is too acidic. Consider adding lime to increase pH.".into());
    } else if features.ph > 7.5 {
        recommendations
            .push("Soil is too alkaline. Consider adding sulfur or organic matter.".into());
    }

    if features.nitrogen < 50.0 {
        recommendations
            .push("Nitrogen levels are low. Consider nitrogen-rich fertilizers.".into());
    }
    if features.phosphorus < 20.0 {
        recommendations.push("Phosphorus levels are low. Apply phosphate fertilizers.".into());
    }
    if features.potassium < 50.0 {
        recommendations.push("Potassium levels are low. Use potash fertilizers.".into());
    }

    if features.rainfall < 400.0 {
        recommendations.push("Low rainfall detected. Implement irrigation systems.".into());
    }
    if features.temperature > 35.0 {
        recommendations
            .push("High temperature stress. Consider shade nets or cooling systems.".into());
    }
    if features.humidity < 40.0 {
        recommendations.push("Low humidity. Increase irrigation frequency.".into());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::default_device;
    use crate::model::YieldTrainingConfig;

    fn quick_predictor(dir: &Path) -> YieldPredictor {
        YieldPredictor::load_or_train(
            dir,
            &YieldNetConfig::default(),
            &YieldTrainingConfig::quick(),
            &default_device(),
        )
        .unwrap()
    }

    #[test]
    fn test_prediction_is_non_negative() {
        let dir = tempfile::tempdir().unwrap();
        let predictor = quick_predictor(dir.path());

        let features = FeatureVector {
            area: 10.0,
            rainfall: 800.0,
            temperature: 25.0,
            humidity: 60.0,
            ph: 6.5,
            nitrogen: 80.0,
            phosphorus: 40.0,
            potassium: 80.0,
            crop_type: "rice".to_string(),
        };

        let yield_value = predictor.predict(&features).unwrap();
        assert!(yield_value >= 0.0);
        assert!(yield_value.is_finite());
    }

    #[test]
    fn test_all_zero_features_unknown_crop() {
        let dir = tempfile::tempdir().unwrap();
        let predictor = quick_predictor(dir.path());

        // All numeric features zero, crop name nobody trained on
        let features = FeatureVector {
            crop_type: "dragonfruit".to_string(),
            ..Default::default()
        };

        let yield_value = predictor.predict(&features).unwrap();
        assert!(yield_value >= 0.0);
        assert!(yield_value.is_finite());
    }

    #[test]
    fn test_save_load_preserves_prediction() {
        let dir = tempfile::tempdir().unwrap();
        let predictor = quick_predictor(dir.path());

        let features = FeatureVector {
            area: 5.0,
            rainfall: 600.0,
            temperature: 22.0,
            humidity: 55.0,
            ph: 6.8,
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 100.0,
            crop_type: "wheat".to_string(),
        };

        let before = predictor.predict(&features).unwrap();
        let loaded = YieldPredictor::load(dir.path(), &default_device()).unwrap();
        let after = loaded.predict(&features).unwrap();

        assert!((before - after).abs() < 1e-5);
    }

    #[test]
    fn test_load_missing_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let result = YieldPredictor::load(dir.path(), &default_device());
        assert!(matches!(result, Err(ServiceError::PathNotFound(_))));
    }

    #[test]
    fn test_acidic_soil_advice() {
        let features = FeatureVector {
            ph: 5.5,
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 100.0,
            rainfall: 800.0,
            temperature: 25.0,
            humidity: 60.0,
            ..Default::default()
        };

        let advice = yield_recommendations(&features);
        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("too acidic"));
    }

    #[test]
    fn test_alkaline_soil_advice() {
        let features = FeatureVector {
            ph: 8.0,
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 100.0,
            rainfall: 800.0,
            temperature: 25.0,
            humidity: 60.0,
            ..Default::default()
        };

        let advice = yield_recommendations(&features);
        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("too alkaline"));
    }

    #[test]
    fn test_neutral_ph_no_ph_advice() {
        let features = FeatureVector {
            ph: 6.5,
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 100.0,
            rainfall: 800.0,
            temperature: 25.0,
            humidity: 60.0,
            ..Default::default()
        };

        let advice = yield_recommendations(&features);
        assert!(advice.iter().all(|a| !a.contains("acidic") && !a.contains("alkaline")));
    }

    #[test]
    fn test_all_rules_fire_together() {
        // Every threshold violated at once (defaults are all zero except pH)
        let features = FeatureVector {
            ph: 5.0,
            temperature: 40.0,
            ..Default::default()
        };

        let advice = yield_recommendations(&features);
        assert_eq!(advice.len(), 7);
    }

    #[test]
    fn test_healthy_conditions_no_advice() {
        let features = FeatureVector {
            ph: 6.5,
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 100.0,
            rainfall: 800.0,
            temperature: 25.0,
            humidity: 60.0,
            ..Default::default()
        };

        assert!(yield_recommendations(&features).is_empty());
    }
}
