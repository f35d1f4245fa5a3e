//! Disease Detection
//!
//! Decodes an uploaded image, resizes it to the model's input resolution,
//! and runs the classifier. Output is the top class name, its softmax
//! confidence, and the full per-class score map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use burn::{
    module::Module,
    record::{FullPrecisionSettings, NamedMpkFileRecorder},
    tensor::{Tensor, TensorData},
};
use image::imageops::FilterType;
use serde::Serialize;
use tracing::{info, warn};

use crate::backend::{DefaultBackend, TrainingBackend};
use crate::error::{Result, ServiceError};
use crate::model::{DiseaseNet, DiseaseNetConfig, DiseaseTrainingConfig};
use crate::training::train_disease_model;

/// Class names in output-index order
pub const DISEASE_CLASSES: [&str; 7] = [
    "healthy",
    "bacterial_blight",
    "brown_spot",
    "leaf_blast",
    "tungro",
    "bacterial_leaf_streak",
    "sheath_blight",
];

const MODEL_FILE: &str = "disease_model";

// Full precision so reloaded weights reproduce predictions exactly
type ModelRecorder = NamedMpkFileRecorder<FullPrecisionSettings>;

type Device = <DefaultBackend as burn::tensor::backend::Backend>::Device;

/// Classifier output for one image
#[derive(Debug, Clone, Serialize)]
pub struct DiseasePrediction {
    /// Name of the top-scoring class
    pub disease: String,
    /// Softmax score of the top class, in [0, 1]
    pub confidence: f32,
    /// Softmax score for every class
    pub all_predictions: BTreeMap<String, f32>,
}

/// Trained disease classifier with image preprocessing
pub struct DiseaseDetector {
    model: DiseaseNet<DefaultBackend>,
    config: DiseaseNetConfig,
    device: Device,
}

impl DiseaseDetector {
    /// Classify an uploaded image from its raw encoded bytes
    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<DiseasePrediction> {
        let input = self.preprocess(bytes)?;
        let probs = self.model.forward_softmax(input);

        let scores = probs
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| ServiceError::Inference(format!("bad output tensor: {e:?}")))?;

        let (best_idx, best_score) = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .ok_or_else(|| ServiceError::Inference("empty class scores".into()))?;

        let all_predictions = DISEASE_CLASSES
            .iter()
            .zip(scores.iter())
            .map(|(name, &score)| (name.to_string(), score))
            .collect();

        Ok(DiseasePrediction {
            disease: DISEASE_CLASSES[best_idx].to_string(),
            confidence: *best_score,
            all_predictions,
        })
    }

    /// Decode, resize, and scale an image into a [1, 3, H, W] tensor
    fn preprocess(&self, bytes: &[u8]) -> Result<Tensor<DefaultBackend, 4>> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| ServiceError::Image(format!("could not decode image: {e}")))?;

        let size = self.config.image_size;
        let img = img
            .resize_exact(size as u32, size as u32, FilterType::Triangle)
            .to_rgb8();

        // HWC bytes to CHW floats in [0, 1]
        let mut pixels = vec![0.0f32; 3 * size * size];
        for (x, y, pixel) in img.enumerate_pixels() {
            let (x, y) = (x as usize, y as usize);
            for c in 0..3 {
                pixels[c * size * size + y * size + x] = pixel.0[c] as f32 / 255.0;
            }
        }

        Ok(Tensor::from_floats(
            TensorData::new(pixels, [1, 3, size, size]),
            &self.device,
        ))
    }

    /// Persist the classifier weights to the artifacts directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;

        self.model
            .clone()
            .save_file(dir.join(MODEL_FILE), &ModelRecorder::new())
            .map_err(|e| ServiceError::Model(format!("failed to save disease model: {e}")))?;

        Ok(())
    }

    /// Load persisted classifier weights from the artifacts directory
    pub fn load(dir: &Path, config: &DiseaseNetConfig, device: &Device) -> Result<Self> {
        let model_path = model_weights_path(dir);
        if !model_path.exists() {
            return Err(ServiceError::PathNotFound(model_path));
        }

        let model = DiseaseNet::<DefaultBackend>::new(config, device)
            .load_file(dir.join(MODEL_FILE), &ModelRecorder::new(), device)
            .map_err(|e| ServiceError::Model(format!("failed to load disease model: {e}")))?;

        Ok(Self {
            model,
            config: config.clone(),
            device: device.clone(),
        })
    }

    /// Load the persisted classifier, or train on placeholder data and
    /// persist the result when no weights are found. Runs synchronously at
    /// startup.
    pub fn load_or_train(
        dir: &Path,
        net_config: &DiseaseNetConfig,
        training_config: &DiseaseTrainingConfig,
        device: &Device,
    ) -> Result<Self> {
        match Self::load(dir, net_config, device) {
            Ok(detector) => {
                info!("Loaded persisted disease model from {}", dir.display());
                return Ok(detector);
            }
            Err(ServiceError::PathNotFound(_)) => {
                info!("No persisted disease model found, training from scratch");
            }
            Err(e) => {
                warn!("Failed to load persisted disease model ({e}), training from scratch");
            }
        }

        let model = train_disease_model::<TrainingBackend>(net_config, training_config, device)?;

        let detector = Self {
            model,
            config: net_config.clone(),
            device: device.clone(),
        };
        detector.save(dir)?;
        info!(
            "Persisted freshly trained disease model to {}",
            dir.display()
        );

        Ok(detector)
    }
}

fn model_weights_path(dir: &Path) -> PathBuf {
    let mut path = dir.join(MODEL_FILE);
    path.set_extension("mpk");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::default_device;

    fn quick_detector(dir: &Path) -> DiseaseDetector {
        let net_config = DiseaseNetConfig {
            image_size: 32,
            ..Default::default()
        };
        DiseaseDetector::load_or_train(
            dir,
            &net_config,
            &DiseaseTrainingConfig::quick(),
            &default_device(),
        )
        .unwrap()
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 180, 90]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_prediction_shape_and_range() {
        let dir = tempfile::tempdir().unwrap();
        let detector = quick_detector(dir.path());

        let prediction = detector.predict_bytes(&png_bytes(64, 48)).unwrap();

        assert!(DISEASE_CLASSES.contains(&prediction.disease.as_str()));
        assert!((0.0..=1.0).contains(&prediction.confidence));
        assert_eq!(prediction.all_predictions.len(), 7);

        let total: f32 = prediction.all_predictions.values().sum();
        assert!((total - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_top_class_matches_score_map() {
        let dir = tempfile::tempdir().unwrap();
        let detector = quick_detector(dir.path());

        let prediction = detector.predict_bytes(&png_bytes(32, 32)).unwrap();
        let top_score = prediction.all_predictions[&prediction.disease];
        assert!((top_score - prediction.confidence).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_image_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let detector = quick_detector(dir.path());

        let result = detector.predict_bytes(b"definitely not an image");
        assert!(matches!(result, Err(ServiceError::Image(_))));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let detector = quick_detector(dir.path());

        let bytes = png_bytes(40, 40);
        let before = detector.predict_bytes(&bytes).unwrap();

        let net_config = DiseaseNetConfig {
            image_size: 32,
            ..Default::default()
        };
        let loaded =
            DiseaseDetector::load(dir.path(), &net_config, &default_device()).unwrap();
        let after = loaded.predict_bytes(&bytes).unwrap();

        assert_eq!(before.disease, after.disease);
        assert!((before.confidence - after.confidence).abs() < 1e-5);
    }
}
