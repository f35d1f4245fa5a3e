//! Inference module
//!
//! Request-time prediction for both models: the yield regressor (with its
//! fitted scaler and crop encoder) and the disease classifier (with image
//! preprocessing). Both predictors load persisted artifacts from disk and
//! fall back to training at startup when none exist.

pub mod disease_detector;
pub mod yield_predictor;

pub use disease_detector::{DiseaseDetector, DiseasePrediction, DISEASE_CLASSES};
pub use yield_predictor::{yield_recommendations, YieldPredictor};
