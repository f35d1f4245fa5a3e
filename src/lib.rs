//! # AgriSense
//!
//! A demo agricultural advisory web service built with the Burn framework.
//! Three HTTP endpoints are backed by a small regression network for crop
//! yield prediction (trained on synthetically generated data), an image
//! classifier for plant disease detection (trained on random placeholder
//! data), and a static table of agronomic recommendations.
//!
//! ## Modules
//!
//! - `data`: Synthetic dataset generation, feature scaling, crop encoding
//! - `model`: Network architectures and configuration built with Burn
//! - `training`: Training loops for both models
//! - `inference`: Request-time prediction and image preprocessing
//! - `recommend`: Static agronomic lookup tables and the engine over them
//! - `server`: axum HTTP gateway
//! - `utils`: Logging helpers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use agrisense::backend::default_device;
//! use agrisense::inference::YieldPredictor;
//! use agrisense::model::{YieldNetConfig, YieldTrainingConfig};
//!
//! let predictor = YieldPredictor::load_or_train(
//!     std::path::Path::new("artifacts"),
//!     &YieldNetConfig::default(),
//!     &YieldTrainingConfig::default(),
//!     &default_device(),
//! )?;
//! ```

pub mod backend;
pub mod data;
pub mod error;
pub mod inference;
pub mod model;
pub mod recommend;
pub mod server;
pub mod training;
pub mod utils;

// Re-export commonly used items for convenience
pub use data::{CropEncoder, FeatureVector, StandardScaler, CROP_TYPES, NUM_FEATURES};
pub use error::{Result, ServiceError};
pub use inference::{DiseaseDetector, DiseasePrediction, YieldPredictor, DISEASE_CLASSES};
pub use model::{DiseaseNet, DiseaseNetConfig, YieldNet, YieldNetConfig};
pub use recommend::RecommendationEngine;
pub use server::state::{AppState, SharedState};
pub use training::{train_disease_model, train_yield_model};

/// Number of disease classes the classifier distinguishes
pub const NUM_DISEASE_CLASSES: usize = 7;

/// Classifier input resolution (square, RGB)
pub const IMAGE_SIZE: usize = 224;
