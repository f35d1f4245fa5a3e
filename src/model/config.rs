//! Model Configuration Module
//!
//! Defines configuration structures for both network architectures and their
//! training hyperparameters. Defaults reproduce the demo training procedure:
//! the yield model trains for 100 epochs on 10 000 synthetic samples, the
//! disease model for 10 epochs on 1000/200 random placeholder samples.

use serde::{Deserialize, Serialize};

use crate::data::NUM_FEATURES;

/// Configuration for the yield regression network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldNetConfig {
    /// Number of input features (8 numeric + encoded crop)
    pub num_features: usize,

    /// Hidden layer widths
    pub hidden_units: [usize; 4],

    /// Dropout rate after the first hidden layer
    pub dropout1: f64,

    /// Dropout rate after the second hidden layer
    pub dropout2: f64,
}

impl Default for YieldNetConfig {
    fn default() -> Self {
        Self {
            num_features: NUM_FEATURES,
            hidden_units: [128, 64, 32, 16],
            dropout1: 0.3,
            dropout2: 0.2,
        }
    }
}

/// Training hyperparameters for the yield model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldTrainingConfig {
    /// Number of training epochs
    pub epochs: usize,

    /// Batch size
    pub batch_size: usize,

    /// Adam learning rate
    pub learning_rate: f64,

    /// Number of synthetic samples to generate
    pub n_samples: usize,

    /// Fraction of samples held out for validation
    pub val_fraction: f64,

    /// Random seed for data generation and splitting
    pub seed: u64,
}

impl Default for YieldTrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            batch_size: 32,
            learning_rate: 0.001,
            n_samples: 10_000,
            val_fraction: 0.2,
            seed: 42,
        }
    }
}

impl YieldTrainingConfig {
    /// A fast configuration for tests and smoke runs
    pub fn quick() -> Self {
        Self {
            epochs: 3,
            batch_size: 32,
            learning_rate: 0.001,
            n_samples: 256,
            val_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Configuration for the disease classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseNetConfig {
    /// Number of output classes
    pub num_classes: usize,

    /// Input image size (square)
    pub image_size: usize,

    /// Number of input channels (3 for RGB)
    pub in_channels: usize,

    /// Base number of convolutional filters in the backbone
    pub base_filters: usize,

    /// Hidden units in the classifier head
    pub head_units: usize,

    /// Dropout rate in the classifier head
    pub dropout_rate: f64,
}

impl Default for DiseaseNetConfig {
    fn default() -> Self {
        Self {
            num_classes: crate::NUM_DISEASE_CLASSES,
            image_size: crate::IMAGE_SIZE,
            in_channels: 3,
            base_filters: 16,
            head_units: 128,
            dropout_rate: 0.2,
        }
    }
}

/// Training hyperparameters for the disease model.
///
/// The training data is uniformly random pixels with uniformly random labels;
/// these values only control how long the placeholder training runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseTrainingConfig {
    /// Number of training epochs
    pub epochs: usize,

    /// Batch size
    pub batch_size: usize,

    /// Adam learning rate
    pub learning_rate: f64,

    /// Number of random training samples per epoch
    pub n_train: usize,

    /// Number of random validation samples
    pub n_val: usize,

    /// Random seed
    pub seed: u64,
}

impl Default for DiseaseTrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 10,
            batch_size: 32,
            learning_rate: 0.001,
            n_train: 1000,
            n_val: 200,
            seed: 42,
        }
    }
}

impl DiseaseTrainingConfig {
    /// A fast configuration for tests and smoke runs
    pub fn quick() -> Self {
        Self {
            epochs: 1,
            batch_size: 4,
            learning_rate: 0.001,
            n_train: 8,
            n_val: 4,
            seed: 42,
        }
    }
}
