//! Model module for the network architectures using the Burn framework
//!
//! This module provides:
//! - The feed-forward regression network for yield prediction
//! - The convolutional classifier for disease detection
//! - Model and training configuration types

pub mod config;
pub mod disease_net;
pub mod yield_net;

pub use config::{
    DiseaseNetConfig, DiseaseTrainingConfig, YieldNetConfig, YieldTrainingConfig,
};
pub use disease_net::DiseaseNet;
pub use yield_net::YieldNet;
