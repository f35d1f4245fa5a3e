//! Training module for the demo models
//!
//! This module provides:
//! - The yield regression training loop (synthetic data, Adam, MSE)
//! - The disease classifier training loop (random placeholder data,
//!   frozen backbone, Adam, cross-entropy)
//!
//! Both loops run synchronously at process startup when no persisted model is
//! found; the serving path never trains.

pub mod disease_trainer;
pub mod yield_trainer;

pub use disease_trainer::train_disease_model;
pub use yield_trainer::{train_yield_model, TrainedYield};
