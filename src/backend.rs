//! Backend abstraction - NdArray CPU backend
//!
//! The service targets ordinary server hardware, so the portable NdArray
//! backend is used for both training and inference. Training wraps it in
//! `Autodiff` for gradient computation.

use burn::backend::ndarray::{NdArray, NdArrayDevice};
use burn::backend::Autodiff;

/// The default backend for inference
pub type DefaultBackend = NdArray;

/// The default autodiff backend for training
pub type TrainingBackend = Autodiff<DefaultBackend>;

/// Get the default device (CPU)
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}

/// Get a human-readable name for the current backend
pub fn backend_name() -> &'static str {
    "NdArray (CPU)"
}
