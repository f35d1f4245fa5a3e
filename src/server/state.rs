//! Application state for the HTTP server
//!
//! Both models and the recommendation engine are fully initialized before
//! the listener binds, so every handler sees ready components. The
//! predictors sit behind async mutexes: Burn module parameters are lazily
//! materialized internally and cannot be shared across threads without
//! exclusive access, so inference on each model is serialized. The
//! recommendation engine is plain immutable data and is shared lock-free.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;

use crate::inference::{DiseaseDetector, YieldPredictor};
use crate::recommend::RecommendationEngine;

/// Shared application state
pub struct AppState {
    /// Trained yield regression model with its preprocessors
    pub yield_predictor: Mutex<YieldPredictor>,
    /// Trained disease classifier
    pub disease_detector: Mutex<DiseaseDetector>,
    /// Static recommendation lookups
    pub engine: RecommendationEngine,
    /// Server start time
    pub started_at: Instant,
}

impl AppState {
    pub fn new(yield_predictor: YieldPredictor, disease_detector: DiseaseDetector) -> Self {
        Self {
            yield_predictor: Mutex::new(yield_predictor),
            disease_detector: Mutex::new(disease_detector),
            engine: RecommendationEngine::new(),
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub type SharedState = Arc<AppState>;
