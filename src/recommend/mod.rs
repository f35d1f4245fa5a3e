//! Recommendation module
//!
//! Static agronomic knowledge base: medicine suggestions per disease,
//! treatment tips, and cultivation advice per crop and season. The tables
//! are hand-authored constants; the engine layers direct lookups with fixed
//! fallbacks on top, no persistence and no mutation after construction.

pub mod engine;
pub mod tables;

pub use engine::{CropRecommendations, MedicineSuggestions, RecommendationEngine};
pub use tables::MedicineRecord;
