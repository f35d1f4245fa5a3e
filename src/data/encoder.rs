//! Categorical crop encoder
//!
//! Maps the closed set of known crop names to integer indices. Unknown crop
//! names encode to index 0 rather than failing, matching the request-handling
//! contract (garbage-in is accepted silently).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::CROP_TYPES;
use crate::error::{Result, ServiceError};

/// Label encoder for the crop type feature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropEncoder {
    classes: Vec<String>,
}

impl CropEncoder {
    /// Fit the encoder on the five known crop types
    pub fn fit_known() -> Self {
        Self {
            classes: CROP_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Encode a crop name to its index. Unknown names map to 0.
    pub fn encode(&self, crop: &str) -> usize {
        self.classes.iter().position(|c| c == crop).unwrap_or(0)
    }

    /// Number of known classes
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// The known class names, in index order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Save the encoder to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load an encoder from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ServiceError::PathNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_crops_encode_in_order() {
        let encoder = CropEncoder::fit_known();
        assert_eq!(encoder.encode("wheat"), 0);
        assert_eq!(encoder.encode("rice"), 1);
        assert_eq!(encoder.encode("corn"), 2);
        assert_eq!(encoder.encode("soybean"), 3);
        assert_eq!(encoder.encode("cotton"), 4);
    }

    #[test]
    fn test_unknown_crop_defaults_to_zero() {
        let encoder = CropEncoder::fit_known();
        assert_eq!(encoder.encode("quinoa"), 0);
        assert_eq!(encoder.encode(""), 0);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoder.json");

        let encoder = CropEncoder::fit_known();
        encoder.save(&path).unwrap();

        let loaded = CropEncoder::load(&path).unwrap();
        assert_eq!(loaded, encoder);
    }

    #[test]
    fn test_load_missing_file() {
        let result = CropEncoder::load(Path::new("/nonexistent/encoder.json"));
        assert!(result.is_err());
    }
}
