//! Feature standardization
//!
//! Standard scaler (zero mean, unit variance per column). Statistics are fit
//! on the training split only and reused verbatim at inference time, so a
//! persisted scaler must travel with its model.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::NUM_FEATURES;
use crate::error::{Result, ServiceError};

/// Per-column standardization statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl StandardScaler {
    /// Fit the scaler on a set of feature rows
    pub fn fit(rows: &[[f32; NUM_FEATURES]]) -> Self {
        let n = rows.len().max(1) as f32;

        let mut mean = vec![0.0f32; NUM_FEATURES];
        for row in rows {
            for (m, &v) in mean.iter_mut().zip(row.iter()) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut var = vec![0.0f32; NUM_FEATURES];
        for row in rows {
            for (i, &v) in row.iter().enumerate() {
                let d = v - mean[i];
                var[i] += d * d;
            }
        }
        // Constant columns get std 1 so transform stays finite
        let std = var
            .into_iter()
            .map(|v| {
                let s = (v / n).sqrt();
                if s > f32::EPSILON {
                    s
                } else {
                    1.0
                }
            })
            .collect();

        Self { mean, std }
    }

    /// Standardize a single feature row
    pub fn transform(&self, row: &[f32; NUM_FEATURES]) -> [f32; NUM_FEATURES] {
        let mut out = [0.0f32; NUM_FEATURES];
        for i in 0..NUM_FEATURES {
            out[i] = (row[i] - self.mean[i]) / self.std[i];
        }
        out
    }

    /// Standardize a batch of rows into a flat vector (row-major)
    pub fn transform_all(&self, rows: &[[f32; NUM_FEATURES]]) -> Vec<f32> {
        rows.iter()
            .flat_map(|row| self.transform(row))
            .collect()
    }

    /// Save the scaler to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a scaler from a JSON file
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

    fn sample_rows() -> Vec<[f32; NUM_FEATURES]> {
        vec![
            [1.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [3.0, 20.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [5.0, 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ]
    }

    #[test]
    fn test_fit_transform_zero_mean() {
        let rows = sample_rows();
        let scaler = StandardScaler::fit(&rows);

        let transformed: Vec<_> = rows.iter().map(|r| scaler.transform(r)).collect();
        let mean0: f32 = transformed.iter().map(|r| r[0]).sum::<f32>() / 3.0;
        assert!(mean0.abs() < 1e-6);
    }

    #[test]
    fn test_constant_column_stays_finite() {
        let rows = sample_rows();
        let scaler = StandardScaler::fit(&rows);

        // Columns 2..9 are constant zero; transform must not produce NaN
        let out = scaler.transform(&rows[0]);
        assert!(out.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");

        let scaler = StandardScaler::fit(&sample_rows());
        scaler.save(&path).unwrap();

        let loaded = StandardScaler::load(&path).unwrap();
        assert_eq!(loaded, scaler);
    }
}
