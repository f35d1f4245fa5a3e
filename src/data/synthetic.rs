//! Synthetic yield dataset generation
//!
//! The yield model is a demo trained on synthetic data: each continuous
//! feature is drawn uniformly from a fixed agronomic range and the label is a
//! fixed linear combination of the features plus Gaussian noise. Generation
//! is seeded for reproducibility.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::data::{CropEncoder, NUM_FEATURES};

/// A single synthetic training sample: raw feature row + yield label
#[derive(Debug, Clone)]
pub struct YieldSample {
    /// Raw (unscaled) features: 8 numeric + encoded crop index
    pub features: [f32; NUM_FEATURES],
    /// Synthetic yield in tons/hectare
    pub label: f32,
}

/// Synthetic yield label: linear combination of the continuous features.
///
/// Coefficients: area*0.5, rainfall*0.002, (40-|temp-25|)*0.1, humidity*0.01,
/// (7-|ph-6.5|)*2, nitrogen*0.05, phosphorus*0.03, potassium*0.02. The crop
/// index carries no weight.
fn synthetic_yield(f: &[f32; NUM_FEATURES]) -> f32 {
    f[0] * 0.5
        + f[1] * 0.002
        + (40.0 - (f[2] - 25.0).abs()) * 0.1
        + f[3] * 0.01
        + (7.0 - (f[4] - 6.5).abs()) * 2.0
        + f[5] * 0.05
        + f[6] * 0.03
        + f[7] * 0.02
}

/// Generate the synthetic yield dataset.
///
/// Feature ranges: area [0.5,100], rainfall [200,2000], temperature [15,45],
/// humidity [30,90], ph [4.5,8.5], nitrogen [0,200], phosphorus [0,100],
/// potassium [0,200]; crop drawn uniformly from the known set. Labels carry
/// additive N(0, 2) noise.
pub fn generate_yield_dataset(
    n_samples: usize,
    seed: u64,
    encoder: &CropEncoder,
) -> Vec<YieldSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0f32, 2.0).expect("valid noise distribution");

    (0..n_samples)
        .map(|_| {
            let features = [
                rng.gen_range(0.5f32..100.0),
                rng.gen_range(200.0f32..2000.0),
                rng.gen_range(15.0f32..45.0),
                rng.gen_range(30.0f32..90.0),
                rng.gen_range(4.5f32..8.5),
                rng.gen_range(0.0f32..200.0),
                rng.gen_range(0.0f32..100.0),
                rng.gen_range(0.0f32..200.0),
                rng.gen_range(0..encoder.num_classes()) as f32,
            ];
            let label = synthetic_yield(&features) + noise.sample(&mut rng);
            YieldSample { features, label }
        })
        .collect()
}

/// Shuffle and split samples into (train, validation) sets.
pub fn train_val_split(
    mut samples: Vec<YieldSample>,
    val_fraction: f64,
    seed: u64,
) -> (Vec<YieldSample>, Vec<YieldSample>) {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let n_val = ((samples.len() as f64) * val_fraction).round() as usize;
    let n_train = samples.len().saturating_sub(n_val);
    let val = samples.split_off(n_train);
    (samples, val)
}
