//! Yield Model Training
//!
//! Trains the regression network on the synthetic yield dataset: seeded
//! generation, 80/20 train/validation split, scaler fit on the training split
//! only, Adam optimizer minimizing mean squared error.

use burn::{
    module::AutodiffModule,
    nn::loss::{MseLoss, Reduction},
    optim::{AdamConfig, GradientsParams, Optimizer},
    tensor::{backend::AutodiffBackend, ElementConversion, Tensor, TensorData},
};
use tracing::{debug, info};

use crate::data::{
    generate_yield_dataset, train_val_split, CropEncoder, StandardScaler, YieldSample,
    NUM_FEATURES,
};
use crate::error::Result;
use crate::model::{YieldNet, YieldNetConfig, YieldTrainingConfig};

/// Output of a yield training run: the trained model on the inference backend
/// plus the fitted preprocessors it must travel with.
pub struct TrainedYield<B: AutodiffBackend> {
    /// Trained model on the inner (non-autodiff) backend
    pub model: YieldNet<B::InnerBackend>,
    /// Scaler fitted on the training split
    pub scaler: StandardScaler,
    /// Crop label encoder
    pub encoder: CropEncoder,
    /// Final epoch average training loss
    pub final_train_loss: f64,
    /// Final epoch validation loss
    pub final_val_loss: f64,
}

fn rows_and_labels(samples: &[YieldSample]) -> (Vec<[f32; NUM_FEATURES]>, Vec<f32>) {
    let rows = samples.iter().map(|s| s.features).collect();
    let labels = samples.iter().map(|s| s.label).collect();
    (rows, labels)
}

/// Train the yield regression model on synthetic data.
pub fn train_yield_model<B: AutodiffBackend>(
    net_config: &YieldNetConfig,
    config: &YieldTrainingConfig,
    device: &B::Device,
) -> Result<TrainedYield<B>> {
    let encoder = CropEncoder::fit_known();

    info!(
        "Generating {} synthetic yield samples (seed {})",
        config.n_samples, config.seed
    );
    let samples = generate_yield_dataset(config.n_samples, config.seed, &encoder);
    let (train, val) = train_val_split(samples, config.val_fraction, config.seed);

    let (train_rows, train_labels) = rows_and_labels(&train);
    let (val_rows, val_labels) = rows_and_labels(&val);

    // Scaler statistics come from the training split only
    let scaler = StandardScaler::fit(&train_rows);
    let train_scaled = scaler.transform_all(&train_rows);
    let val_scaled = scaler.transform_all(&val_rows);

    let mut model = YieldNet::<B>::new(net_config, device);
    let mut optimizer = AdamConfig::new().init();

    let n_train = train_rows.len();
    let num_batches = n_train.div_ceil(config.batch_size);

    info!(
        "Training yield model: {} epochs, {} batches of {}",
        config.epochs, num_batches, config.batch_size
    );

    let mut final_train_loss = 0.0;
    let mut final_val_loss = 0.0;

    for epoch in 0..config.epochs {
        let mut total_loss = 0.0;

        for batch_idx in 0..num_batches {
            let start = batch_idx * config.batch_size;
            let end = (start + config.batch_size).min(n_train);
            let batch_len = end - start;

            let x = Tensor::<B, 2>::from_floats(
                TensorData::new(
                    train_scaled[start * NUM_FEATURES..end * NUM_FEATURES].to_vec(),
                    [batch_len, NUM_FEATURES],
                ),
                device,
            );
            let y = Tensor::<B, 2>::from_floats(
                TensorData::new(train_labels[start..end].to_vec(), [batch_len, 1]),
                device,
            );

            let prediction = model.forward(x);
            let loss = MseLoss::new().forward(prediction, y, Reduction::Mean);

            let loss_value: f64 = loss.clone().into_scalar().elem();
            total_loss += loss_value;

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optimizer.step(config.learning_rate, model, grads);
        }

        let avg_loss = total_loss / num_batches.max(1) as f64;
        let val_loss = validation_loss::<B>(&model, &val_scaled, &val_labels, device);

        final_train_loss = avg_loss;
        final_val_loss = val_loss;

        if (epoch + 1) % 10 == 0 || epoch == 0 || epoch + 1 == config.epochs {
            info!(
                "Epoch {}/{}: train mse = {:.4}, val mse = {:.4}",
                epoch + 1,
                config.epochs,
                avg_loss,
                val_loss
            );
        } else {
            debug!(
                "Epoch {}/{}: train mse = {:.4}, val mse = {:.4}",
                epoch + 1,
                config.epochs,
                avg_loss,
                val_loss
            );
        }
    }

    info!(
        "Yield training complete: train mse = {:.4}, val mse = {:.4}",
        final_train_loss, final_val_loss
    );

    Ok(TrainedYield {
        model: model.valid(),
        scaler,
        encoder,
        final_train_loss,
        final_val_loss,
    })
}

/// Validation loss on the inner (non-autodiff) model
fn validation_loss<B: AutodiffBackend>(
    model: &YieldNet<B>,
    val_scaled: &[f32],
    val_labels: &[f32],
    device: &B::Device,
) -> f64 {
    let n_val = val_labels.len();
    if n_val == 0 {
        return 0.0;
    }

    let model_valid = model.valid();

    let x = Tensor::<B::InnerBackend, 2>::from_floats(
        TensorData::new(val_scaled.to_vec(), [n_val, NUM_FEATURES]),
        device,
    );
    let y = Tensor::<B::InnerBackend, 2>::from_floats(
        TensorData::new(val_labels.to_vec(), [n_val, 1]),
        device,
    );

    let prediction = model_valid.forward(x);
    let loss = MseLoss::new().forward(prediction, y, Reduction::Mean);
    loss.into_scalar().elem()
}
