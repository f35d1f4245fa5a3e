//! Disease Model Training
//!
//! Trains the classifier head on uniformly random pixel tensors with
//! uniformly random labels. This is acknowledged placeholder behavior: no
//! real disease dataset is specified for this demo, so the trained model's
//! output is statistically meaningless. The backbone is excluded from
//! gradient updates throughout.
//!
//! Batches are streamed from a seeded RNG rather than materialized up front,
//! so the full random dataset never has to sit in memory.

use burn::{
    module::AutodiffModule,
    nn::loss::CrossEntropyLossConfig,
    optim::{AdamConfig, GradientsParams, Optimizer},
    tensor::{backend::AutodiffBackend, ElementConversion, Int, Tensor, TensorData},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::Result;
use crate::model::{DiseaseNet, DiseaseNetConfig, DiseaseTrainingConfig};

/// Draw one batch of uniformly random images and labels
fn random_batch(
    rng: &mut StdRng,
    batch_size: usize,
    image_size: usize,
    num_classes: usize,
) -> (Vec<f32>, Vec<i64>) {
    let pixels = (0..batch_size * 3 * image_size * image_size)
        .map(|_| rng.gen::<f32>())
        .collect();
    let labels = (0..batch_size)
        .map(|_| rng.gen_range(0..num_classes) as i64)
        .collect();
    (pixels, labels)
}

/// Train the disease classifier head on random placeholder data.
pub fn train_disease_model<B: AutodiffBackend>(
    net_config: &DiseaseNetConfig,
    config: &DiseaseTrainingConfig,
    device: &B::Device,
) -> Result<DiseaseNet<B::InnerBackend>> {
    let mut model = DiseaseNet::<B>::new(net_config, device);
    let mut optimizer = AdamConfig::new().init();

    let image_size = net_config.image_size;
    let num_classes = net_config.num_classes;
    let num_batches = config.n_train.div_ceil(config.batch_size);

    info!(
        "Training disease classifier head on random placeholder data: \
        {} epochs, {} samples/epoch (output will carry no real disease signal)",
        config.epochs, config.n_train
    );

    for epoch in 0..config.epochs {
        // Reseeding per epoch replays the same random "dataset" each pass
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut total_loss = 0.0;

        for batch_idx in 0..num_batches {
            let remaining = config.n_train - batch_idx * config.batch_size;
            let batch_len = remaining.min(config.batch_size);

            let (pixels, labels) = random_batch(&mut rng, batch_len, image_size, num_classes);

            let images = Tensor::<B, 4>::from_floats(
                TensorData::new(pixels, [batch_len, 3, image_size, image_size]),
                device,
            );
            let targets = Tensor::<B, 1, Int>::from_data(
                TensorData::new(labels, [batch_len]),
                device,
            );

            // Backbone detached: only the head trains
            let logits = model.forward_frozen_backbone(images);
            let loss = CrossEntropyLossConfig::new()
                .init(&logits.device())
                .forward(logits, targets);

            let loss_value: f64 = loss.clone().into_scalar().elem();
            total_loss += loss_value;

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optimizer.step(config.learning_rate, model, grads);
        }

        let avg_loss = total_loss / num_batches.max(1) as f64;
        let (val_loss, val_accuracy) = evaluate::<B>(&model, net_config, config, device);

        info!(
            "Epoch {}/{}: train loss = {:.4}, val loss = {:.4}, val acc = {:.2}%",
            epoch + 1,
            config.epochs,
            avg_loss,
            val_loss,
            val_accuracy * 100.0
        );
    }

    info!("Disease classifier training complete");

    Ok(model.valid())
}

/// Validation pass over the (equally random) held-out samples
fn evaluate<B: AutodiffBackend>(
    model: &DiseaseNet<B>,
    net_config: &DiseaseNetConfig,
    config: &DiseaseTrainingConfig,
    device: &B::Device,
) -> (f64, f64) {
    let model_valid = model.valid();
    let image_size = net_config.image_size;
    let num_classes = net_config.num_classes;

    // Validation stream uses a distinct seed from training
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let num_batches = config.n_val.div_ceil(config.batch_size);

    let mut total_loss = 0.0;
    let mut correct = 0usize;
    let mut total = 0usize;

    for batch_idx in 0..num_batches {
        let remaining = config.n_val - batch_idx * config.batch_size;
        let batch_len = remaining.min(config.batch_size);

        let (pixels, labels) = random_batch(&mut rng, batch_len, image_size, num_classes);

        let images = Tensor::<B::InnerBackend, 4>::from_floats(
            TensorData::new(pixels, [batch_len, 3, image_size, image_size]),
            device,
        );
        let targets = Tensor::<B::InnerBackend, 1, Int>::from_data(
            TensorData::new(labels, [batch_len]),
            device,
        );

        let logits = model_valid.forward(images);
        let loss = CrossEntropyLossConfig::new()
            .init(&logits.device())
            .forward(logits.clone(), targets.clone());

        let loss_value: f64 = loss.into_scalar().elem();
        total_loss += loss_value;

        let predictions = logits.argmax(1).squeeze::<1>(1);
        let batch_correct: i64 = predictions.equal(targets).int().sum().into_scalar().elem();
        correct += batch_correct as usize;
        total += batch_len;
    }

    let avg_loss = total_loss / num_batches.max(1) as f64;
    let accuracy = if total > 0 {
        correct as f64 / total as f64
    } else {
        0.0
    };

    (avg_loss, accuracy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TrainingBackend;

    #[test]
    fn test_quick_training_runs() {
        let device = Default::default();
        let net_config = DiseaseNetConfig {
            image_size: 32,
            ..Default::default()
        };

        let model = train_disease_model::<TrainingBackend>(
            &net_config,
            &DiseaseTrainingConfig::quick(),
            &device,
        )
        .unwrap();

        assert_eq!(model.num_classes(), 7);
    }
}
