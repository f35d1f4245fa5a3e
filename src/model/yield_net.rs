//! Yield Regression Network
//!
//! Fully connected network for crop yield regression: 128 -> 64 -> 32 -> 16
//! hidden units with ReLU activations, dropout after the first two hidden
//! layers, and a single linear output.

use burn::{
    module::Module,
    nn::{Dropout, DropoutConfig, Linear, LinearConfig, Relu},
    tensor::{backend::Backend, Tensor},
};

use super::config::YieldNetConfig;

/// Feed-forward regression network for yield prediction
#[derive(Module, Debug)]
pub struct YieldNet<B: Backend> {
    fc1: Linear<B>,
    drop1: Dropout,
    fc2: Linear<B>,
    drop2: Dropout,
    fc3: Linear<B>,
    fc4: Linear<B>,
    output: Linear<B>,
}

impl<B: Backend> YieldNet<B> {
    /// Create a new network from configuration
    pub fn new(config: &YieldNetConfig, device: &B::Device) -> Self {
        let [h1, h2, h3, h4] = config.hidden_units;

        Self {
            fc1: LinearConfig::new(config.num_features, h1).init(device),
            drop1: DropoutConfig::new(config.dropout1).init(),
            fc2: LinearConfig::new(h1, h2).init(device),
            drop2: DropoutConfig::new(config.dropout2).init(),
            fc3: LinearConfig::new(h2, h3).init(device),
            fc4: LinearConfig::new(h3, h4).init(device),
            output: LinearConfig::new(h4, 1).init(device),
        }
    }

    /// Forward pass
    ///
    /// # Arguments
    /// * `x` - Standardized features of shape [batch_size, num_features]
    ///
    /// # Returns
    /// * Predicted yield of shape [batch_size, 1]
    pub fn forward(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let relu = Relu::new();

        let x = relu.forward(self.fc1.forward(x));
        let x = self.drop1.forward(x);
        let x = relu.forward(self.fc2.forward(x));
        let x = self.drop2.forward(x);
        let x = relu.forward(self.fc3.forward(x));
        let x = relu.forward(self.fc4.forward(x));
        self.output.forward(x)
    }
}
