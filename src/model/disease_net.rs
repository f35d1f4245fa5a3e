//! Disease Classifier Network
//!
//! Convolutional classifier for plant disease detection. A small conv
//! backbone feeds global average pooling and a trainable head: dropout, a
//! 128-unit ReLU dense layer, dropout, and a 7-way output.
//!
//! The backbone stands in for the original design's frozen ImageNet-pretrained
//! feature extractor. No pretrained weights are specified for this demo, so
//! the backbone is randomly initialized and excluded from gradient updates
//! during training (see [`DiseaseNet::forward_frozen_backbone`]). Combined
//! with the random placeholder training data, the classifier's output carries
//! no real-world disease signal.

use burn::{
    module::Module,
    nn::{
        conv::{Conv2d, Conv2dConfig},
        pool::{AdaptiveAvgPool2d, AdaptiveAvgPool2dConfig, MaxPool2d, MaxPool2dConfig},
        BatchNorm, BatchNormConfig, Dropout, DropoutConfig, Linear, LinearConfig,
        PaddingConfig2d, Relu,
    },
    tensor::{backend::Backend, Tensor},
};

use super::config::DiseaseNetConfig;

/// A backbone block with Conv2d, BatchNorm, ReLU, and MaxPool
#[derive(Module, Debug)]
pub struct ConvBlock<B: Backend> {
    conv: Conv2d<B>,
    bn: BatchNorm<B, 2>,
    relu: Relu,
    pool: MaxPool2d,
}

impl<B: Backend> ConvBlock<B> {
    fn new(in_channels: usize, out_channels: usize, device: &B::Device) -> Self {
        let conv = Conv2dConfig::new([in_channels, out_channels], [3, 3])
            .with_padding(PaddingConfig2d::Same)
            .init(device);
        let bn = BatchNormConfig::new(out_channels).init(device);
        let pool = MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init();

        Self {
            conv,
            bn,
            relu: Relu::new(),
            pool,
        }
    }

    fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 4> {
        let x = self.conv.forward(x);
        let x = self.bn.forward(x);
        let x = self.relu.forward(x);
        self.pool.forward(x)
    }
}

/// Plant disease classifier: conv backbone + trainable head
#[derive(Module, Debug)]
pub struct DiseaseNet<B: Backend> {
    conv1: ConvBlock<B>,
    conv2: ConvBlock<B>,
    conv3: ConvBlock<B>,

    global_pool: AdaptiveAvgPool2d,

    drop1: Dropout,
    fc: Linear<B>,
    drop2: Dropout,
    classifier: Linear<B>,

    num_classes: usize,
}

impl<B: Backend> DiseaseNet<B> {
    /// Create a new classifier from configuration
    pub fn new(config: &DiseaseNetConfig, device: &B::Device) -> Self {
        let base = config.base_filters;

        // Backbone: 3 -> 16 -> 32 -> 64, spatial 224 -> 112 -> 56 -> 28
        let conv1 = ConvBlock::new(config.in_channels, base, device);
        let conv2 = ConvBlock::new(base, base * 2, device);
        let conv3 = ConvBlock::new(base * 2, base * 4, device);

        let global_pool = AdaptiveAvgPool2dConfig::new([1, 1]).init();

        let drop1 = DropoutConfig::new(config.dropout_rate).init();
        let fc = LinearConfig::new(base * 4, config.head_units).init(device);
        let drop2 = DropoutConfig::new(config.dropout_rate).init();
        let classifier = LinearConfig::new(config.head_units, config.num_classes).init(device);

        Self {
            conv1,
            conv2,
            conv3,
            global_pool,
            drop1,
            fc,
            drop2,
            classifier,
            num_classes: config.num_classes,
        }
    }

    /// Backbone feature extraction: [B, C, H, W] -> [B, features]
    fn features(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = self.conv1.forward(x);
        let x = self.conv2.forward(x);
        let x = self.conv3.forward(x);

        let x = self.global_pool.forward(x);
        let [batch_size, channels, _, _] = x.dims();
        x.reshape([batch_size, channels])
    }

    /// Classifier head: dropout -> dense ReLU -> dropout -> logits
    fn head(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.drop1.forward(x);
        let x = Relu::new().forward(self.fc.forward(x));
        let x = self.drop2.forward(x);
        self.classifier.forward(x)
    }

    /// Forward pass producing logits of shape [batch_size, num_classes]
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        let features = self.features(x);
        self.head(features)
    }

    /// Training forward pass with the backbone frozen.
    ///
    /// Features are detached from the autodiff graph, so only the head
    /// receives gradients. BatchNorm running statistics in the backbone still
    /// update during the forward pass.
    pub fn forward_frozen_backbone(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        let features = self.features(x).detach();
        self.head(features)
    }

    /// Forward pass with softmax for inference
    pub fn forward_softmax(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        let logits = self.forward(x);
        burn::tensor::activation::softmax(logits, 1)
    }

    /// Get the number of output classes
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }
}
