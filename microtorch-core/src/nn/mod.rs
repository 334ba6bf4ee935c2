// src/nn/mod.rs
//! Neurons, layers, losses and the `Module` trait tying them together.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod neuron;
pub mod parameter; // struct Parameter

// Re-export common items
pub use crate::ops::activation::Activation;
pub use init::{NormalInit, RandomSource, INIT_MEAN, INIT_STD};
pub use layers::{ActivationLayer, Layer};
pub use losses::{MSELoss, MSELossL2, Reduction};
pub use module::Module;
pub use neuron::Neuron;
pub use parameter::Parameter;
