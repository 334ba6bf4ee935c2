// src/nn/layers/mod.rs
// Layers built from neurons, and parameter-free element-wise layers.

pub mod activation;
pub mod dense;

pub use activation::ActivationLayer;
pub use dense::Layer;
