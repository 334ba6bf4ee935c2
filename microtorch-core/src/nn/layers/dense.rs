use crate::error::MicroTorchError;
use crate::nn::init::RandomSource;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::ops::activation::Activation;
use crate::value::{Operand, Value};

/// A fully connected layer: `nout` neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    /// Creates a layer of `nout` neurons sharing one activation.
    ///
    /// Neurons are initialized in order, each drawing its weights then its
    /// bias from `rng`.
    pub fn new(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, MicroTorchError> {
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    /// Builds a layer from already constructed neurons.
    ///
    /// # Errors
    /// `ShapeMismatch` if the neurons do not all accept the same input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, MicroTorchError> {
        let nin = neurons.first().map_or(0, Neuron::nin);
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(MicroTorchError::ShapeMismatch {
                expected: nin,
                actual: bad.nin(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// Applies every neuron to the same input, in construction order.
    fn forward(&self, input: &[Operand]) -> Result<Vec<Value>, MicroTorchError> {
        if input.len() != self.nin {
            return Err(MicroTorchError::ShapeMismatch {
                expected: self.nin,
                actual: input.len(),
                operation: "Layer forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.forward(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
