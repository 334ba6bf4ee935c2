use crate::error::MicroTorchError;
use crate::nn::init::{RandomSource, INIT_MEAN, INIT_STD};
use crate::nn::parameter::Parameter;
use crate::ops::activation::Activation;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::{Operand, Value};

/// A single unit computing `activation(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights, drawing weights and bias from `rng`.
    ///
    /// The weight vector and the bias are requested as two separate draws.
    pub fn new(
        nin: usize,
        activation: Activation,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, MicroTorchError> {
        let weights = rng.generate(nin, INIT_MEAN, INIT_STD)?;
        if weights.len() != nin {
            return Err(MicroTorchError::ShapeMismatch {
                expected: nin,
                actual: weights.len(),
                operation: "Neuron::new weights".to_string(),
            });
        }
        let bias = rng.generate(1, INIT_MEAN, INIT_STD)?;
        let bias = bias.first().copied().ok_or_else(|| MicroTorchError::ShapeMismatch {
            expected: 1,
            actual: 0,
            operation: "Neuron::new bias".to_string(),
        })?;
        Ok(Neuron::from_parameters(weights, bias, activation))
    }

    /// Creates a neuron with fixed initial weights and bias.
    pub fn from_parameters(weights: Vec<f64>, bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.into_iter().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
            activation,
        }
    }

    /// Input width this neuron accepts.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Builds the sub-graph `activation(w . x + b)` and returns its output node.
    ///
    /// # Errors
    /// * `ShapeMismatch` if `input.len()` differs from the weight count.
    /// * `UnsupportedOperand` if a raw input is NaN or infinite.
    pub fn forward(&self, input: &[Operand]) -> Result<Value, MicroTorchError> {
        if input.len() != self.weights.len() {
            return Err(MicroTorchError::ShapeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron forward".to_string(),
            });
        }
        let mut dot: Option<Value> = None;
        for (w, x) in self.weights.iter().zip(input) {
            let term = mul_op(w, &x.promote("Neuron forward")?);
            dot = Some(match dot {
                Some(acc) => add_op(&acc, &term),
                None => term,
            });
        }
        let z = match dot {
            Some(dot) => add_op(&dot, &self.bias),
            None => self.bias.value(),
        };
        Ok(self.activation.apply(&z))
    }

    /// Weights in order, then the bias.
    pub fn parameters(&self) -> Vec<Value> {
        self.weights
            .iter()
            .map(Parameter::value)
            .chain(std::iter::once(self.bias.value()))
            .collect()
    }

    pub fn named_parameters(&self) -> Vec<(String, Value)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight{}", i), w.value()))
            .chain(std::iter::once(("bias".to_string(), self.bias.value())))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
