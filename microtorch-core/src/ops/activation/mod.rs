//! Activation functions.
//!
//! [`Activation`] is a closed set. Each variant owns one entry of a fixed
//! table holding its forward function and its local derivative. The graph
//! ops `tanh`, `sigmoid` and `relu` compute their forward values from this
//! table, and the differentiation engine reads the derivative from it.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;

use crate::error::MicroTorchError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Activation applied to a neuron's pre-activation sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    /// Passes the pre-activation through unchanged.
    Identity,
    Relu,
    #[default]
    Tanh,
    Sigmoid,
}

struct ActivationRule {
    forward: fn(f64) -> f64,
    /// Local derivative, given the input and the already computed output.
    derivative: fn(f64, f64) -> f64,
}

// Indexed by `Activation as usize`; keep in declaration order.
static RULES: [ActivationRule; 4] = [
    ActivationRule {
        forward: |x| x,
        derivative: |_, _| 1.0,
    },
    ActivationRule {
        forward: |x| x.max(0.0),
        derivative: |x, _| if x > 0.0 { 1.0 } else { 0.0 },
    },
    ActivationRule {
        forward: f64::tanh,
        derivative: |_, out| 1.0 - out * out,
    },
    ActivationRule {
        forward: |x| 1.0 / (1.0 + (-x).exp()),
        derivative: |_, out| out * (1.0 - out),
    },
];

impl Activation {
    fn rule(self) -> &'static ActivationRule {
        &RULES[self as usize]
    }

    /// Forward value of the activation at `x`.
    pub fn forward(self, x: f64) -> f64 {
        (self.rule().forward)(x)
    }

    /// Local derivative at `input`, where `output = self.forward(input)`.
    pub fn derivative(self, input: f64, output: f64) -> f64 {
        (self.rule().derivative)(input, output)
    }

    /// Applies the activation to a graph node.
    ///
    /// `Identity` adds no node and returns the input handle.
    pub fn apply(self, z: &Value) -> Value {
        match self {
            Activation::Identity => z.clone(),
            Activation::Relu => relu_op(z),
            Activation::Tanh => tanh_op(z),
            Activation::Sigmoid => sigmoid_op(z),
        }
    }
}

impl FromStr for Activation {
    type Err = MicroTorchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identity" | "linear" | "none" => Ok(Activation::Identity),
            "relu" => Ok(Activation::Relu),
            "tanh" => Ok(Activation::Tanh),
            "sigmoid" => Ok(Activation::Sigmoid),
            _ => Err(MicroTorchError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Identity => "identity",
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
