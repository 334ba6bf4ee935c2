use crate::error::MicroTorchError;
use crate::nn::module::Module;
use crate::ops::activation::Activation;
use crate::value::{Operand, Value};

/// Layer that applies an activation element-wise.
///
/// This layer does not have any learnable parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActivationLayer {
    activation: Activation,
}

impl ActivationLayer {
    pub fn new(activation: Activation) -> Self {
        ActivationLayer { activation }
    }
}

impl Module for ActivationLayer {
    fn forward(&self, input: &[Operand]) -> Result<Vec<Value>, MicroTorchError> {
        input
            .iter()
            .map(|x| Ok(self.activation.apply(&x.promote("ActivationLayer forward")?)))
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        Vec::new()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::operand::scalars;

    #[test]
    fn test_activation_layer_forward() -> Result<(), MicroTorchError> {
        let layer = ActivationLayer::new(Activation::Relu);
        let out = layer.forward(&scalars(&[-1.0, 0.5, 2.0]))?;
        let data: Vec<f64> = out.iter().map(Value::data).collect();
        assert_eq!(data, vec![0.0, 0.5, 2.0]);
        assert!(layer.parameters().is_empty());
        assert!(layer.named_parameters().is_empty());
        Ok(())
    }
}
