use crate::error::MicroTorchError;
use crate::value::{Operand, Value};

/// The base trait for all neural network modules (layers, containers, etc.).
///
/// A module maps an input row to an output row of graph nodes and exposes its
/// learnable parameters in a fixed order. Optimizers rely on that order
/// staying the same from one call to the next.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `input`: one sample, as raw numbers and/or graph nodes.
    ///
    /// # Returns
    /// The output nodes of the module, or a `MicroTorchError` if an operation
    /// fails (for example a width mismatch).
    fn forward(&self, input: &[Operand]) -> Result<Vec<Value>, MicroTorchError>;

    /// Returns handles to all learnable parameters, including those of
    /// sub-modules, in construction order.
    fn parameters(&self) -> Vec<Value>;

    /// Same order as [`Module::parameters`], with hierarchical names
    /// (e.g. `"hidden.neuron0.weight1"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Returns a vector of direct child `Module`s.
    /// For modules that do not contain other modules, this should return an empty vector.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::Parameter;

    // Scales every input by one shared parameter.
    #[derive(Debug)]
    struct MockModule {
        scale: Parameter,
    }

    impl Module for MockModule {
        fn forward(&self, input: &[Operand]) -> Result<Vec<Value>, MicroTorchError> {
            input
                .iter()
                .map(|x| Ok(x.promote("MockModule")?.mul(&self.scale)))
                .collect()
        }

        fn parameters(&self) -> Vec<Value> {
            vec![self.scale.value()]
        }

        fn named_parameters(&self) -> Vec<(String, Value)> {
            vec![("scale".to_string(), self.scale.value())]
        }
    }

    #[test]
    fn test_module_defaults() -> Result<(), MicroTorchError> {
        let module = MockModule {
            scale: Parameter::new(2.0),
        };
        assert!(module.children().is_empty());
        assert_eq!(module.num_parameters(), 1);

        let out = module.forward(&[Operand::Scalar(1.5), Operand::Scalar(-1.0)])?;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].data(), 3.0);

        out[0].backward();
        assert_eq!(module.scale.grad(), 1.5);
        module.zero_grad();
        assert_eq!(module.scale.grad(), 0.0);
        Ok(())
    }
}
