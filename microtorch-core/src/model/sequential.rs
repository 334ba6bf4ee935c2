use crate::error::MicroTorchError;
use crate::nn::module::Module;
use crate::value::operand::nodes;
use crate::value::{Operand, Value};
use log::debug;

/// An ordered chain of named modules.
///
/// `forward` threads each module's output into the next one. Modules keep
/// their insertion order, which fixes the order of `parameters()`.
#[derive(Debug, Default)]
pub struct Model {
    modules: Vec<(String, Box<dyn Module>)>,
}

impl Model {
    pub fn new() -> Self {
        Model {
            modules: Vec::new(),
        }
    }

    pub fn add_module(&mut self, name: &str, module: Box<dyn Module>) {
        debug!(
            "Model: adding module '{}' at position {} ({} parameters)",
            name,
            self.modules.len(),
            module.num_parameters()
        );
        self.modules.push((name.to_string(), module));
    }

    /// Builder form of [`Model::add_module`].
    pub fn with_module(mut self, name: &str, module: Box<dyn Module>) -> Self {
        self.add_module(name, module);
        self
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn named_modules(&self) -> impl Iterator<Item = (&str, &dyn Module)> {
        self.modules.iter().map(|(n, m)| (n.as_str(), m.as_ref()))
    }

    /// Runs every sample through the model and keeps the first output of each.
    ///
    /// Each sample builds its own graph; the parameters are the only nodes the
    /// graphs share, so their gradients accumulate over the batch.
    ///
    /// # Errors
    /// The first error raised by any sample, or `ShapeMismatch` if the model
    /// produces no output for a sample.
    pub fn predict(&self, samples: &[Vec<Operand>]) -> Result<Vec<Value>, MicroTorchError> {
        samples
            .iter()
            .map(|sample| {
                self.forward(sample)?
                    .into_iter()
                    .next()
                    .ok_or_else(|| MicroTorchError::ShapeMismatch {
                        expected: 1,
                        actual: 0,
                        operation: "Model predict".to_string(),
                    })
            })
            .collect()
    }
}

impl Module for Model {
    fn forward(&self, input: &[Operand]) -> Result<Vec<Value>, MicroTorchError> {
        let mut current = input
            .iter()
            .map(|x| x.promote("Model forward"))
            .collect::<Result<Vec<_>, _>>()?;
        for (_, module) in &self.modules {
            current = module.forward(&nodes(&current))?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.modules
            .iter()
            .flat_map(|(_, m)| m.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (name, module) in &self.modules {
            for (param_name, param) in module.named_parameters() {
                params.push((format!("{}.{}", name, param_name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.modules.iter().map(|(_, m)| m.as_ref()).collect()
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
