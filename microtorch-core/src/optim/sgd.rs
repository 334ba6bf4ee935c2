use crate::error::MicroTorchError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log::{debug, warn};

/// Implements plain Stochastic Gradient Descent: `p -= lr * p.grad`.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: handles to the parameters to optimize, usually
    ///   `model.parameters()`.
    /// * `lr`: The learning rate.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), MicroTorchError> {
        let mut non_finite = 0usize;
        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                non_finite += 1;
            }
            param.set_data(param.data() - self.lr * grad);
        }
        if non_finite > 0 {
            warn!(
                "SGD step: {} of {} parameters have a non-finite gradient",
                non_finite,
                self.params.len()
            );
        }
        debug!("SGD step: updated {} parameters with lr {}", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
