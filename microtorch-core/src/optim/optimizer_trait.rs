use crate::error::MicroTorchError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// This method applies the optimization algorithm to update the parameters
    /// managed by the optimizer, using their accumulated gradients.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `MicroTorchError` otherwise.
    fn step(&mut self) -> Result<(), MicroTorchError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call this before each backward pass: gradients otherwise accumulate
    /// across iterations.
    fn zero_grad(&mut self);
}
