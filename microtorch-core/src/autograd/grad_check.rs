use crate::error::MicroTorchError;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+h): {loss_plus}, f(x-h): {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicroTorchError),

    #[error("Step size must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

impl From<MicroTorchError> for GradCheckError {
    fn from(err: MicroTorchError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Central finite-difference estimate of the gradient of `func` at `inputs`.
///
/// `func` receives fresh leaves for every evaluation, so no gradient state is
/// shared between the perturbed graphs.
pub fn numerical_gradient<F>(
    func: &F,
    inputs: &[f64],
    epsilon: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicroTorchError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }
    let evaluate = |point: &[f64]| -> Result<f64, GradCheckError> {
        let leaves: Vec<Value> = point.iter().copied().map(Value::new).collect();
        Ok(func(&leaves)?.data())
    };

    let mut grads = Vec::with_capacity(inputs.len());
    let mut point = inputs.to_vec();
    for i in 0..inputs.len() {
        point[i] = inputs[i] + epsilon;
        let loss_plus = evaluate(&point)?;
        point[i] = inputs[i] - epsilon;
        let loss_minus = evaluate(&point)?;
        point[i] = inputs[i];

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        grads.push(numerical);
    }
    Ok(grads)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Builds the graph once on fresh leaves, runs `backward()` on its output and
/// compares every leaf gradient with the central-difference estimate.
/// A pair matches when it is within `tolerance` absolutely or relatively.
///
/// # Returns
/// The analytical gradients, in input order.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicroTorchError>,
{
    let leaves: Vec<Value> = inputs.iter().copied().map(Value::new).collect();
    let output = func(&leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    let numerical = numerical_gradient(&func, inputs, epsilon)?;

    for (i, (&a, &n)) in analytical.iter().zip(numerical.iter()).enumerate() {
        if !a.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: a,
            });
        }
        if !relative_eq!(a, n, epsilon = tolerance, max_relative = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: a,
                numerical_grad: n,
                difference: (a - n).abs(),
            });
        }
    }
    debug!("check_grad: {} inputs within tolerance {}", inputs.len(), tolerance);
    Ok(analytical)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
