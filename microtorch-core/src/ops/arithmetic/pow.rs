use crate::error::MicroTorchError;
use crate::value::Value;
use crate::value_data::Op;

/// Builds `a ^ exponent` for a constant exponent.
///
/// The exponent is a plain number and never part of the graph, so it is
/// never differentiated. Local gradient: `exponent * a ^ (exponent - 1)`.
///
/// # Errors
/// * `UnsupportedOperand` if `exponent` is NaN or infinite.
/// * `DivisionByZero` for a negative exponent on an exactly zero base.
pub fn pow_op(a: &Value, exponent: f64) -> Result<Value, MicroTorchError> {
    if !exponent.is_finite() {
        return Err(MicroTorchError::UnsupportedOperand {
            operation: "pow".to_string(),
            reason: format!("exponent {} is not a finite number", exponent),
        });
    }
    let base = a.data();
    if base == 0.0 && exponent < 0.0 {
        return Err(MicroTorchError::DivisionByZero {
            operation: "pow".to_string(),
        });
    }
    Ok(Value::from_op(base.powf(exponent), Op::Pow(exponent), vec![a.clone()]))
}

impl Value {
    /// `self ^ exponent`
    pub fn pow(&self, exponent: f64) -> Result<Value, MicroTorchError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
