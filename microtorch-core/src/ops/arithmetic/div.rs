use crate::error::MicroTorchError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::{Operand, Value};

/// Builds `a / b` as `a * b ^ -1`.
///
/// # Errors
/// `DivisionByZero` if `b` evaluates to exactly zero.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, MicroTorchError> {
    if b.data() == 0.0 {
        return Err(MicroTorchError::DivisionByZero {
            operation: "div".to_string(),
        });
    }
    let reciprocal = pow_op(b, -1.0)?;
    Ok(mul_op(a, &reciprocal))
}

impl Value {
    /// `self / rhs`
    pub fn div(&self, rhs: &Value) -> Result<Value, MicroTorchError> {
        div_op(self, rhs)
    }

    /// `self / rhs`, promoting `rhs` to a new leaf.
    pub fn div_scalar(&self, rhs: f64) -> Result<Value, MicroTorchError> {
        let rhs = Operand::Scalar(rhs).promote("div")?;
        div_op(self, &rhs)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
