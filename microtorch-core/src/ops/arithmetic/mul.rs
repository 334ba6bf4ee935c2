use crate::error::MicroTorchError;
use crate::value::{Operand, Value};
use crate::value_data::Op;

/// Builds `a * b`.
///
/// Local gradients: `d/da = b`, `d/db = a`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul, vec![a.clone(), b.clone()])
}

impl Value {
    /// `self * rhs`
    pub fn mul(&self, rhs: &Value) -> Value {
        mul_op(self, rhs)
    }

    /// `self * rhs`, promoting `rhs` to a new leaf.
    pub fn mul_scalar(&self, rhs: f64) -> Result<Value, MicroTorchError> {
        let rhs = Operand::Scalar(rhs).promote("mul")?;
        Ok(mul_op(self, &rhs))
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
