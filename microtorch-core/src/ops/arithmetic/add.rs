// microtorch-core/src/ops/arithmetic/add.rs

use crate::error::MicroTorchError;
use crate::value::{Operand, Value};
use crate::value_data::Op;

/// Builds `a + b`.
///
/// Local gradients: `d/da = 1`, `d/db = 1`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add, vec![a.clone(), b.clone()])
}

impl Value {
    /// `self + rhs`
    pub fn add(&self, rhs: &Value) -> Value {
        add_op(self, rhs)
    }

    /// `self + rhs`, promoting `rhs` to a new leaf.
    pub fn add_scalar(&self, rhs: f64) -> Result<Value, MicroTorchError> {
        let rhs = Operand::Scalar(rhs).promote("add")?;
        Ok(add_op(self, &rhs))
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
