use crate::error::MicroTorchError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::{Operand, Value};

/// Builds `a - b` as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

impl Value {
    /// `self - rhs`
    pub fn sub(&self, rhs: &Value) -> Value {
        sub_op(self, rhs)
    }

    /// `self - rhs`, promoting `rhs` to a new leaf.
    pub fn sub_scalar(&self, rhs: f64) -> Result<Value, MicroTorchError> {
        let rhs = Operand::Scalar(rhs).promote("sub")?;
        Ok(sub_op(self, &rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_data::Op;

    #[test]
    fn test_sub_forward_and_backward() {
        let a = Value::new(5.0);
        let b = Value::new(2.0);
        let c = a.sub(&b);
        assert_eq!(c.data(), 3.0);
        assert_eq!(c.op(), Op::Add);
        c.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    fn test_sub_self_is_zero_with_cancelling_gradients() {
        let a = Value::new(7.0);
        let c = a.sub(&a);
        assert_eq!(c.data(), 0.0);
        c.backward();
        assert_eq!(a.grad(), 0.0);
    }

    #[test]
    fn test_sub_scalar() -> Result<(), MicroTorchError> {
        let a = Value::new(1.0);
        let c = a.sub_scalar(0.25)?;
        assert_eq!(c.data(), 0.75);
        Ok(())
    }
}
