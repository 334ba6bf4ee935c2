use crate::value::Value;
use crate::value_data::Op;

/// Builds `e ^ a`. Local gradient: the output value itself.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Op::Exp, vec![a.clone()])
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}
