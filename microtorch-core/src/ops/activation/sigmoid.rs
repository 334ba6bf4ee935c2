use crate::ops::activation::Activation;
use crate::value::Value;
use crate::value_data::Op;

/// Builds `1 / (1 + e^-a)`. Local gradient: `s * (1 - s)` for output `s`.
pub fn sigmoid_op(a: &Value) -> Value {
    Value::from_op(
        Activation::Sigmoid.forward(a.data()),
        Op::Sigmoid,
        vec![a.clone()],
    )
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}
