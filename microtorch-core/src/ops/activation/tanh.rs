use crate::ops::activation::Activation;
use crate::value::Value;
use crate::value_data::Op;

/// Builds `tanh(a)`. Local gradient: `1 - tanh(a)^2`.
pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(Activation::Tanh.forward(a.data()), Op::Tanh, vec![a.clone()])
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}
