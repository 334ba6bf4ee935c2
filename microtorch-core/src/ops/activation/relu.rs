use crate::ops::activation::Activation;
use crate::value::Value;
use crate::value_data::Op;

/// Builds `max(0, a)`. Local gradient: `1` if `a > 0`, else `0`.
pub fn relu_op(a: &Value) -> Value {
    Value::from_op(Activation::Relu.forward(a.data()), Op::Relu, vec![a.clone()])
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}
