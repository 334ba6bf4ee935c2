use crate::value::Value;
use crate::value_data::Op;

/// Builds `-a`. Local gradient: `-1`.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), Op::Neg, vec![a.clone()])
}

impl Value {
    pub fn neg(&self) -> Value {
        neg_op(self)
    }
}
