use crate::value::Value;
use crate::value_data::{Op, ValueData};
use std::cell::RefCell;
use std::rc::Rc;

impl Value {
    /// Creates a leaf node holding `data` with a zero gradient.
    ///
    /// Leaves are the constants and learnable parameters of a graph.
    pub fn new(data: f64) -> Self {
        Value::from_op(data, Op::Leaf, Vec::new())
    }

    /// Creates a leaf node and attaches a label to it.
    pub fn labeled(data: f64, label: &str) -> Self {
        Value::new(data).with_label(label)
    }

    /// Builds an interior node from an already computed forward value.
    ///
    /// Called by the `ops` module; the operand list must match `op.arity()`.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data, op, operands))),
        }
    }

    /// Attaches a label, consuming and returning the handle for chaining.
    pub fn with_label(self, label: &str) -> Self {
        self.write_data().label = Some(label.to_string());
        self
    }
}
