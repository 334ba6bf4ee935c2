use crate::value::Value;
use crate::value_data::Op;
use std::rc::Rc;

impl Value {
    /// Forward value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Gradient accumulated into this node by backward passes.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Returns clones of the operand handles, in operation order.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// `true` for nodes built directly from a raw number.
    pub fn is_leaf(&self) -> bool {
        matches!(self.read_data().op, Op::Leaf)
    }

    /// Identity comparison: `true` when both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Overwrites the forward value.
    ///
    /// Only meaningful on leaves between training steps; interior nodes keep
    /// the value computed at construction and are rebuilt on the next forward.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Resets the gradient accumulator to exactly zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Adds `delta` into the gradient accumulator.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }
}
