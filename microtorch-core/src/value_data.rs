use crate::value::Value;
use std::fmt;
use std::rc::Rc;

/// The operation that produced a node of the computation graph.
///
/// The tag is all the differentiation engine needs to pick the local
/// gradient rule for a node; operand values are read from the operand
/// handles themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// A node built directly from a raw number (constant or parameter).
    Leaf,
    /// `operands[0] + operands[1]`
    Add,
    /// `operands[0] * operands[1]`
    Mul,
    /// `operands[0] ^ exponent`, the exponent being a constant.
    Pow(f64),
    /// `-operands[0]`
    Neg,
    /// Natural logarithm of `operands[0]`.
    Log,
    /// `e ^ operands[0]`
    Exp,
    /// Hyperbolic tangent of `operands[0]`.
    Tanh,
    /// Logistic sigmoid of `operands[0]`.
    Sigmoid,
    /// `max(0, operands[0])`
    Relu,
}

impl Op {
    /// Number of operand edges a node with this tag carries.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_) | Op::Neg | Op::Log | Op::Exp | Op::Tanh | Op::Sigmoid | Op::Relu => 1,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, ""),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(exponent) => write!(f, "**{}", exponent),
            Op::Neg => write!(f, "neg"),
            Op::Log => write!(f, "log"),
            Op::Exp => write!(f, "exp"),
            Op::Tanh => write!(f, "tanh"),
            Op::Sigmoid => write!(f, "sigmoid"),
            Op::Relu => write!(f, "relu"),
        }
    }
}

/// Internal state of a scalar node, shared behind the [`Value`] handle.
pub struct ValueData {
    /// Forward value. Only leaves are ever rewritten (by an optimizer step).
    pub(crate) data: f64,
    /// Accumulated gradient of the last backward root with respect to `data`.
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Operand handles, in the order the operation consumed them.
    pub(crate) operands: Vec<Value>,
    pub(crate) label: Option<String>,
}

impl ValueData {
    pub(crate) fn new(data: f64, op: Op, operands: Vec<Value>) -> Self {
        debug_assert_eq!(op.arity(), operands.len());
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
            label: None,
        }
    }
}

// Dropping a root releases its operand chain iteratively: the default drop
// recurses once per node and overflows the stack on deep graphs.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(value) = pending.pop() {
            // Nodes still shared elsewhere stay intact.
            if Rc::strong_count(&value.data) == 1 {
                if let Ok(mut inner) = value.data.try_borrow_mut() {
                    pending.append(&mut inner.operands);
                }
            }
        }
    }
}
