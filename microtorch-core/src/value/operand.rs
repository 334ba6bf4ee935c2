use crate::error::MicroTorchError;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// An input to a graph operation: either a raw number or an existing node.
///
/// Raw numbers never enter the graph silently. Every operation entry point
/// that accepts one calls [`Operand::promote`], which turns it into a fresh
/// leaf after checking that it is a usable number.
#[derive(Debug, Clone)]
pub enum Operand {
    Scalar(f64),
    Node(Value),
}

impl Operand {
    /// Builds a scalar operand from any primitive numeric type.
    ///
    /// # Errors
    /// `UnsupportedOperand` if the number has no `f64` representation.
    pub fn number<N: ToPrimitive + Debug>(n: N) -> Result<Self, MicroTorchError> {
        match n.to_f64() {
            Some(x) => Ok(Operand::Scalar(x)),
            None => Err(MicroTorchError::UnsupportedOperand {
                operation: "Operand::number".to_string(),
                reason: format!("{:?} is not representable as f64", n),
            }),
        }
    }

    /// Converts this operand into a graph node.
    ///
    /// Scalars become new leaves; nodes are returned as a shared handle.
    ///
    /// # Errors
    /// `UnsupportedOperand` for a NaN or infinite scalar.
    pub fn promote(&self, operation: &str) -> Result<Value, MicroTorchError> {
        match self {
            Operand::Scalar(x) if !x.is_finite() => Err(MicroTorchError::UnsupportedOperand {
                operation: operation.to_string(),
                reason: format!("{} is not a finite number", x),
            }),
            Operand::Scalar(x) => Ok(Value::new(*x)),
            Operand::Node(v) => Ok(v.clone()),
        }
    }

    /// Forward value carried by the operand, without promoting it.
    pub fn data(&self) -> f64 {
        match self {
            Operand::Scalar(x) => *x,
            Operand::Node(v) => v.data(),
        }
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Node(v)
    }
}

impl From<&Value> for Operand {
    fn from(v: &Value) -> Self {
        Operand::Node(v.clone())
    }
}

/// Wraps a row of raw numbers as operands.
pub fn scalars(xs: &[f64]) -> Vec<Operand> {
    xs.iter().copied().map(Operand::Scalar).collect()
}

/// Wraps a row of nodes as operands.
pub fn nodes(vs: &[Value]) -> Vec<Operand> {
    vs.iter().map(Operand::from).collect()
}
