//! The gradient rule table.
//!
//! One pure function maps an operation tag, the operand values and the
//! node's own forward value to the local derivative with respect to each
//! operand. Nodes carry no closures, so every node has the same layout.

use crate::ops::activation::Activation;
use crate::value::Value;
use crate::value_data::Op;

/// Local derivatives `d(out)/d(operand_i)`. Unused slots are zero.
pub type LocalGrads = [f64; 2];

/// Computes the local derivatives of a node.
///
/// # Arguments
/// * `op`: the node's tag.
/// * `inputs`: forward values of the node's operands, in order.
/// * `output`: the node's own forward value.
pub fn local_gradients(op: Op, inputs: &[f64], output: f64) -> LocalGrads {
    match op {
        Op::Leaf => [0.0, 0.0],
        Op::Add => [1.0, 1.0],
        Op::Mul => [inputs[1], inputs[0]],
        Op::Pow(exponent) => [exponent * inputs[0].powf(exponent - 1.0), 0.0],
        Op::Neg => [-1.0, 0.0],
        Op::Log => [1.0 / inputs[0], 0.0],
        Op::Exp => [output, 0.0],
        Op::Tanh => [Activation::Tanh.derivative(inputs[0], output), 0.0],
        Op::Sigmoid => [Activation::Sigmoid.derivative(inputs[0], output), 0.0],
        Op::Relu => [Activation::Relu.derivative(inputs[0], output), 0.0],
    }
}

/// Adds this node's contribution into the gradients of its operands.
///
/// An operand listed twice (as in `a + a`) receives both contributions.
pub(crate) fn propagate(node: &Value) {
    let (op, output, upstream, operands) = {
        let guard = node.read_data();
        if guard.operands.is_empty() {
            return;
        }
        (guard.op, guard.data, guard.grad, guard.operands.clone())
    };
    let inputs: Vec<f64> = operands.iter().map(Value::data).collect();
    let local = local_gradients(op, &inputs, output);
    for (operand, d) in operands.iter().zip(local) {
        operand.acc_grad(d * upstream);
    }
}
