//! Reverse-mode differentiation over scalar graphs.
//!
//! [`backward`] orders the graph reachable from a root with a depth-first
//! post-order traversal, seeds the root gradient with `1.0`, and walks the
//! order backwards applying the rule table of [`backward_op`].

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use graph::{topological_sort, NodeId};

use crate::value::Value;
use log::{debug, trace};

/// Propagates `d(root)/d(node)` into every node reachable from `root`.
///
/// Contributions are added to the existing accumulators; nothing is zeroed.
/// The root gradient is set (not added) to `1.0`.
pub fn backward(root: &Value) {
    let order = topological_sort(root);
    debug!("backward: {} nodes reachable from root", order.len());

    root.set_grad(1.0);
    for node in order.iter().rev() {
        trace!("backward: propagating through {:?}", node);
        backward_op::propagate(node);
    }
}
