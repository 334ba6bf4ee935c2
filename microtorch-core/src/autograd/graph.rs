use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Identity of a node during traversal: the address of its shared cell.
pub type NodeId = *const RefCell<ValueData>;

impl Value {
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}

/// Builds a topological sort of the computation graph.
///
/// Depth-first post-order over an explicit stack, so graph depth is bounded by
/// memory rather than by the thread stack. A node is pushed once to expand its
/// operands and once more to be emitted after them; each node is emitted once.
pub(crate) fn build_topo(
    root: &Value,
    visited: &mut HashSet<NodeId>,
    sorted_list: &mut Vec<Value>,
) {
    let mut stack = vec![(root.clone(), false)];
    while let Some((node, children_processed)) = stack.pop() {
        if children_processed {
            sorted_list.push(node);
        } else if visited.insert(node.node_id()) {
            let operands = node.operands();
            stack.push((node, true));
            // Reversed so the first operand is emitted first.
            for operand in operands.into_iter().rev() {
                if !visited.contains(&operand.node_id()) {
                    stack.push((operand, false));
                }
            }
        }
    }
}

/// Returns the nodes reachable from `root`, dependencies first, root last.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(root, &mut visited, &mut sorted_list);
    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
