use crate::autograd;
use crate::value::Value;

impl Value {
    /// Runs reverse-mode differentiation from this node.
    ///
    /// Seeds this node's gradient with `1.0` and adds `d(self)/d(node)` into
    /// the gradient of every node reachable from it. Gradients are never
    /// reset here: call `zero_grad` on the leaves first unless accumulation
    /// across several passes is intended.
    pub fn backward(&self) {
        autograd::backward(self);
    }
}
