use crate::autograd::graph::topological_sort;
use crate::ops::traits::GradNumeric;
use crate::value::Value;
use log::{debug, trace, warn};

impl<T: GradNumeric> Value<T> {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient to 1, then visits every node reachable
    /// through operand edges in reverse depth-first post-order, applying each
    /// node's backward rule. By the time a node's rule runs, every consumer of
    /// that node has already added its contribution, so no rule ever reads a
    /// partially accumulated gradient.
    ///
    /// Gradients are added to whatever the nodes already hold. Calling
    /// `backward()` again without zeroing first accumulates across calls.
    ///
    /// # Panics
    /// If this node was dropped by [`Tape::truncate`](crate::Tape::truncate).
    pub fn backward(&self) {
        if !self.is_live() {
            panic!("Value node {} was truncated from its tape", self.id);
        }
        let mut nodes = self.tape.write();
        let sorted = topological_sort(&nodes, self.id);
        debug!(
            "backward: {} nodes reachable from node {} (tape holds {})",
            sorted.len(),
            self.id,
            nodes.len()
        );

        nodes[self.id].grad = T::one();

        for &id in sorted.iter().rev() {
            let node = &nodes[id];
            let (op, data, grad) = (node.op, node.data, node.grad);
            trace!("backward: node {} ({}) grad={}", id, op.label(), grad);
            op.propagate(data, grad, &mut nodes[..]);
        }

        if let Some(&id) = sorted.iter().find(|&&id| !nodes[id].grad.is_finite()) {
            warn!(
                "backward: non-finite gradient {} on node {} ({})",
                nodes[id].grad,
                id,
                nodes[id].op.label()
            );
        }
        debug!("backward: done from node {}", self.id);
    }
}
