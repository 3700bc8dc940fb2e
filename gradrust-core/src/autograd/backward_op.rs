use crate::autograd::graph::NodeId;
use crate::node_data::NodeData;
use crate::ops::traits::GradNumeric;

/// Tagged backward rule stored on every node of a tape.
///
/// Each variant names the operation that produced the node together with the
/// ids of its operands (and the constant exponent for `Pow`). The backward
/// pass dispatches on the tag to apply the matching local derivative, so the
/// set of differentiable operations is closed: derived operations such as
/// subtraction or division are recorded as compositions of these primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp<T> {
    /// Node created directly from a raw number. Propagation is a no-op.
    Leaf,
    /// `out = lhs + rhs`
    Add { lhs: NodeId, rhs: NodeId },
    /// `out = lhs * rhs`
    Mul { lhs: NodeId, rhs: NodeId },
    /// `out = base ** exponent` for a constant exponent.
    Pow { base: NodeId, exponent: T },
    /// `out = max(0, input)`
    Relu { input: NodeId },
    /// `out = tanh(input)`
    Tanh { input: NodeId },
}

impl<T: GradNumeric> BackwardOp<T> {
    /// Returns the ids of the operands this node was derived from, in the
    /// order they were passed to the forward operation.
    ///
    /// An operand used twice (e.g. `x * x`) appears twice.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Relu { input } | BackwardOp::Tanh { input } => vec![input],
        }
    }

    /// Short tag naming the operation, for diagnostics only.
    pub fn label(&self) -> String {
        match self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("**{}", exponent),
            BackwardOp::Relu { .. } => "ReLU".to_string(),
            BackwardOp::Tanh { .. } => "tanh".to_string(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }

    /// Adds this node's contribution to the gradient of each operand.
    ///
    /// `out_data` and `out_grad` are the forward value and the fully
    /// accumulated gradient of the node owning this rule. Contributions are
    /// added, never assigned, so operands with several consumers sum them.
    pub(crate) fn propagate(&self, out_data: T, out_grad: T, nodes: &mut [NodeData<T>]) {
        match *self {
            BackwardOp::Leaf => {}
            BackwardOp::Add { lhs, rhs } => {
                nodes[lhs].grad += out_grad;
                nodes[rhs].grad += out_grad;
            }
            BackwardOp::Mul { lhs, rhs } => {
                // Read both operands before writing: lhs and rhs may be the same node.
                let lhs_data = nodes[lhs].data;
                let rhs_data = nodes[rhs].data;
                nodes[lhs].grad += rhs_data * out_grad;
                nodes[rhs].grad += lhs_data * out_grad;
            }
            BackwardOp::Pow { base, exponent } => {
                let base_data = nodes[base].data;
                let local = exponent * base_data.powf(exponent - T::one());
                nodes[base].grad += local * out_grad;
            }
            BackwardOp::Relu { input } => {
                // Subgradient at exactly 0 is 0.
                if out_data > T::zero() {
                    nodes[input].grad += out_grad;
                }
            }
            BackwardOp::Tanh { input } => {
                nodes[input].grad += (T::one() - out_data * out_data) * out_grad;
            }
        }
    }
}
