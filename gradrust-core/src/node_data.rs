use crate::autograd::BackwardOp;

/// Storage for a single scalar node on a [`Tape`](crate::Tape).
///
/// The tape owns one `NodeData` per node; [`Value`](crate::Value) handles only
/// carry the node's index into that arena.
#[derive(Debug, Clone)]
pub(crate) struct NodeData<T> {
    /// Forward result of the operation, or the raw number for a leaf.
    pub(crate) data: T,
    /// Gradient of the last back-propagated output with respect to this node.
    pub(crate) grad: T,
    /// How to push `grad` back into the operands. Also identifies the operands.
    pub(crate) op: BackwardOp<T>,
    /// Optional diagnostic name, shown by `to_dot`.
    pub(crate) label: Option<String>,
    /// Creation serial, unique per tape even when an id is reused after truncation.
    pub(crate) stamp: u64,
}

impl<T: num_traits::Zero> NodeData<T> {
    pub(crate) fn new(data: T, op: BackwardOp<T>, stamp: u64) -> Self {
        NodeData {
            data,
            grad: T::zero(),
            op,
            label: None,
            stamp,
        }
    }
}
