use crate::autograd::NodeId;
use crate::tape::Tape;

mod accessors;
mod autograd_methods;
mod debug;
mod traits;


/// A handle to one scalar node on a [`Tape`].
///
/// `Value` is the user-facing scalar: it exposes the node's forward `data`,
/// its accumulated `grad`, and the arithmetic/activation operations that
/// record new nodes. Cloning a `Value` clones the handle only; both clones
/// refer to the same node, so gradients accumulated through one are visible
/// through the other.
///
/// A handle outlives [`Tape::truncate`] only if its node was below the mark.
/// Handles to dropped nodes are stale: see [`Value::is_live`].
pub struct Value<T> {
    pub(crate) tape: Tape<T>,
    pub(crate) id: NodeId,
    pub(crate) stamp: u64,
}
