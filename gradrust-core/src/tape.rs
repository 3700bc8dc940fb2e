use crate::autograd::{BackwardOp, NodeId};
use crate::node_data::NodeData;
use crate::ops::traits::GradNumeric;
use crate::value::Value;
use log::debug;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// An arena recording every scalar node of a computation graph.
///
/// Nodes are appended in creation order and addressed by their index, so a
/// node's operands always have smaller ids than the node itself. `Tape` is a
/// cheap handle: clones share the same arena.
///
/// The arena is single-threaded (`Rc<RefCell<_>>`). `backward()` mutates
/// gradients in place with no locking, so a tape must not be shared across
/// threads.
///
/// Nodes are reclaimed with [`Tape::truncate`]: record a mark with
/// [`Tape::len`] once the parameters exist, and truncate back to it after each
/// training step. Every node also carries a creation stamp, so a handle to a
/// truncated node is detected instead of silently reading whichever node later
/// reused its id.
pub struct Tape<T> {
    nodes: Rc<RefCell<Vec<NodeData<T>>>>,
    created: Rc<Cell<u64>>,
}

impl<T: GradNumeric> Tape<T> {
    /// Creates an empty tape.
    pub fn new() -> Self {
        Tape {
            nodes: Rc::new(RefCell::new(Vec::new())),
            created: Rc::new(Cell::new(0)),
        }
    }

    /// Records a leaf node wrapping `data`, with a zero gradient.
    pub fn leaf(&self, data: T) -> Value<T> {
        self.push(data, BackwardOp::Leaf)
    }

    /// Records one leaf node per element of `data`, in order.
    pub fn leaves(&self, data: &[T]) -> Vec<Value<T>> {
        data.iter().map(|&x| self.leaf(x)).collect()
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Returns `true` if both handles refer to the same arena.
    pub fn same_tape(&self, other: &Tape<T>) -> bool {
        Rc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Drops every node with an id of `mark` or above.
    ///
    /// Operands always have smaller ids than the nodes built from them, so
    /// the nodes below `mark` still form a complete graph. Their data and
    /// gradients are kept as they are. Handles to dropped nodes become stale:
    /// operations on them fail with `TruncatedNode` and accessors panic.
    ///
    /// A `mark` at or past the current length is a no-op.
    pub fn truncate(&self, mark: usize) {
        let mut nodes = self.nodes.borrow_mut();
        let len = nodes.len();
        if mark < len {
            nodes.truncate(mark);
            debug!("Tape: truncated {} nodes, {} remain", len - mark, mark);
        }
    }

    pub(crate) fn push(&self, data: T, op: BackwardOp<T>) -> Value<T> {
        let stamp = self.created.get();
        self.created.set(stamp + 1);
        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.len();
        nodes.push(NodeData::new(data, op, stamp));
        Value {
            tape: self.clone(),
            id,
            stamp,
        }
    }

    /// A handle to the node currently stored at `id`.
    pub(crate) fn handle(&self, id: NodeId) -> Value<T> {
        let stamp = self.nodes.borrow()[id].stamp;
        Value {
            tape: self.clone(),
            id,
            stamp,
        }
    }

    /// Whether `id` still holds the node created with `stamp`.
    pub(crate) fn is_live(&self, id: NodeId, stamp: u64) -> bool {
        self.nodes
            .borrow()
            .get(id)
            .map_or(false, |node| node.stamp == stamp)
    }

    /// Forward value of node `id`.
    pub(crate) fn data_of(&self, id: NodeId) -> T {
        self.nodes.borrow()[id].data
    }

    pub(crate) fn read(&self) -> Ref<'_, Vec<NodeData<T>>> {
        self.nodes.borrow()
    }

    pub(crate) fn try_read(&self) -> Option<Ref<'_, Vec<NodeData<T>>>> {
        self.nodes.try_borrow().ok()
    }

    pub(crate) fn write(&self) -> RefMut<'_, Vec<NodeData<T>>> {
        self.nodes.borrow_mut()
    }
}

impl<T: GradNumeric> Default for Tape<T> {
    fn default() -> Self {
        Tape::new()
    }
}

impl<T> Clone for Tape<T> {
    /// Shallow clone: the new handle records onto the same arena.
    fn clone(&self) -> Self {
        Tape {
            nodes: Rc::clone(&self.nodes),
            created: Rc::clone(&self.created),
        }
    }
}

impl<T> fmt::Debug for Tape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nodes.try_borrow() {
            Ok(nodes) => write!(f, "Tape(len={})", nodes.len()),
            Err(_) => write!(f, "Tape(<borrowed>)"),
        }
    }
}
