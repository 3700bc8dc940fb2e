use crate::autograd::{BackwardOp, NodeId};
use crate::error::GradRustError;
use crate::node_data::NodeData;
use crate::ops;
use crate::ops::traits::{GradNumeric, Operand};
use crate::tape::Tape;
use crate::value::Value;

impl<T: GradNumeric> Value<T> {
    /// Runs `f` on this handle's node.
    ///
    /// # Panics
    /// If the node was dropped by [`Tape::truncate`].
    fn with_node<R>(&self, f: impl FnOnce(&mut NodeData<T>) -> R) -> R {
        let mut nodes = self.tape.write();
        match nodes.get_mut(self.id) {
            Some(node) if node.stamp == self.stamp => f(node),
            _ => panic!("Value node {} was truncated from its tape", self.id),
        }
    }

    /// `Err(TruncatedNode)` if the node was dropped by [`Tape::truncate`].
    pub(crate) fn ensure_live(&self) -> Result<(), GradRustError> {
        if self.is_live() {
            Ok(())
        } else {
            Err(GradRustError::TruncatedNode { id: self.id })
        }
    }

    /// Whether the node behind this handle is still on its tape.
    pub fn is_live(&self) -> bool {
        self.tape.is_live(self.id, self.stamp)
    }

    /// Forward value of this node.
    pub fn data(&self) -> T {
        self.with_node(|node| node.data)
    }

    /// Gradient accumulated into this node so far.
    pub fn grad(&self) -> T {
        self.with_node(|node| node.grad)
    }

    /// Stable index of this node on its tape.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tape this node is recorded on.
    pub fn tape(&self) -> &Tape<T> {
        &self.tape
    }

    /// Backward rule of the operation that produced this node.
    pub fn op(&self) -> BackwardOp<T> {
        self.with_node(|node| node.op)
    }

    /// Tag of the producing operation (`"+"`, `"*"`, `"**2"`, `"ReLU"`, `"tanh"`),
    /// empty for leaves. Diagnostics only.
    pub fn op_label(&self) -> String {
        self.op().label()
    }

    pub fn label(&self) -> Option<String> {
        self.with_node(|node| node.label.clone())
    }

    /// Attaches a diagnostic name to this node and returns the handle.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.with_node(|node| node.label = Some(label));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    /// Handles to the direct predecessors of this node, in operand order.
    pub fn operands(&self) -> Vec<Value<T>> {
        self.op()
            .inputs()
            .into_iter()
            .map(|id| self.tape.handle(id))
            .collect()
    }

    /// Overwrites the gradient of this node.
    pub fn set_grad(&self, grad: T) {
        self.with_node(|node| node.grad = grad);
    }

    /// Resets the gradient of this node to zero. `data` is untouched.
    pub fn zero_grad(&self) {
        self.set_grad(T::zero());
    }

    /// Replaces the forward value of a leaf node.
    ///
    /// This is how an external optimiser updates parameters between passes.
    /// Nodes produced by an operation keep the value they were computed with,
    /// so calling this on a non-leaf fails with `NotALeaf`.
    pub fn set_data(&self, data: T) -> Result<(), GradRustError> {
        self.ensure_live()?;
        let id = self.id;
        self.with_node(|node| {
            if !node.op.is_leaf() {
                return Err(GradRustError::NotALeaf {
                    id,
                    op: node.op.label(),
                    operation: "set_data".to_string(),
                });
            }
            node.data = data;
            Ok(())
        })
    }

    // --- Operations (see `crate::ops`) ---

    pub fn add(&self, other: impl Into<Operand<T>>) -> Result<Value<T>, GradRustError> {
        ops::add_op(self, other)
    }

    pub fn mul(&self, other: impl Into<Operand<T>>) -> Result<Value<T>, GradRustError> {
        ops::mul_op(self, other)
    }

    pub fn sub(&self, other: impl Into<Operand<T>>) -> Result<Value<T>, GradRustError> {
        ops::sub_op(self, other)
    }

    pub fn div(&self, other: impl Into<Operand<T>>) -> Result<Value<T>, GradRustError> {
        ops::div_op(self, other)
    }

    /// `other - self`, for a raw number on the left.
    pub fn rsub(&self, other: T) -> Result<Value<T>, GradRustError> {
        ops::sub_op(Operand::Scalar(other), self)
    }

    /// `other / self`, for a raw number on the left.
    pub fn rdiv(&self, other: T) -> Result<Value<T>, GradRustError> {
        ops::div_op(Operand::Scalar(other), self)
    }

    pub fn neg(&self) -> Result<Value<T>, GradRustError> {
        ops::neg_op(self)
    }

    /// Raises this node to a constant power.
    pub fn pow(&self, exponent: T) -> Result<Value<T>, GradRustError> {
        ops::pow_op(self, exponent)
    }

    pub fn relu(&self) -> Result<Value<T>, GradRustError> {
        ops::relu_op(self)
    }

    pub fn tanh(&self) -> Result<Value<T>, GradRustError> {
        ops::tanh_op(self)
    }
}
