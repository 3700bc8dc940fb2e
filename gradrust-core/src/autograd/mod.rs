//! Reverse-mode differentiation over the nodes of a [`Tape`](crate::Tape).

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod trace;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::NodeId;
pub use trace::{to_dot, trace, Trace};

#[cfg(test)]
mod graph_test;
