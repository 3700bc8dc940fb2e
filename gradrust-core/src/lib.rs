//! Scalar reverse-mode automatic differentiation with a small neural network
//! layer built on top of it.
//!
//! Every scalar lives on a [`Tape`], an arena that hands out stable node ids.
//! Operations on [`Value`] handles record new nodes on that tape, and
//! [`Value::backward`] walks the recorded graph in reverse topological order
//! to accumulate gradients.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod tape;
pub mod value;

pub(crate) mod node_data;

pub use autograd::{check_grad, to_dot, trace, BackwardOp, NodeId, Trace};
pub use error::GradRustError;
pub use ops::traits::{GradNumeric, Operand};
pub use tape::Tape;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
