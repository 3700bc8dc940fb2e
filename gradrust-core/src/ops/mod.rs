//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation records exactly one new node on the tape of
//! its operands and tags it with a [`BackwardOp`](crate::BackwardOp).
//!
//! - **`_op` functions:** one per file, e.g. [`add_op`], [`pow_op`]. They compute
//!   the forward value and record the backward rule. The same operations are
//!   available as methods on [`Value`](crate::Value) and as `std::ops` sugar.
//! - **Primitives:** `add`, `mul`, `pow`, `relu`, `tanh` each carry their own
//!   backward rule.
//! - **Derived:** `neg`, `sub`, `div` are recorded as compositions of the
//!   primitives (`a * -1`, `a + (-b)`, `a * b ** -1`) and need no rule of
//!   their own.

pub mod activation;
pub mod arithmetic;
pub mod traits;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
