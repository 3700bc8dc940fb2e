//! # Activation Functions
//!
//! Non-linear scalar activations with their own backward rule.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;

#[cfg(test)]
mod relu_test;
#[cfg(test)]
mod tanh_test;
