use crate::error::GradRustError;
use crate::ops::{relu_op, tanh_op};
use crate::ops::traits::GradNumeric;
use crate::value::Value;
use std::fmt;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Relu,
    Tanh,
    /// No non-linearity: the neuron outputs its weighted sum.
    Linear,
}

impl Activation {
    pub fn apply<T: GradNumeric>(&self, x: Value<T>) -> Result<Value<T>, GradRustError> {
        match self {
            Activation::Relu => relu_op(&x),
            Activation::Tanh => tanh_op(&x),
            Activation::Linear => Ok(x),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Relu => "ReLU",
            Activation::Tanh => "Tanh",
            Activation::Linear => "Linear",
        };
        write!(f, "{}", name)
    }
}
