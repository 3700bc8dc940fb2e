// gradrust-core/src/ops/arithmetic/neg.rs

use crate::error::GradRustError;
use crate::ops::arithmetic::mul_op;
use crate::ops::traits::{GradNumeric, Operand};
use crate::value::Value;

/// Negates a scalar, recorded as `a * -1`.
pub fn neg_op<T: GradNumeric>(a: &Value<T>) -> Result<Value<T>, GradRustError> {
    mul_op(a, Operand::Scalar(-T::one()))
}
