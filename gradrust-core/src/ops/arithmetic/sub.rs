// gradrust-core/src/ops/arithmetic/sub.rs

use crate::error::GradRustError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::traits::operand::resolve_binary;
use crate::ops::traits::{GradNumeric, Operand};
use crate::value::Value;

/// Subtracts two scalars, recorded as `a + (-b)`.
///
/// Raw numbers on either side are promoted first, so `2.0 - x` records a leaf
/// for `2.0` and negates `x`.
pub fn sub_op<T: GradNumeric>(
    a: impl Into<Operand<T>>,
    b: impl Into<Operand<T>>,
) -> Result<Value<T>, GradRustError> {
    let (tape, lhs, rhs) = resolve_binary(a.into(), b.into(), "sub")?;
    let lhs = tape.handle(lhs);
    let rhs = tape.handle(rhs);
    add_op(&lhs, neg_op(&rhs)?)
}
