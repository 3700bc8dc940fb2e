// gradrust-core/src/ops/arithmetic/div.rs

use crate::error::GradRustError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::traits::operand::resolve_binary;
use crate::ops::traits::{GradNumeric, Operand};
use crate::value::Value;

/// Divides two scalars, recorded as `a * b ** -1`.
///
/// Division by a node holding 0 is not special-cased: the forward value is
/// `inf` or `NaN` per floating-point semantics.
pub fn div_op<T: GradNumeric>(
    a: impl Into<Operand<T>>,
    b: impl Into<Operand<T>>,
) -> Result<Value<T>, GradRustError> {
    let (tape, lhs, rhs) = resolve_binary(a.into(), b.into(), "div")?;
    let lhs = tape.handle(lhs);
    let rhs = tape.handle(rhs);
    mul_op(&lhs, pow_op(&rhs, -T::one())?)
}
