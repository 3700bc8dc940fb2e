// gradrust-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::GradRustError;
use crate::ops::traits::operand::resolve_binary;
use crate::ops::traits::{GradNumeric, Operand};
use crate::value::Value;

/// Multiplies two scalars, recording `out = a * b`.
///
/// Backward (product rule): `a.grad += b.data * out.grad` and
/// `b.grad += a.data * out.grad`.
pub fn mul_op<T: GradNumeric>(
    a: impl Into<Operand<T>>,
    b: impl Into<Operand<T>>,
) -> Result<Value<T>, GradRustError> {
    let (tape, lhs, rhs) = resolve_binary(a.into(), b.into(), "mul")?;
    let data = tape.data_of(lhs) * tape.data_of(rhs);
    Ok(tape.push(data, BackwardOp::Mul { lhs, rhs }))
}
