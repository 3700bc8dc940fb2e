// gradrust-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::GradRustError;
use crate::ops::traits::operand::resolve_binary;
use crate::ops::traits::{GradNumeric, Operand};
use crate::value::Value;

/// Adds two scalars, recording `out = a + b`.
///
/// Either operand may be a raw number; it is promoted to a leaf on the other
/// operand's tape. Backward: both operands receive `out.grad`.
pub fn add_op<T: GradNumeric>(
    a: impl Into<Operand<T>>,
    b: impl Into<Operand<T>>,
) -> Result<Value<T>, GradRustError> {
    let (tape, lhs, rhs) = resolve_binary(a.into(), b.into(), "add")?;
    let data = tape.data_of(lhs) + tape.data_of(rhs);
    Ok(tape.push(data, BackwardOp::Add { lhs, rhs }))
}
