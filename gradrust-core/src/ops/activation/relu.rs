use crate::autograd::BackwardOp;
use crate::error::GradRustError;
use crate::ops::traits::GradNumeric;
use crate::value::Value;

/// Applies the Rectified Linear Unit, recording `out = max(0, a)`.
///
/// Backward: `a.grad += out.grad` when `out.data > 0`, nothing otherwise (the
/// subgradient at exactly 0 is 0).
pub fn relu_op<T: GradNumeric>(a: &Value<T>) -> Result<Value<T>, GradRustError> {
    a.ensure_live()?;
    let x = a.data();
    let data = if x > T::zero() { x } else { T::zero() };
    Ok(a.tape().push(data, BackwardOp::Relu { input: a.id() }))
}
