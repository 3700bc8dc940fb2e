use crate::autograd::BackwardOp;
use crate::error::GradRustError;
use crate::ops::traits::GradNumeric;
use crate::value::Value;

/// Applies the hyperbolic tangent, recording `out = tanh(a)`.
///
/// Backward: `a.grad += (1 - out.data ** 2) * out.grad`.
pub fn tanh_op<T: GradNumeric>(a: &Value<T>) -> Result<Value<T>, GradRustError> {
    a.ensure_live()?;
    let data = a.data().tanh();
    Ok(a.tape().push(data, BackwardOp::Tanh { input: a.id() }))
}
