// gradrust-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::GradRustError;
use crate::ops::traits::GradNumeric;
use crate::value::Value;

/// Raises `base` to a constant real `exponent`, recording `out = base ** exponent`.
///
/// The exponent is a plain number, never a node, so only the base receives a
/// gradient: `base.grad += exponent * base.data ** (exponent - 1) * out.grad`.
///
/// # Errors
/// `InvalidExponentDomain` when the result has no real value, i.e. a negative
/// base with a non-integer exponent. The check happens here, at the forward
/// call, not during backward.
///
/// A zero base with a negative exponent is not an error: it yields `inf` as
/// ordinary floating-point division by zero does.
pub fn pow_op<T: GradNumeric>(base: &Value<T>, exponent: T) -> Result<Value<T>, GradRustError> {
    base.ensure_live()?;
    let base_data = base.data();
    let data = base_data.powf(exponent);

    let negative_fractional = base_data < T::zero() && exponent.fract() != T::zero();
    let nan_from_finite = data.is_nan() && !base_data.is_nan() && !exponent.is_nan();
    if negative_fractional || nan_from_finite {
        return Err(GradRustError::InvalidExponentDomain {
            base: base_data.to_f64().unwrap_or(f64::NAN),
            exponent: exponent.to_f64().unwrap_or(f64::NAN),
        });
    }

    let base_id = base.id();
    Ok(base.tape().push(
        data,
        BackwardOp::Pow {
            base: base_id,
            exponent,
        },
    ))
}
