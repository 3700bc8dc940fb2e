use crate::autograd::BackwardOp;
use crate::error::GradRustError;
use crate::ops::arithmetic::pow_op;
use crate::tape::Tape;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let x = tape.leaf(3.0);
    let y = pow_op(&x, 2.0)?;
    assert_eq!(y.data(), 9.0);
    assert_eq!(y.op(), BackwardOp::Pow { base: x.id(), exponent: 2.0 });
    assert_eq!(y.op_label(), "**2");

    let root = pow_op(&tape.leaf(2.0), 0.5)?;
    assert_relative_eq!(root.data(), 1.41421356, epsilon = 1e-8);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), GradRustError> {
    // d(x^n)/dx = n*x^(n-1) = 3 * 2^2
    let tape = Tape::<f64>::new();
    let x = tape.leaf(2.0);
    let y = pow_op(&x, 3.0)?;
    y.backward();
    assert_relative_eq!(x.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_negative_base_integer_exponent() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let x = tape.leaf(-2.0);
    let y = pow_op(&x, 3.0)?;
    y.backward();
    assert_relative_eq!(y.data(), -8.0);
    assert_relative_eq!(x.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_negative_base_fractional_exponent_fails() {
    let tape = Tape::<f64>::new();
    let x = tape.leaf(-4.0);
    let nodes_before = tape.len();
    let result = pow_op(&x, 0.5);
    assert_eq!(
        result.err(),
        Some(GradRustError::InvalidExponentDomain {
            base: -4.0,
            exponent: 0.5
        })
    );
    // Nothing is recorded for a rejected operation.
    assert_eq!(tape.len(), nodes_before);
}

#[test]
fn test_pow_zero_base_negative_exponent_is_infinite() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let x = tape.leaf(0.0);
    let y = pow_op(&x, -1.0)?;
    assert!(y.data().is_infinite());
    Ok(())
}
