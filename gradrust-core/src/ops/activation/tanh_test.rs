use crate::error::GradRustError;
use crate::ops::activation::tanh_op;
use crate::tape::Tape;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let y = tanh_op(&tape.leaf(0.5))?;
    assert_relative_eq!(y.data(), 0.5f64.tanh());
    assert_eq!(y.op_label(), "tanh");
    Ok(())
}

#[test]
fn test_tanh_backward_chain_rule() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    for x in [-1.5, 0.0, 0.8813735870195432] {
        let input = tape.leaf(x);
        let y = tanh_op(&input)?;
        y.backward();
        assert_relative_eq!(input.grad(), 1.0 - y.data() * y.data(), epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_tanh_saturates_without_nan() -> Result<(), GradRustError> {
    let tape = Tape::<f32>::new();
    let input = tape.leaf(50.0);
    let y = tanh_op(&input)?;
    y.backward();
    assert_eq!(y.data(), 1.0);
    assert_eq!(input.grad(), 0.0);
    Ok(())
}
