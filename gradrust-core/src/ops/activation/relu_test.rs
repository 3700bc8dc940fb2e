use crate::autograd::BackwardOp;
use crate::error::GradRustError;
use crate::ops::activation::relu_op;
use crate::tape::Tape;
use approx::assert_relative_eq;

#[test]
fn test_relu_forward() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let outputs: Vec<f64> = [-2.0, -1.0, 0.0, 1.0, 2.0]
        .iter()
        .map(|&x| relu_op(&tape.leaf(x)).map(|y| y.data()))
        .collect::<Result<_, _>>()?;
    assert_eq!(outputs, vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    Ok(())
}

#[test]
fn test_relu_backward_subgradient() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    for (x, expected) in [(-2.0, 0.0), (0.0, 0.0), (0.5, 1.0), (3.0, 1.0)] {
        let input = tape.leaf(x);
        let out = relu_op(&input)?;
        assert_eq!(out.op(), BackwardOp::Relu { input: input.id() });
        out.backward();
        assert_relative_eq!(input.grad(), expected);
    }
    Ok(())
}

#[test]
fn test_relu_backward_chain() -> Result<(), GradRustError> {
    // loss = relu(x * 2) + relu(y * 2)
    let tape = Tape::<f64>::new();
    let x = tape.leaf(-1.0);
    let y = tape.leaf(2.0);
    let loss = relu_op(&x.mul(2.0)?)?.add(&relu_op(&y.mul(2.0)?)?)?;
    loss.backward();
    assert_eq!(loss.data(), 4.0);
    assert_relative_eq!(x.grad(), 0.0);
    assert_relative_eq!(y.grad(), 2.0);
    Ok(())
}
