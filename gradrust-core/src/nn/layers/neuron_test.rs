use crate::error::GradRustError;
use crate::nn::{Activation, Module, Neuron, Output};
use crate::tape::Tape;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_creation() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let mut rng = StdRng::seed_from_u64(1);
    let neuron = Neuron::new(&tape, 3, Activation::Relu, &mut rng)?;
    assert_eq!(neuron.nin(), 3);
    assert_eq!(neuron.bias().data(), 0.0);
    assert!(neuron
        .weights()
        .iter()
        .all(|w| w.is_leaf() && (-1.0..1.0).contains(&w.data())));
    assert_eq!(neuron.parameters().len(), 4);
    assert_eq!(neuron.to_string(), "ReLUNeuron(3)");
    Ok(())
}

#[test]
fn test_linear_neuron_forward_and_backward() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let neuron = Neuron::from_weights(&tape, &[0.5], 1.0, Activation::Linear);
    let x = tape.leaf(2.0);

    let out = neuron.forward(&[x.clone()])?.into_scalar()?;
    assert_eq!(out.data(), 2.0);

    out.backward();
    let params = neuron.parameters();
    assert_relative_eq!(params[0].grad(), 2.0);
    assert_relative_eq!(params[1].grad(), 1.0);
    assert_relative_eq!(x.grad(), 0.5);
    Ok(())
}

#[test]
fn test_relu_neuron_clamps_negative_sum() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let neuron = Neuron::from_weights(&tape, &[1.0, -2.0], 0.5, Activation::Relu);
    let out = neuron.activate(&tape.leaves(&[1.0, 3.0]))?;
    assert_eq!(out.data(), 0.0);
    out.backward();
    assert!(neuron.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_tanh_neuron() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let neuron = Neuron::from_weights(&tape, &[0.3, -0.7], 0.1, Activation::Tanh);
    let out = neuron.activate(&tape.leaves(&[1.0, 0.5]))?;
    let expected = (0.1f64 + 0.3 * 1.0 + -0.7 * 0.5).tanh();
    assert_relative_eq!(out.data(), expected, epsilon = 1e-12);
    assert_eq!(neuron.to_string(), "TanhNeuron(2)");
    Ok(())
}

#[test]
fn test_neuron_forward_is_scalar_output() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let neuron = Neuron::from_weights(&tape, &[1.0], 0.0, Activation::Linear);
    let out = neuron.forward(&[tape.leaf(4.0)])?;
    assert!(matches!(out, Output::Scalar(_)));
    Ok(())
}

#[test]
fn test_neuron_rejects_wrong_input_count() {
    let tape = Tape::<f64>::new();
    let neuron = Neuron::from_weights(&tape, &[1.0, 2.0], 0.0, Activation::Linear);
    let result = neuron.forward(&tape.leaves(&[1.0]));
    assert_eq!(
        result.err(),
        Some(GradRustError::InputSizeMismatch { expected: 2, actual: 1 })
    );
}

#[test]
fn test_neuron_rejects_inputs_from_another_tape() {
    let tape = Tape::<f64>::new();
    let neuron = Neuron::from_weights(&tape, &[1.0], 0.0, Activation::Linear);
    let foreign = Tape::new().leaf(1.0);
    assert!(matches!(
        neuron.forward(&[foreign]),
        Err(GradRustError::TapeMismatch { .. })
    ));
}

#[test]
fn test_neuron_named_parameters() {
    let tape = Tape::<f64>::new();
    let neuron = Neuron::from_weights(&tape, &[1.0, 2.0], 3.0, Activation::Linear);
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weights.0", "weights.1", "bias"]);
}

#[test]
fn test_rejected_inputs_record_nothing() {
    let tape = Tape::<f64>::new();
    let neuron = Neuron::from_weights(&tape, &[1.0, 2.0, 3.0], 0.0, Activation::Relu);
    let mut inputs = tape.leaves(&[1.0, 2.0]);
    inputs.push(Tape::new().leaf(3.0));
    let before = tape.len();

    assert_eq!(
        neuron.activate(&inputs).err(),
        Some(GradRustError::TapeMismatch {
            operation: "neuron".to_string()
        })
    );
    assert_eq!(tape.len(), before);
}
