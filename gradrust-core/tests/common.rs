use gradrust_core::nn::{Activation, Layer, Mlp, Neuron};
use gradrust_core::{GradRustError, Tape, Value};

/// Squared-error loss `Σ (pred - target)²` over paired predictions and targets.
#[allow(dead_code)]
pub fn squared_error(
    tape: &Tape<f64>,
    preds: &[Value<f64>],
    targets: &[f64],
) -> Result<Value<f64>, GradRustError> {
    let mut loss = tape.leaf(0.0);
    for (pred, &target) in preds.iter().zip(targets) {
        loss = loss.add(pred.sub(target)?.pow(2.0)?)?;
    }
    Ok(loss)
}

/// A fixed 2 -> 2 -> 1 network with tanh hidden units.
#[allow(dead_code)]
pub fn tiny_mlp(tape: &Tape<f64>) -> Result<Mlp<f64>, GradRustError> {
    let hidden = Layer::from_neurons(vec![
        Neuron::from_weights(tape, &[0.4, -0.3], 0.1, Activation::Tanh),
        Neuron::from_weights(tape, &[-0.2, 0.6], -0.1, Activation::Tanh),
    ])?;
    let output = Layer::from_neurons(vec![Neuron::from_weights(
        tape,
        &[0.7, -0.5],
        0.0,
        Activation::Linear,
    )])?;
    Mlp::from_layers(vec![hidden, output])
}
