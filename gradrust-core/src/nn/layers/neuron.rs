use crate::error::GradRustError;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::module::{Module, Output};
use crate::ops::traits::GradNumeric;
use crate::ops::{add_op, mul_op};
use crate::tape::Tape;
use crate::value::Value;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;

/// A single computation unit: `activation(bias + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron<T: GradNumeric> {
    weights: Vec<Value<T>>,
    bias: Value<T>,
    activation: Activation,
}

impl<T: GradNumeric> Neuron<T> {
    /// Creates a neuron with `nin` weights drawn uniformly from `[-1, 1)` and
    /// a zero bias, all recorded as leaves on `tape`.
    pub fn new<R>(
        tape: &Tape<T>,
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, GradRustError>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        let weights = init::uniform(tape, nin, -T::one(), T::one(), rng)?;
        let bias = tape.leaf(T::zero());
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Creates a neuron with explicit weight and bias values.
    pub fn from_weights(tape: &Tape<T>, weights: &[T], bias: T, activation: Activation) -> Self {
        Neuron {
            weights: tape.leaves(weights),
            bias: tape.leaf(bias),
            activation,
        }
    }

    /// Number of inputs the neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value<T>] {
        &self.weights
    }

    pub fn bias(&self) -> &Value<T> {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Builds the neuron's output node for `inputs`.
    ///
    /// The sum starts from the bias and adds `wᵢ·xᵢ` left to right, so
    /// repeated calls with the same inputs and parameters produce
    /// bit-identical results.
    ///
    /// Inputs are validated before anything is recorded, so a rejected call
    /// leaves the tape untouched.
    pub fn activate(&self, inputs: &[Value<T>]) -> Result<Value<T>, GradRustError> {
        if inputs.len() != self.weights.len() {
            return Err(GradRustError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        for x in inputs {
            if !x.tape().same_tape(self.bias.tape()) {
                return Err(GradRustError::TapeMismatch {
                    operation: "neuron".to_string(),
                });
            }
            x.ensure_live()?;
        }
        let mut act = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            act = add_op(&act, mul_op(w, x)?)?;
        }
        self.activation.apply(act)
    }
}

impl<T: GradNumeric> Module<T> for Neuron<T> {
    fn forward(&self, inputs: &[Value<T>]) -> Result<Output<T>, GradRustError> {
        Ok(Output::Scalar(self.activate(inputs)?))
    }

    fn parameters(&self) -> Vec<Value<T>> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value<T>)> {
        let mut named: Vec<(String, Value<T>)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weights.{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }
}

impl<T: GradNumeric> fmt::Display for Neuron<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Neuron({})", self.activation, self.weights.len())
    }
}
