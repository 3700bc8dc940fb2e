use crate::error::GradRustError;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{Module, Output};
use crate::ops::traits::GradNumeric;
use crate::tape::Tape;
use crate::value::Value;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;

/// A layer of independent neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer<T: GradNumeric> {
    neurons: Vec<Neuron<T>>,
    nin: usize,
}

impl<T: GradNumeric> Layer<T> {
    /// Creates `nout` randomly initialised neurons, each taking `nin` inputs.
    pub fn new<R>(
        tape: &Tape<T>,
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, GradRustError>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        let neurons = (0..nout)
            .map(|_| Neuron::new(tape, nin, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `InputSizeMismatch` when the neurons disagree on their number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron<T>>) -> Result<Self, GradRustError> {
        let nin = neurons.first().map_or(0, Neuron::nin);
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(GradRustError::InputSizeMismatch {
                expected: nin,
                actual: bad.nin(),
            });
        }
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    /// Number of neurons, i.e. output width.
    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }

    /// One output per neuron, never collapsed.
    pub fn forward_vec(&self, inputs: &[Value<T>]) -> Result<Vec<Value<T>>, GradRustError> {
        if inputs.len() != self.nin {
            return Err(GradRustError::InputSizeMismatch {
                expected: self.nin,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }
}

impl<T: GradNumeric> Module<T> for Layer<T> {
    /// Returns `Output::Scalar` when the layer has exactly one neuron.
    fn forward(&self, inputs: &[Value<T>]) -> Result<Output<T>, GradRustError> {
        Ok(Output::from_vec(self.forward_vec(inputs)?))
    }

    fn parameters(&self) -> Vec<Value<T>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value<T>)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

impl<T: GradNumeric> fmt::Display for Layer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}
