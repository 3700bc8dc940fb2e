use crate::error::GradRustError;
use crate::nn::activation::Activation;
use crate::nn::layers::Layer;
use crate::nn::module::{Module, Output};
use crate::ops::traits::GradNumeric;
use crate::tape::Tape;
use crate::value::Value;
use log::debug;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;

/// A multi-layer perceptron: a stack of [`Layer`]s where the outputs of layer
/// `i` are the inputs of layer `i + 1`.
#[derive(Debug, Clone)]
pub struct Mlp<T: GradNumeric> {
    layers: Vec<Layer<T>>,
}

impl<T: GradNumeric> Mlp<T> {
    /// Creates a network with layer widths `[nin] + nouts`.
    ///
    /// Hidden layers use ReLU, the last layer is linear.
    pub fn new<R>(tape: &Tape<T>, nin: usize, nouts: &[usize], rng: &mut R) -> Result<Self, GradRustError>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        Self::with_activation(tape, nin, nouts, Activation::Relu, rng)
    }

    /// Like [`Mlp::new`] with a custom non-linearity for the hidden layers.
    ///
    /// # Errors
    /// `EmptyNetwork` when `nouts` is empty.
    pub fn with_activation<R>(
        tape: &Tape<T>,
        nin: usize,
        nouts: &[usize],
        hidden: Activation,
        rng: &mut R,
    ) -> Result<Self, GradRustError>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        if nouts.is_empty() {
            return Err(GradRustError::EmptyNetwork);
        }
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);

        let last = nouts.len() - 1;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let activation = if i == last { Activation::Linear } else { hidden };
                Layer::new(tape, pair[0], pair[1], activation, rng)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mlp = Mlp { layers };
        debug!(
            "Mlp: built {} with {} parameters",
            mlp,
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    /// Stacks existing layers.
    ///
    /// # Errors
    /// `EmptyNetwork` for no layers, `InputSizeMismatch` when a layer's fan-in
    /// differs from the previous layer's width.
    pub fn from_layers(layers: Vec<Layer<T>>) -> Result<Self, GradRustError> {
        if layers.is_empty() {
            return Err(GradRustError::EmptyNetwork);
        }
        for pair in layers.windows(2) {
            if pair[1].nin() != pair[0].nout() {
                return Err(GradRustError::InputSizeMismatch {
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    /// Outputs of the last layer, never collapsed.
    pub fn forward_vec(&self, inputs: &[Value<T>]) -> Result<Vec<Value<T>>, GradRustError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward_vec(&x)?;
        }
        Ok(x)
    }
}

impl<T: GradNumeric> Module<T> for Mlp<T> {
    /// Intermediate layers always pass full vectors on; only the final output
    /// collapses to `Output::Scalar` when the last layer has one neuron.
    fn forward(&self, inputs: &[Value<T>]) -> Result<Output<T>, GradRustError> {
        Ok(Output::from_vec(self.forward_vec(inputs)?))
    }

    fn parameters(&self) -> Vec<Value<T>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value<T>)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

impl<T: GradNumeric> fmt::Display for Mlp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}
