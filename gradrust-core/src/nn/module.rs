use crate::error::GradRustError;
use crate::ops::traits::GradNumeric;
use crate::value::Value;

/// The base trait for all network elements (neurons, layers, stacks of layers).
///
/// A module owns leaf parameter nodes on a tape and builds graph nodes from
/// them when evaluated. Evaluation never computes gradients; callers combine
/// the outputs into a loss and call [`Value::backward`] themselves.
pub trait Module<T: GradNumeric>: std::fmt::Debug {
    /// Builds the output node(s) for `inputs` on the parameters' tape.
    ///
    /// # Errors
    /// `InputSizeMismatch` when `inputs` does not match the module's fan-in,
    /// `TapeMismatch` when inputs live on a different tape than the parameters.
    fn forward(&self, inputs: &[Value<T>]) -> Result<Output<T>, GradRustError>;

    /// Every leaf parameter of the module, in a stable order.
    ///
    /// Composite modules concatenate their children's parameters in child
    /// order.
    fn parameters(&self) -> Vec<Value<T>>;

    /// Parameters along with hierarchical names such as
    /// `"layers.0.neurons.1.weights.2"`, in the same order as `parameters()`.
    fn named_parameters(&self) -> Vec<(String, Value<T>)>;

    /// Resets the gradient of every parameter to exactly zero. `data` is untouched.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

/// Result of evaluating a module.
///
/// A layer with exactly one unit returns `Scalar`, every other width returns
/// `Vector`. The collapse only applies to what a module hands back to its
/// caller: [`Mlp`](crate::nn::Mlp) always feeds full vectors between its
/// layers, so a one-unit hidden layer never changes the next layer's input.
#[derive(Debug, Clone)]
pub enum Output<T: GradNumeric> {
    Scalar(Value<T>),
    Vector(Vec<Value<T>>),
}

impl<T: GradNumeric> Output<T> {
    /// Collapses a one-element vector into `Scalar`, keeps anything else as `Vector`.
    pub fn from_vec(mut values: Vec<Value<T>>) -> Self {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return Output::Scalar(value);
            }
        }
        Output::Vector(values)
    }

    /// The outputs as a vector, whatever the variant.
    pub fn into_vec(self) -> Vec<Value<T>> {
        match self {
            Output::Scalar(value) => vec![value],
            Output::Vector(values) => values,
        }
    }

    /// The single output value.
    ///
    /// # Errors
    /// `NotScalarOutput` when the output holds zero or several values.
    pub fn into_scalar(self) -> Result<Value<T>, GradRustError> {
        match self {
            Output::Scalar(value) => Ok(value),
            Output::Vector(mut values) if values.len() == 1 => {
                values.pop().ok_or(GradRustError::NotScalarOutput { len: 0 })
            }
            Output::Vector(values) => Err(GradRustError::NotScalarOutput { len: values.len() }),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Output::Scalar(_) => 1,
            Output::Vector(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Output::Scalar(_))
    }
}
