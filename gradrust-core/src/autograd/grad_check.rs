use crate::error::GradRustError;
use crate::ops::traits::GradNumeric;
use crate::tape::Tape;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] GradRustError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives one leaf node per entry of `inputs`, all recorded on a
/// fresh tape, and must return a single output value built from them. After
/// back-propagating from that output, each leaf's gradient is compared with
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`.
///
/// A gradient passes if either the absolute or the relative difference is
/// within `tolerance`.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: T,
    tolerance: T,
) -> Result<(), GradCheckError>
where
    T: GradNumeric,
    F: Fn(&[Value<T>]) -> Result<Value<T>, GradRustError>,
{
    let to_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);
    let epsilon_f64 = to_f64(epsilon);
    let tolerance_f64 = to_f64(tolerance);

    // --- Analytical gradients ---
    let tape = Tape::new();
    let leaves = tape.leaves(inputs);
    let output = func(&leaves)?;
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(|leaf| to_f64(leaf.grad())).collect();

    // Each perturbed evaluation gets its own tape so nothing leaks between runs.
    let evaluate = |index: usize, delta: T| -> Result<f64, GradCheckError> {
        let mut shifted = inputs.to_vec();
        shifted[index] += delta;
        let tape = Tape::new();
        let leaves = tape.leaves(&shifted);
        Ok(to_f64(func(&leaves)?.data()))
    };

    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate(input_index, epsilon)?;
        let loss_minus = evaluate(input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon_f64);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance_f64
            && difference / (analytical_grad.abs() + epsilon_f64) > tolerance_f64
        {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
