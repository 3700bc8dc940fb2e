use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the floating-point types a [`Tape`](crate::Tape) can
/// record.
///
/// It bounds the element type of every scalar node so the generic gradient
/// rules can rely on `powf`, `tanh`, comparisons and in-place accumulation.
/// Implemented for `f32` and `f64`.
pub trait GradNumeric: Float + NumAssignOps + Debug + Display + 'static {}

impl GradNumeric for f32 {}
impl GradNumeric for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_numeric<T: GradNumeric>(value: T) -> T {
        value.tanh()
    }

    #[test]
    fn test_f32_impl_grad_numeric() {
        assert_eq!(process_numeric(0.0f32), 0.0);
    }

    #[test]
    fn test_f64_impl_grad_numeric() {
        assert_eq!(process_numeric(0.0f64), 0.0);
    }
}
