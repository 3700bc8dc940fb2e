use crate::error::GradRustError;
use crate::ops::traits::GradNumeric;
use crate::tape::Tape;
use crate::value::Value;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Records `count` leaf nodes drawn uniformly from `[low, high)`.
///
/// # Errors
/// `InvalidInitRange` when `low >= high` or either bound is not finite.
pub fn uniform<T, R>(
    tape: &Tape<T>,
    count: usize,
    low: T,
    high: T,
    rng: &mut R,
) -> Result<Vec<Value<T>>, GradRustError>
where
    T: GradNumeric + SampleUniform,
    R: Rng + ?Sized,
{
    if low >= high || !low.is_finite() || !high.is_finite() {
        return Err(GradRustError::InvalidInitRange {
            low: low.to_f64().unwrap_or(f64::NAN),
            high: high.to_f64().unwrap_or(f64::NAN),
        });
    }
    let dist = Uniform::new(low, high);
    Ok((0..count).map(|_| tape.leaf(dist.sample(rng))).collect())
}

/// Records `count` leaf nodes holding zero.
pub fn zeros<T: GradNumeric>(tape: &Tape<T>, count: usize) -> Vec<Value<T>> {
    (0..count).map(|_| tape.leaf(T::zero())).collect()
}
