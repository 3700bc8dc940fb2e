// src/value/traits.rs

use crate::error::GradRustError;
use crate::ops::traits::GradNumeric;
use crate::ops::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<T> Clone for Value<T> {
    /// Clones the handle. Both handles refer to the same node.
    fn clone(&self) -> Self {
        Value {
            tape: self.tape.clone(),
            id: self.id,
            stamp: self.stamp,
        }
    }
}

// --- Operator sugar ---
//
// The operators delegate to the fallible `_op` functions and panic on a
// precondition violation (operands from different tapes), as `std::ops`
// leaves no room for a `Result`. Use the named methods to handle errors.

fn unwrap_op<T>(result: Result<Value<T>, GradRustError>, operation: &str) -> Value<T> {
    result.unwrap_or_else(|e| panic!("Value {} operation failed: {}", operation, e))
}

macro_rules! impl_value_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<T: GradNumeric> $trait<Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                unwrap_op($op_fn(&self, &rhs), stringify!($method))
            }
        }

        impl<'a, T: GradNumeric> $trait<&'a Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &'a Value<T>) -> Value<T> {
                unwrap_op($op_fn(&self, rhs), stringify!($method))
            }
        }

        impl<'a, T: GradNumeric> $trait<Value<T>> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                unwrap_op($op_fn(self, &rhs), stringify!($method))
            }
        }

        impl<'a, 'b, T: GradNumeric> $trait<&'b Value<T>> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &'b Value<T>) -> Value<T> {
                unwrap_op($op_fn(self, rhs), stringify!($method))
            }
        }
    };
}

impl_value_binary_op!(Add, add, add_op);
impl_value_binary_op!(Sub, sub, sub_op);
impl_value_binary_op!(Mul, mul, mul_op);
impl_value_binary_op!(Div, div, div_op);

// Raw numbers on either side. A node is always present, so these cannot fail.
macro_rules! impl_scalar_binary_op {
    ($t:ty, $trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<$t> for Value<$t> {
            type Output = Value<$t>;
            fn $method(self, rhs: $t) -> Value<$t> {
                unwrap_op($op_fn(&self, rhs), stringify!($method))
            }
        }

        impl<'a> $trait<$t> for &'a Value<$t> {
            type Output = Value<$t>;
            fn $method(self, rhs: $t) -> Value<$t> {
                unwrap_op($op_fn(self, rhs), stringify!($method))
            }
        }

        impl $trait<Value<$t>> for $t {
            type Output = Value<$t>;
            fn $method(self, rhs: Value<$t>) -> Value<$t> {
                unwrap_op($op_fn(self, &rhs), stringify!($method))
            }
        }

        impl<'a> $trait<&'a Value<$t>> for $t {
            type Output = Value<$t>;
            fn $method(self, rhs: &'a Value<$t>) -> Value<$t> {
                unwrap_op($op_fn(self, rhs), stringify!($method))
            }
        }
    };
}

macro_rules! impl_scalar_ops_for {
    ($($t:ty),*) => {
        $(
            impl_scalar_binary_op!($t, Add, add, add_op);
            impl_scalar_binary_op!($t, Sub, sub, sub_op);
            impl_scalar_binary_op!($t, Mul, mul, mul_op);
            impl_scalar_binary_op!($t, Div, div, div_op);
        )*
    };
}

impl_scalar_ops_for!(f32, f64);

impl<T: GradNumeric> Neg for Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        unwrap_op(neg_op(&self), "neg")
    }
}

impl<'a, T: GradNumeric> Neg for &'a Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        unwrap_op(neg_op(self), "neg")
    }
}
