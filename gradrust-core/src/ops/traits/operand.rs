use crate::autograd::NodeId;
use crate::error::GradRustError;
use crate::ops::traits::GradNumeric;
use crate::tape::Tape;
use crate::value::Value;

/// Either side of a binary operation: an existing node or a raw number.
///
/// Raw numbers are promoted to leaf nodes on the tape of the other operand,
/// so `node op number` and `number op node` both record a valid graph.
#[derive(Debug, Clone)]
pub enum Operand<T: GradNumeric> {
    Node(Value<T>),
    Scalar(T),
}

impl<T: GradNumeric> From<Value<T>> for Operand<T> {
    fn from(value: Value<T>) -> Self {
        Operand::Node(value)
    }
}

impl<T: GradNumeric> From<&Value<T>> for Operand<T> {
    fn from(value: &Value<T>) -> Self {
        Operand::Node(value.clone())
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand<$t> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_operand!(f32, f64);

/// Puts both operands on one tape and returns their node ids.
///
/// A scalar is promoted to a fresh leaf on the node operand's tape. Two nodes
/// from different tapes, two raw numbers, or a truncated node cannot be
/// combined.
pub(crate) fn resolve_binary<T: GradNumeric>(
    lhs: Operand<T>,
    rhs: Operand<T>,
    operation: &str,
) -> Result<(Tape<T>, NodeId, NodeId), GradRustError> {
    for operand in [&lhs, &rhs] {
        if let Operand::Node(value) = operand {
            value.ensure_live()?;
        }
    }
    match (lhs, rhs) {
        (Operand::Node(a), Operand::Node(b)) => {
            if !a.tape().same_tape(b.tape()) {
                return Err(GradRustError::TapeMismatch {
                    operation: operation.to_string(),
                });
            }
            Ok((a.tape().clone(), a.id(), b.id()))
        }
        (Operand::Node(a), Operand::Scalar(b)) => {
            let promoted = a.tape().leaf(b);
            Ok((a.tape().clone(), a.id(), promoted.id()))
        }
        (Operand::Scalar(a), Operand::Node(b)) => {
            let promoted = b.tape().leaf(a);
            Ok((b.tape().clone(), promoted.id(), b.id()))
        }
        (Operand::Scalar(_), Operand::Scalar(_)) => Err(GradRustError::NoGraphOperand {
            operation: operation.to_string(),
        }),
    }
}
