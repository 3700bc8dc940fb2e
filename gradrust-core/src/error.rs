use thiserror::Error;

/// Custom error type for the gradrust engine and network layer.
///
/// Every variant is a precondition violation surfaced at the call that
/// caused it. Nothing is retried or recovered internally.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum GradRustError {
    #[error("Invalid exponent domain: {base} ** {exponent} has no real value")]
    InvalidExponentDomain { base: f64, exponent: f64 },

    #[error("Operands of '{operation}' belong to different tapes")]
    TapeMismatch { operation: String },

    #[error("Operation '{operation}' needs at least one node operand to record on a tape")]
    NoGraphOperand { operation: String },

    #[error("Cannot {operation} on node {id}: it was produced by '{op}' and is not a leaf")]
    NotALeaf {
        id: usize,
        op: String,
        operation: String,
    },

    #[error("Node {id} was truncated from its tape")]
    TruncatedNode { id: usize },

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Expected a single output value, got {len} outputs")]
    NotScalarOutput { len: usize },

    #[error("A network needs at least one layer")]
    EmptyNetwork,

    #[error("Invalid initialization range: low {low} must be below high {high}")]
    InvalidInitRange { low: f64, high: f64 },
}
