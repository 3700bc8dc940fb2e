use crate::value::Value;
use crate::ops::traits::GradNumeric;
use std::fmt;

impl<T: GradNumeric> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_live() {
            return write!(f, "Value(<truncated>)");
        }
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}

impl<T: GradNumeric> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The tape may be mutably borrowed while a backward pass is running.
        match self.tape.try_read() {
            Some(nodes) => {
                let node = match nodes.get(self.id) {
                    Some(node) if node.stamp == self.stamp => node,
                    _ => return write!(f, "Value(id={}, <truncated>)", self.id),
                };
                write!(
                    f,
                    "Value(id={}, data={:?}, grad={:?}, op={:?})",
                    self.id,
                    node.data,
                    node.grad,
                    node.op.label()
                )
            }
            None => write!(f, "Value(id={}, <tape borrowed>)", self.id),
        }
    }
}
