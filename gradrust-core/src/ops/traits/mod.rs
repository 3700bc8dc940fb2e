pub mod numeric;
pub mod operand;

pub use numeric::GradNumeric;
pub use operand::Operand;
