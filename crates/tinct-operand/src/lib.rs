pub mod error;
pub mod literal;
pub mod operand;
pub mod size;

pub use error::{OperandError, Operation};
pub use operand::{Kind, Operand};
pub use size::ByteSize;
