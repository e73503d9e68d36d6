use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Names an operand operation, for reporting which one a variant refused.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    Locations,
    Value,
    SetValue,
    IsMem,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locations => write!(f, "locations"),
            Self::Value => write!(f, "value"),
            Self::SetValue => write!(f, "set_value"),
            Self::IsMem => write!(f, "is_mem"),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OperandError {
    /// The operand variant does not implement the operation at all.
    #[error("`{operation}` is not supported by `{kind}` operands")]
    Unsupported {
        operation: Operation,
        kind: &'static str,
    },

    #[error("malformed literal `{literal}`")]
    MalformedLiteral {
        literal: String,
        #[source]
        source: Option<ParseIntError>,
    },

    /// A bit-level operand was asked for a byte decomposition.
    #[error("operand `{name}` is {bits} bits wide, which has no byte size")]
    UndefinedByteSize { name: String, bits: u32 },

    #[error("register `{name}` was read before a value was set")]
    UnsetValue { name: String },

    /// A question was asked of the empty operand that only makes sense for a
    /// real one.
    #[error("`{operation}` asked of the empty operand")]
    EmptyOperand { operation: Operation },
}
