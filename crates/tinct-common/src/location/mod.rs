//! Byte-granular locations handed to the dataflow engine.
//!
//! Every multi-byte value an operand denotes is split into one [`Location`]
//! per byte. Index `0` is always the least significant byte, regardless of
//! the order in which a particular decomposition returns them.


use std::fmt;

/// One byte of an immediate value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ImmLoc {
    /// The byte written as `0x` followed by two hex digits.
    pub value: String,
    pub index: usize,
}

impl ImmLoc {
    pub fn new(value: impl Into<String>, index: usize) -> Self {
        Self {
            value: value.into(),
            index,
        }
    }

    /// Parse the literal back into the byte it denotes.
    pub fn byte(&self) -> Option<u8> {
        let digits = self.value.strip_prefix("0x")?;
        u8::from_str_radix(digits, 16).ok()
    }
}

/// One byte of a named register. Its contents are left for the consumer to
/// resolve.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RegLoc {
    pub name: String,
    pub index: usize,
}

impl RegLoc {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Location {
    Immediate(ImmLoc),
    Register(RegLoc),
}

impl Location {
    pub fn index(&self) -> usize {
        match self {
            Self::Immediate(loc) => loc.index,
            Self::Register(loc) => loc.index,
        }
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate(_))
    }
}

impl From<ImmLoc> for Location {
    fn from(loc: ImmLoc) -> Self {
        Self::Immediate(loc)
    }
}

impl From<RegLoc> for Location {
    fn from(loc: RegLoc) -> Self {
        Self::Register(loc)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(loc) => write!(f, "imm:{}@{}", loc.value, loc.index),
            Self::Register(loc) => write!(f, "reg:{}@{}", loc.name, loc.index),
        }
    }
}
