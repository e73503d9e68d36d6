//! Instruction operands.
//!
//! An [`Operand`] is a name (a register, or a decimal or hex numeral) with a
//! declared width and a [`Kind`]. Each kind answers the same set of questions
//! but supports a different subset of them; asking a kind for something it
//! cannot do yields [`OperandError::Unsupported`] rather than a made-up answer.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use log::{debug, trace};
use tinct_common::{ImmLoc, Location, RegLoc};

use crate::error::{OperandError, Operation};
use crate::literal::{self, hex_padded};
use crate::size::{bits_of, ByteSize};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// A literal constant.
    Immediate,
    /// A literal address used as a bare value.
    Address,
    /// A register. Its runtime value is unknown until set.
    Register { value: Option<u64> },
    /// Memory at a literal address.
    PointerToAddress,
    /// Memory at the address held in a register.
    PointerToRegister,
    /// The absent operand.
    None,
}

impl Kind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Immediate => "imm",
            Self::Address => "addr",
            Self::Register { .. } => "reg",
            Self::PointerToAddress => "paddr",
            Self::PointerToRegister => "preg",
            Self::None => "none",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "imm" => Self::Immediate,
            "addr" => Self::Address,
            "reg" => Self::Register { value: None },
            "paddr" => Self::PointerToAddress,
            "preg" => Self::PointerToRegister,
            "none" => Self::None,
            _ => return None,
        })
    }
}

/// A single instruction operand. Operands compare, order and hash by name.
#[derive(Clone, Debug)]
pub struct Operand {
    name: String,
    bits: u32,
    kind: Kind,
}

impl Operand {
    pub fn new(kind: Kind, name: impl Into<String>, size: &str) -> Self {
        let mut operand = Self {
            name: name.into(),
            bits: 0,
            kind,
        };

        operand.resize(size);
        operand
    }

    pub fn immediate(name: impl Into<String>, size: &str) -> Self {
        Self::new(Kind::Immediate, name, size)
    }

    pub fn address(name: impl Into<String>, size: &str) -> Self {
        Self::new(Kind::Address, name, size)
    }

    pub fn register(name: impl Into<String>, size: &str) -> Self {
        Self::new(Kind::Register { value: None }, name, size)
    }

    pub fn pointer_to_address(name: impl Into<String>, size: &str) -> Self {
        Self::new(Kind::PointerToAddress, name, size)
    }

    pub fn pointer_to_register(name: impl Into<String>, size: &str) -> Self {
        Self::new(Kind::PointerToRegister, name, size)
    }

    /// The empty operand has no name and no width.
    pub fn none() -> Self {
        Self {
            name: String::new(),
            bits: 0,
            kind: Kind::None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn size_in_bits(&self) -> u32 {
        self.bits
    }

    /// Same as [`Operand::size_in_bits`].
    pub fn size(&self) -> u32 {
        self.bits
    }

    pub fn size_in_bytes(&self) -> ByteSize {
        ByteSize::from_bits(self.bits)
    }

    /// Change the declared width. Unknown tokens give a zero-width operand.
    pub fn resize(&mut self, size: &str) {
        self.bits = bits_of(size);
        debug!("operand `{}` resized to {} bits", self.name, self.bits);
    }

    pub fn value(&self) -> Result<u64, OperandError> {
        match self.kind {
            Kind::Immediate | Kind::Address => literal::parse(&self.name),
            Kind::Register { value: Some(value) } => Ok(value),
            Kind::Register { value: None } => Err(OperandError::UnsetValue {
                name: self.name.clone(),
            }),
            _ => Err(self.unsupported(Operation::Value)),
        }
    }

    pub fn set_value(&mut self, value: u64) -> Result<(), OperandError> {
        if let Kind::Register { value: slot } = &mut self.kind {
            *slot = Some(value);
            return Ok(());
        }

        Err(self.unsupported(Operation::SetValue))
    }

    /// Whether the operand denotes storage whose contents can change.
    pub fn is_var(&self) -> bool {
        matches!(
            self.kind,
            Kind::Register { .. } | Kind::PointerToAddress | Kind::PointerToRegister
        )
    }

    /// Whether the operand's value lives in memory. The empty operand has no
    /// answer to this.
    pub fn is_mem(&self) -> Result<bool, OperandError> {
        match self.kind {
            Kind::PointerToAddress | Kind::PointerToRegister => Ok(true),
            Kind::Immediate | Kind::Address | Kind::Register { .. } => Ok(false),
            Kind::None => Err(OperandError::EmptyOperand {
                operation: Operation::IsMem,
            }),
        }
    }

    /// Split the operand into one location per byte.
    ///
    /// Immediates come out most significant byte first, each carrying its
    /// byte literal. Registers come out in index order with no value.
    pub fn locations(&self) -> Result<Vec<Location>, OperandError> {
        match self.kind {
            Kind::Immediate => self.immediate_locations(),
            Kind::Register { .. } => {
                let bytes = self.defined_bytes()?;
                trace!("decomposing register `{}` into {bytes} bytes", self.name);

                Ok((0..bytes as usize)
                    .map(|index| RegLoc::new(self.name.clone(), index).into())
                    .collect())
            }
            _ => Err(self.unsupported(Operation::Locations)),
        }
    }

    /// The canonical symbolic form, e.g. `imm:0x00ff` or `*(reg:esp)`.
    pub fn canonical(&self) -> Result<String, OperandError> {
        Ok(match self.kind {
            Kind::Immediate | Kind::Address => format!("imm:0x{}", self.padded_literal()?),
            Kind::PointerToAddress => format!("*(imm:0x{})", self.padded_literal()?),
            Kind::PointerToRegister => format!("*(reg:{})", self.name),
            Kind::Register { .. } => self.name.clone(),
            Kind::None => String::new(),
        })
    }

    fn immediate_locations(&self) -> Result<Vec<Location>, OperandError> {
        let bytes = self.defined_bytes()? as usize;
        let value = literal::parse(&self.name)?;
        trace!("decomposing immediate `{}` into {bytes} bytes", self.name);

        // Reversing the digits puts the low byte first; each two-digit chunk
        // is then read back in its original digit order.
        let reversed: Vec<char> = hex_padded(value, 2 * bytes).chars().rev().collect();

        let mut locations: Vec<Location> = reversed
            .chunks(2)
            .take(bytes)
            .enumerate()
            .map(|(index, chunk)| {
                let digits: String = chunk.iter().rev().collect();
                ImmLoc::new(format!("0x{digits}"), index).into()
            })
            .collect();

        locations.reverse();
        Ok(locations)
    }

    fn padded_literal(&self) -> Result<String, OperandError> {
        let mut value = literal::parse(&self.name)?;
        let bytes = self.defined_bytes()? as usize;

        // Negative literals render at the operand's width, not at 64 bits.
        if literal::is_negative(&self.name) && self.bits < u64::BITS {
            value &= (1u64 << self.bits) - 1;
        }

        Ok(hex_padded(value, 2 * bytes))
    }

    fn defined_bytes(&self) -> Result<u32, OperandError> {
        self.size_in_bytes()
            .bytes()
            .ok_or_else(|| OperandError::UndefinedByteSize {
                name: self.name.clone(),
                bits: self.bits,
            })
    }

    fn unsupported(&self, operation: Operation) -> OperandError {
        OperandError::Unsupported {
            operation,
            kind: self.kind.tag(),
        }
    }
}

impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Operand {}

impl PartialOrd for Operand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Operand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Operand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
