use log::warn;

/// The width in bits named by a size token, or `0` if the token is unknown.
pub fn bits_of(token: &str) -> u32 {
    match token {
        "BYTE" | "8" => 8,
        "WORD" | "16" => 16,
        "DWORD" | "32" => 32,
        "QWORD" | "64" => 64,
        "1" => 1,
        _ => {
            warn!("unknown size token `{token}`, assuming zero width");
            0
        }
    }
}

/// The byte size of an operand. Widths that are not a whole number of bytes
/// (flag-like 1-bit operands) have no byte size at all, which is distinct
/// from a size of zero.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ByteSize {
    Bytes(u32),
    Undefined,
}

impl ByteSize {
    pub fn from_bits(bits: u32) -> Self {
        if bits % 8 == 0 {
            Self::Bytes(bits / 8)
        } else {
            Self::Undefined
        }
    }

    pub fn bytes(&self) -> Option<u32> {
        match self {
            Self::Bytes(bytes) => Some(*bytes),
            Self::Undefined => None,
        }
    }
}
