//! Numeric literals as they come out of a disassembler.
//!
//! A literal is hexadecimal exactly when its text contains `0x`; anything
//! else is decimal, even if every digit would also be a valid hex digit.

use crate::error::OperandError;

pub fn parse(literal: &str) -> Result<u64, OperandError> {
    let malformed = |source| OperandError::MalformedLiteral {
        literal: literal.to_string(),
        source,
    };

    let text = literal.trim();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (digits, radix) = if literal.contains("0x") {
        (text.strip_prefix("0x").unwrap_or(text), 16)
    } else {
        (text, 10)
    };

    // The std parsers take a sign of their own, which must not slip through
    // after ours has been stripped.
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(malformed(None));
    }

    let magnitude = u64::from_str_radix(digits, radix).map_err(|err| malformed(Some(err)))?;

    Ok(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Whether the literal carries a leading minus sign.
pub fn is_negative(literal: &str) -> bool {
    literal.trim_start().starts_with('-')
}

/// Lowercase hex of `value`, zero-padded to at least `digits` digits.
pub fn hex_padded(value: u64, digits: usize) -> String {
    format!("{value:0digits$x}")
}
