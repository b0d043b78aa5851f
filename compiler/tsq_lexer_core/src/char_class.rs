//! ASCII character classes used by the scanner.
//!
//! Only the low 128 byte values are classified. Bytes with the high bit set
//! are never identifier characters and never whitespace.

/// Identifier characters: `A-Z`, `a-z`, `0-9`, and `_`.
///
/// The sentinel (`0x00`) maps to `false`, so identifier runs stop at EOF.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static IS_IDENT_TABLE: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0u16;
    while i < 128 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` may appear in an identifier.
#[inline]
pub fn is_ident_char(b: u8) -> bool {
    b < 0x80 && IS_IDENT_TABLE[b as usize]
}

/// Bytes that start a whitespace token.
#[inline]
pub fn is_space_start(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// Bytes that continue a whitespace run once it has started.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Returns `true` for `0-9`.
#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Returns `true` for `0-9`, `a-f`, `A-F`.
#[inline]
pub(crate) fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Returns `true` for `0` and `1`.
#[inline]
pub(crate) fn is_bin_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

/// Returns `true` for the single-letter time-unit suffixes that turn a digit
/// run into a duration literal (`10s`, `5m`, `1y`).
#[inline]
pub(crate) fn is_duration_suffix(b: u8) -> bool {
    matches!(b.to_ascii_lowercase(), b'a' | b's' | b'm' | b'h' | b'd' | b'n' | b'y' | b'w')
}

#[cfg(test)]
mod tests;
