//! Reasons the assembler stopped.
//!
//! The `next_token` entry points report every failure as an `Illegal` token.
//! [`LexError`] is the same stop signal with the cause attached, for callers
//! that want to print it.

use thiserror::Error;
use tsq_lexer_core::TokenKind;

/// Why assembly could not continue at `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    /// A byte that starts no token.
    #[error("unexpected byte 0x{byte:02x} at offset {offset}")]
    UnexpectedByte { offset: u32, byte: u8 },

    /// A quote with no matching close quote before the end of the query.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: u32 },

    /// A NUL byte inside the query text.
    #[error("NUL byte at offset {offset}")]
    InteriorNull { offset: u32 },

    /// Two commas in one separator run (`a,,b`).
    #[error("repeated comma at offset {offset}")]
    RepeatedComma { offset: u32 },

    /// A `.` directly after a token that cannot be qualified (`123.tbl`).
    #[error("`.` cannot follow {kind} at offset {offset}")]
    InvalidQualifiedName { offset: u32, kind: TokenKind },

    /// `!` not followed by `=`.
    #[error("`!` without `=` at offset {offset}")]
    BareBang { offset: u32 },
}

impl LexError {
    /// Byte offset of the offending input.
    pub fn offset(&self) -> u32 {
        match *self {
            Self::UnexpectedByte { offset, .. }
            | Self::UnterminatedString { offset }
            | Self::InteriorNull { offset }
            | Self::RepeatedComma { offset }
            | Self::InvalidQualifiedName { offset, .. }
            | Self::BareBang { offset } => offset,
        }
    }

    /// Explain an `Illegal` raw token from the byte it starts with.
    pub(crate) fn from_illegal(offset: u32, byte: u8) -> Self {
        match byte {
            0 => Self::InteriorNull { offset },
            b'\'' | b'"' => Self::UnterminatedString { offset },
            b'!' => Self::BareBang { offset },
            byte => Self::UnexpectedByte { offset, byte },
        }
    }
}
