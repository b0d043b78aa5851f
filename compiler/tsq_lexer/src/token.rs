//! Assembled tokens borrowing the query buffer.

use std::fmt;

use tsq_lexer_core::{validate_numeric, NumericKind, TokenKind};

/// One assembled token.
///
/// `text` borrows the [`SourceBuffer`](tsq_lexer_core::SourceBuffer) the
/// token came from, so a token cannot outlive its query. An empty `text`
/// means no token: end of input, end of statement, or a hard failure.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Byte offset of `text` in the query.
    pub offset: u32,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, offset: u32, text: &'a str) -> Self {
        Self { kind, offset, text }
    }

    /// Zero-length token of `kind` at `offset`.
    #[inline]
    pub fn empty(kind: TokenKind, offset: u32) -> Self {
        Self::new(kind, offset, "")
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset one past the last byte.
    #[inline]
    pub fn end(&self) -> u32 {
        self.offset + self.len()
    }

    /// Strict numeric class of the token text, if it is a number.
    ///
    /// Sign-attached literals (`-5`) are accepted. Ip-shaped and dotted
    /// multi-segment text is rejected.
    pub fn numeric_kind(&self) -> Option<NumericKind> {
        validate_numeric(self.text)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}..{}) {:?}", self.kind, self.offset, self.end(), self.text)
    }
}
