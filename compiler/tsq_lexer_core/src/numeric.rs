//! Strict numeric-literal validation.
//!
//! [`validate_numeric`] re-walks text that has already been cut out as a
//! token and decides which numeric class it belongs to. It follows the
//! scanner's number grammar with two differences: at most one `.digits`
//! segment is allowed (there is no ip-shaped class here), and every byte of
//! the text must be consumed.

use crate::char_class::{is_bin_digit, is_digit, is_hex_digit};
use crate::TokenKind;

/// Numeric class of a validated literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integer,
    Float,
    Hex,
    Binary,
}

impl From<NumericKind> for TokenKind {
    fn from(kind: NumericKind) -> Self {
        match kind {
            NumericKind::Integer => TokenKind::Integer,
            NumericKind::Float => TokenKind::Float,
            NumericKind::Hex => TokenKind::Hex,
            NumericKind::Binary => TokenKind::Bin,
        }
    }
}

/// Classify `text` as a numeric literal, or `None` if it is not one.
///
/// Any number of leading `+`/`-` signs is accepted. Reads never leave
/// `text`, even when it is a slice of a larger query.
///
/// ```
/// use tsq_lexer_core::{validate_numeric, NumericKind};
///
/// assert_eq!(validate_numeric("-12.5e3"), Some(NumericKind::Float));
/// assert_eq!(validate_numeric("0x1f"), Some(NumericKind::Hex));
/// assert_eq!(validate_numeric("12.3.4"), None);
/// ```
pub fn validate_numeric(text: &str) -> Option<NumericKind> {
    let mut walk = Walk {
        bytes: text.as_bytes(),
        pos: 0,
    };

    walk.eat_while(|b| matches!(b, b'+' | b'-'));

    let kind = match (walk.at(0), walk.at(1), walk.at(2)) {
        (b'.', d, _) if is_digit(d) => {
            walk.pos += 1;
            walk.eat_while(is_digit);
            walk.eat_exponent();
            NumericKind::Float
        }
        (b'0', b'b', d) if is_bin_digit(d) => {
            walk.pos += 2;
            walk.eat_while(is_bin_digit);
            NumericKind::Binary
        }
        (b'0', b'x', d) if is_hex_digit(d) => {
            walk.pos += 2;
            walk.eat_while(is_hex_digit);
            NumericKind::Hex
        }
        (d, _, _) if is_digit(d) => walk.decimal()?,
        _ => return None,
    };

    walk.is_done().then_some(kind)
}

/// Bounded byte walker. Reads past the end yield `0`.
struct Walk<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Walk<'_> {
    #[inline]
    fn at(&self, ahead: usize) -> u8 {
        self.bytes.get(self.pos + ahead).copied().unwrap_or(0)
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.at(0)) {
            self.pos += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Digits, at most one fraction, optional exponent.
    fn decimal(&mut self) -> Option<NumericKind> {
        self.eat_while(is_digit);

        let mut kind = NumericKind::Integer;
        let mut fractions = 0;
        while self.at(0) == b'.' && is_digit(self.at(1)) {
            self.pos += 1;
            self.eat_while(is_digit);
            fractions += 1;
            kind = NumericKind::Float;
        }
        if fractions > 1 {
            return None;
        }

        if self.eat_exponent() {
            kind = NumericKind::Float;
        }
        Some(kind)
    }

    /// `e`/`E`, an optional sign, then at least one digit.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.at(0), b'e' | b'E') {
            return false;
        }
        let has_digits = is_digit(self.at(1))
            || (matches!(self.at(1), b'+' | b'-') && is_digit(self.at(2)));
        if !has_digits {
            return false;
        }
        self.pos += 2;
        self.eat_while(is_digit);
        true
    }
}
