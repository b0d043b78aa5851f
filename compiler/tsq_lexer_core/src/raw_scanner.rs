//! Hand-written scanner producing `(TokenKind, len)` pairs.
//!
//! The scanner classifies the single token that starts at the cursor. It
//! resolves keywords through a [`KeywordIndex`] but does no stitching,
//! filtering, or sign handling: that is the assembler's job.
//!
//! # Design
//!
//! Main dispatch is one `match` on the first byte. Each arm calls a focused
//! method that advances the cursor and returns a [`RawToken`]. Failures are
//! `Illegal` tokens, never `Err`. A zero-length `Illegal` leaves the cursor
//! where it was, so a caller that keeps scanning must stop on it.

use crate::char_class::{
    is_bin_digit, is_digit, is_duration_suffix, is_hex_digit, is_ident_char, is_space_start,
};
use crate::cursor::Cursor;
use crate::keywords::KeywordIndex;
use crate::kind::{RawToken, TokenKind};
use crate::SourceBuffer;

/// Allocation-free single-token scanner.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    keywords: &'a KeywordIndex,
}

impl<'a> RawScanner<'a> {
    /// Create a scanner that resolves words through `keywords`.
    pub fn new(cursor: Cursor<'a>, keywords: &'a KeywordIndex) -> Self {
        Self { cursor, keywords }
    }

    /// Create a scanner backed by [`KeywordIndex::global()`].
    pub fn with_global_keywords(cursor: Cursor<'a>) -> Self {
        Self::new(cursor, KeywordIndex::global())
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `Eof` with `len == 0` at the end of the query, and keeps
    /// returning it on later calls.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.nul(),
            b if is_space_start(b) => self.whitespace(start),
            b':' => self.single(start, TokenKind::Colon),
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b';' => self.single(start, TokenKind::Semi),
            b'+' => self.single(start, TokenKind::Plus),
            b'*' => self.single(start, TokenKind::Star),
            b'%' => self.single(start, TokenKind::Rem),
            b',' => self.single(start, TokenKind::Comma),
            b'&' => self.single(start, TokenKind::BitAnd),
            b'~' => self.single(start, TokenKind::BitNot),
            b'?' => self.single(start, TokenKind::Question),
            b'-' => self.minus_or_comment(start),
            b'/' => self.slash_or_comment(start),
            b'=' => self.equal(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'!' => self.bang(start),
            b'|' => self.pipe(start),
            delim @ (b'\'' | b'"') => self.string(start, delim),
            b'.' => self.dot(start),
            b'0'..=b'9' => self.number(start),
            b'[' => self.bracketed(start),
            b't' | b'T' | b'f' | b'F' => self.bool_or_word(start),
            b if is_ident_char(b) => self.word(start),
            _ => RawToken::ILLEGAL,
        }
    }

    #[inline]
    fn token(&self, start: u32, kind: TokenKind) -> RawToken {
        RawToken::new(kind, self.cursor.pos() - start)
    }

    // ─── EOF ────────────────────────────────────────────────────────────

    fn nul(&self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken::EOF
        } else {
            // Interior NUL: the query text ends here as far as the grammar
            // is concerned.
            RawToken::ILLEGAL
        }
    }

    // ─── Whitespace & Comments ──────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, TokenKind::Space)
    }

    fn minus_or_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'-' {
            self.cursor.advance_n(2);
            self.cursor.eat_through_newline_or_eof();
            self.token(start, TokenKind::Comment)
        } else {
            self.single(start, TokenKind::Minus)
        }
    }

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'*' {
            self.cursor.advance_n(2);
            // Unterminated comments run to the end of the query.
            self.cursor.eat_block_comment_body();
            self.token(start, TokenKind::Comment)
        } else {
            self.single(start, TokenKind::Slash)
        }
    }

    // ─── Operators ──────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit `kind`.
    fn single(&mut self, start: u32, kind: TokenKind) -> RawToken {
        self.cursor.advance();
        self.token(start, kind)
    }

    /// Two-byte token: advance two bytes and emit `kind`.
    fn double(&mut self, start: u32, kind: TokenKind) -> RawToken {
        self.cursor.advance_n(2);
        self.token(start, kind)
    }

    fn equal(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.double(start, TokenKind::Eq)
        } else {
            self.single(start, TokenKind::Eq)
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'=' => self.double(start, TokenKind::Le),
            b'>' => self.double(start, TokenKind::Ne),
            b'<' => self.double(start, TokenKind::LShift),
            _ => self.single(start, TokenKind::Lt),
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'=' => self.double(start, TokenKind::Ge),
            b'>' => self.double(start, TokenKind::RShift),
            _ => self.single(start, TokenKind::Gt),
        }
    }

    /// `!=` is not-equal. A lone `!` is illegal but still steps over itself
    /// and the next character.
    fn bang(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'=' {
            return self.double(start, TokenKind::Ne);
        }
        self.cursor.advance();
        self.cursor.advance_char();
        self.token(start, TokenKind::Illegal)
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'|' {
            self.double(start, TokenKind::Concat)
        } else {
            self.single(start, TokenKind::BitOr)
        }
    }

    // ─── Strings & Bracketed Names ──────────────────────────────────────

    fn string(&mut self, start: u32, delim: u8) -> RawToken {
        let saved = self.cursor;
        self.cursor.advance();
        if self.cursor.eat_quoted_body(delim) {
            self.token(start, TokenKind::String)
        } else {
            self.cursor = saved;
            RawToken::ILLEGAL
        }
    }

    fn bracketed(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_through(b']');
        self.token(start, TokenKind::Id)
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    /// `.digits[exp]` is a float; a bare `.` is the qualifier separator.
    fn dot(&mut self, start: u32) -> RawToken {
        if !is_digit(self.cursor.peek()) {
            return self.single(start, TokenKind::Dot);
        }
        self.cursor.advance();
        self.cursor.eat_while(is_digit);
        self.eat_exponent();
        self.token(start, TokenKind::Float)
    }

    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0' {
            match (self.cursor.peek(), self.cursor.peek2()) {
                (b'b', d) if is_bin_digit(d) => {
                    return self.radix(start, is_bin_digit, TokenKind::Bin);
                }
                (b'x', d) if is_hex_digit(d) => {
                    return self.radix(start, is_hex_digit, TokenKind::Hex);
                }
                // A bare prefix is just the integer `0`.
                _ => {}
            }
        }

        self.cursor.eat_while(is_digit);

        if is_duration_suffix(self.cursor.current()) && !is_ident_char(self.cursor.peek()) {
            self.cursor.advance();
            return self.token(start, TokenKind::Variable);
        }

        let mut kind = TokenKind::Integer;
        let mut segments = 1;
        while self.cursor.current() == b'.' && is_digit(self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
            kind = TokenKind::Float;
            segments += 1;
        }

        if segments == 4 {
            return self.token(start, TokenKind::IpToken);
        }

        if self.eat_exponent() {
            kind = TokenKind::Float;
        }
        self.token(start, kind)
    }

    /// `0b`/`0x` literal. The caller has checked that a digit follows the
    /// prefix.
    fn radix(&mut self, start: u32, is_radix_digit: fn(u8) -> bool, kind: TokenKind) -> RawToken {
        self.cursor.advance_n(2);
        self.cursor.eat_while(is_radix_digit);
        self.token(start, kind)
    }

    /// Consume `e`/`E`, an optional sign, and a digit run. Returns `false`
    /// (consuming nothing) unless at least one digit follows.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let next = self.cursor.peek();
        let signed_digit = matches!(next, b'+' | b'-') && is_digit(self.cursor.peek2());
        if !is_digit(next) && !signed_digit {
            return false;
        }
        self.cursor.advance_n(2);
        self.cursor.eat_while(is_digit);
        true
    }

    // ─── Words ──────────────────────────────────────────────────────────

    /// `true`/`false` in any case are booleans; other words starting with
    /// `t` or `f` go through the keyword index.
    fn bool_or_word(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_ident_char);
        let text = self.cursor.slice_from(start);
        if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
            return self.token(start, TokenKind::Bool);
        }
        let kind = self.keywords.lookup(text);
        self.token(start, kind)
    }

    fn word(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_ident_char);
        let kind = self.keywords.lookup(self.cursor.slice_from(start));
        self.token(start, kind)
    }
}

/// Classify the token starting at `pos`, resolving words through the
/// global keyword index.
///
/// Positions past the end of the query yield `Eof`.
pub fn scan_token(buf: &SourceBuffer, pos: u32) -> RawToken {
    scan_token_with(buf, pos, KeywordIndex::global())
}

/// Classify the token starting at `pos` using an explicit keyword index.
pub fn scan_token_with(buf: &SourceBuffer, pos: u32, keywords: &KeywordIndex) -> RawToken {
    RawScanner::new(buf.cursor_at(pos), keywords).next_token()
}

/// Scan a whole query into raw tokens.
///
/// Stops before `Eof`, or after the first zero-length `Illegal` token, which
/// is included so the caller can see where scanning gave up.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::with_global_keywords(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }
        tokens.push(tok);
        if tok.len == 0 {
            break;
        }
    }
    tokens
}
