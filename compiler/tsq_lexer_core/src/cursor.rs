//! Zero-cost cursor over a sentinel-terminated query buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the query length. Lookahead of up to two bytes never needs a
//! bounds check in practice: the buffer padding guarantees the reads land on
//! zero bytes.
//!
//! # Interior Null Bytes
//!
//! A NUL inside the query (`pos < source_len`) is not EOF. The scanning
//! helpers below treat it as a hard stop: comments and bracketed names end
//! in front of it, and quoted strings are unterminated when they reach it.

use crate::char_class::is_space;

/// Cursor over a sentinel-terminated query buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a scan can snapshot its start position freely.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`, with at
/// least three bytes of zeros after the query. Guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Query text, sentinel, and padding.
    buf: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the query text (excludes sentinel and padding).
    source_len: u32,
}

/// &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes on 64-bit.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf` must come from `SourceBuffer::new()`: the sentinel sits at
    /// `source_len` and zero padding follows it.
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            buf.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at `pos`, or `0x00` if `pos` runs off the padded buffer.
    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.buf.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF. Interior NUL bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to tell them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos as usize + 2)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached the end of the query.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the query.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the query (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract `start..end` of the query as `&str`.
    ///
    /// Returns `""` when the range leaves the query or splits a UTF-8
    /// character. Token boundaries produced by the scanner never do.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        if end > self.source_len {
            return "";
        }
        self.buf.get(start as usize..end as usize).unwrap_or("")
    }

    /// Extract the query text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Query bytes from the current position up to the end of the query.
    fn rest(&self) -> &'a [u8] {
        let bytes = self.buf.as_bytes();
        bytes
            .get(self.pos as usize..self.source_len as usize)
            .unwrap_or_default()
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel ends the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past a run of whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_space);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character, stopping at the end of the
    /// query.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Advance through the next `\n` (inclusive), or up to an interior NUL,
    /// or to EOF.
    ///
    /// Used by the line-comment scanner.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets into rest() are bounded by source_len, a u32"
    )]
    pub fn eat_through_newline_or_eof(&mut self) {
        let rest = self.rest();
        match memchr::memchr2(b'\n', 0, rest) {
            Some(off) if rest[off] == b'\n' => self.pos += off as u32 + 1,
            Some(off) => self.pos += off as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past the `*/` that closes a block comment.
    ///
    /// The cursor must sit just after the opening `/*`. Returns `false` and
    /// stops at EOF (or an interior NUL) when no terminator exists.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets into rest() are bounded by source_len, a u32"
    )]
    pub fn eat_block_comment_body(&mut self) -> bool {
        let rest = self.rest();
        let live = match memchr::memchr(0, rest) {
            Some(nul) => &rest[..nul],
            None => rest,
        };
        if let Some(off) = memchr::memmem::find(live, b"*/") {
            self.pos += off as u32 + 2;
            true
        } else {
            self.pos += live.len() as u32;
            false
        }
    }

    /// Advance past the body and closing delimiter of a quoted string.
    ///
    /// The cursor must sit just after the opening `delim`. A doubled
    /// delimiter is an escaped quote and does not close the string. Returns
    /// `false` when the string runs into EOF or an interior NUL; the cursor
    /// position is unspecified in that case.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets into rest() are bounded by source_len, a u32"
    )]
    pub fn eat_quoted_body(&mut self, delim: u8) -> bool {
        loop {
            let rest = self.rest();
            match memchr::memchr2(delim, 0, rest) {
                Some(off) if rest[off] == delim => {
                    self.pos += off as u32 + 1;
                    if self.current() == delim {
                        self.advance();
                    } else {
                        return true;
                    }
                }
                _ => return false,
            }
        }
    }

    /// Advance through the next `byte` (inclusive), or up to an interior
    /// NUL, or to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets into rest() are bounded by source_len, a u32"
    )]
    pub fn eat_through(&mut self, byte: u8) {
        let rest = self.rest();
        match memchr::memchr2(byte, 0, rest) {
            Some(off) if rest[off] == byte => self.pos += off as u32 + 1,
            Some(off) => self.pos += off as u32,
            None => self.pos = self.source_len,
        }
    }
}
