//! Sentinel-terminated query buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the query text,
//! followed by zero padding, so the scanner can look up to two bytes past
//! any position without checking bounds. The total size is rounded up to a
//! 64-byte boundary.
//!
//! The backing storage is a `String`: NUL is valid UTF-8, so the padded
//! buffer stays a `str` and token text can be sliced out without
//! re-validation or `unsafe`.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum zero bytes after the query: the sentinel plus lookahead room for
/// `peek()` and `peek2()` issued from the last source byte.
const MIN_PADDING: usize = 4;

/// Largest query the buffer accepts. Positions are `u32` and the padding
/// must stay addressable.
const MAX_SOURCE_LEN: usize = u32::MAX as usize - CACHE_LINE;

/// Sentinel-terminated query buffer.
///
/// # Layout
///
/// ```text
/// [query_bytes..., 0x00, padding_zeros...]
///  ^               ^     ^
///  0               |     rounded up to 64-byte boundary
///             source_len (sentinel)
/// ```
///
/// Tokens produced from this buffer borrow it; they cannot outlive it.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[query..., '\0' sentinel, '\0' padding...]`.
    buf: String,
    /// Length of the query text (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Queries longer than `u32::MAX - 64` bytes are cut at the last
    /// character boundary below that limit.
    pub fn new(source: &str) -> Self {
        let source = clamp_to_max_len(source);
        let source_len = source.len();

        let padded_len = (source_len + MIN_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the query bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_bytes()[..self.source_len as usize]
    }

    /// Returns the query text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        self.slice(0, self.source_len)
    }

    /// Returns the full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a [`Cursor`] positioned at `pos`.
    ///
    /// Positions past the end of the query are clamped to the sentinel.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        let mut cursor = self.cursor();
        cursor.advance_n(pos.min(self.source_len));
        cursor
    }

    /// Extract `start..end` of the query text.
    ///
    /// Returns `""` if the range is out of bounds or splits a character;
    /// ranges produced by the scanner never do either.
    pub fn slice(&self, start: u32, end: u32) -> &str {
        self.cursor().slice(start, end)
    }

    /// Length of the query in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the query is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Cut `source` to at most [`MAX_SOURCE_LEN`] bytes on a character boundary.
fn clamp_to_max_len(source: &str) -> &str {
    if source.len() <= MAX_SOURCE_LEN {
        return source;
    }
    let mut end = MAX_SOURCE_LEN;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}

#[cfg(test)]
mod tests;
