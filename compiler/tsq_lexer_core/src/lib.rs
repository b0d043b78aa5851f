//! Low-level scanner for the tsq query language.
//!
//! This crate classifies one token at a time over a sentinel-terminated
//! [`SourceBuffer`]. It has no `tsq_*` dependencies; the `tsq_lexer` crate
//! layers statement-level assembly (ignore sets, `db.tbl` stitching, sign
//! attachment) on top of it.
//!
//! # Pieces
//!
//! - [`SourceBuffer`] / [`Cursor`]: padded query storage and byte walking.
//! - [`TokenKind`] / [`RawToken`]: one-byte kinds and `(kind, len)` output.
//! - [`KeywordIndex`]: case-insensitive reserved-word lookup.
//! - [`RawScanner`] / [`scan_token`]: the single-token scanner.
//! - [`validate_numeric`]: strict re-classification of numeric text.
//!
//! Failures are values: the scanner reports `Illegal` tokens instead of
//! returning errors.

mod char_class;
mod cursor;
mod keywords;
mod kind;
mod numeric;
mod raw_scanner;
mod source_buffer;

pub use char_class::{is_ident_char, is_space, is_space_start};
pub use cursor::Cursor;
pub use keywords::{is_keyword, keyword_kind, KeywordEntry, KeywordIndex, KEYWORDS, MAX_KEYWORD_LEN};
pub use kind::{RawToken, TokenKind};
pub use numeric::{validate_numeric, NumericKind};
pub use raw_scanner::{scan_token, scan_token_with, tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
