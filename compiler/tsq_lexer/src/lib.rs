//! Statement-level lexing for the tsq query language.
//!
//! Builds parser-ready [`Token`]s on top of the single-token scanner in
//! `tsq_lexer_core`:
//!
//! ```text
//! query → SourceBuffer → RawScanner → TokenAssembler → Token<'a>
//! ```
//!
//! A parser normally drives [`next_token`] (or [`TokenAssembler::next_token`])
//! one token at a time, passing whether the previous token was an operator.
//! [`TokenStream`], [`lex`], and [`lex_statements`] work that hint out
//! themselves.
//!
//! # Example
//! ```
//! use tsq_lexer::{lex, LexOptions};
//! use tsq_lexer_core::{SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("select * from db.meters where v > -5");
//! let tokens = lex(&buf, &LexOptions::default()).unwrap();
//! assert_eq!(tokens[3].text, "db.meters");
//! assert_eq!(tokens[7].kind, TokenKind::Integer);
//! assert_eq!(tokens[7].text, "-5");
//! ```

mod assembler;
mod kind_set;
mod lex_error;
mod options;
mod token;
mod tracing_setup;

pub use assembler::{lex, lex_statements, next_token, TokenAssembler, TokenStream};
pub use kind_set::{KindSet, KindSetIter};
pub use lex_error::LexError;
pub use options::{LexOptions, SignAttachment};
pub use token::Token;
pub use tracing_setup::init_tracing;
