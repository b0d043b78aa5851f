//! Statement-level token assembly.
//!
//! Sits between the raw scanner and a parser:
//!
//! ```text
//! query → RawScanner → (TokenKind, len) → TokenAssembler → Token<'a>
//! ```
//!
//! On top of single-token scanning the assembler:
//! - skips whitespace, single commas, and any kind in the ignore set
//! - ends the statement at `;` with a zero-length `Semi`
//! - stitches `db.tbl` and `'db'.tbl` into one token
//! - glues a unary `+`/`-` onto the number that follows it
//!
//! Every stop is a zero-length token (or the length-2 lone `!`). The cursor
//! is a caller-owned `u32`, so a parser can drive one token at a time.

use tracing::{debug, trace};
use tsq_lexer_core::{scan_token_with, KeywordIndex, RawToken, SourceBuffer, TokenKind};

use crate::{KindSet, LexError, LexOptions, Token};

/// Assembles parser tokens from a [`SourceBuffer`].
#[derive(Clone, Copy)]
pub struct TokenAssembler<'a> {
    src: &'a SourceBuffer,
    keywords: &'a KeywordIndex,
    options: LexOptions,
}

impl<'a> TokenAssembler<'a> {
    /// Create an assembler backed by [`KeywordIndex::global()`].
    pub fn new(src: &'a SourceBuffer, options: LexOptions) -> Self {
        Self::with_keywords(src, KeywordIndex::global(), options)
    }

    /// Create an assembler that resolves words through `keywords`.
    pub fn with_keywords(
        src: &'a SourceBuffer,
        keywords: &'a KeywordIndex,
        options: LexOptions,
    ) -> Self {
        Self {
            src,
            keywords,
            options,
        }
    }

    pub fn source(&self) -> &'a SourceBuffer {
        self.src
    }

    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// Assemble the token at `*pos` and advance past it.
    ///
    /// `prev_is_operator` tells the assembler that a `+`/`-` here is unary;
    /// how much weight it carries depends on [`LexOptions::sign`].
    ///
    /// Returns a zero-length token at end of input (`Eof`) and at `;`
    /// (`Semi`, with `*pos` left on the `;`). Failures come back as a
    /// zero-length `Illegal`, except a lone `!`, which spans itself and the
    /// next character unless a `.` follows them.
    pub fn next_token(&self, pos: &mut u32, prev_is_operator: bool) -> Token<'a> {
        match self.try_next_token(pos, prev_is_operator) {
            Ok(tok) => tok,
            Err(err) => {
                let offset = err.offset();
                let end = (*pos).max(offset);
                Token::new(TokenKind::Illegal, offset, self.src.slice(offset, end))
            }
        }
    }

    /// Like [`next_token`](Self::next_token), but says why assembly stopped.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] wherever `next_token` would return `Illegal`.
    /// `*pos` is left on the offending input, or just past a lone `!`.
    pub fn try_next_token(
        &self,
        pos: &mut u32,
        prev_is_operator: bool,
    ) -> Result<Token<'a>, LexError> {
        self.try_assemble(pos, prev_is_operator, false)
    }

    /// With `comma_is_operator`, a skipped comma also makes a following
    /// sign unary, as in `VALUES (1.5, -2)`.
    pub(crate) fn try_assemble(
        &self,
        pos: &mut u32,
        prev_is_operator: bool,
        comma_is_operator: bool,
    ) -> Result<Token<'a>, LexError> {
        self.assemble(pos, prev_is_operator, comma_is_operator)
            .inspect(|tok| trace!(kind = ?tok.kind, offset = tok.offset, len = tok.len(), "token"))
            .inspect_err(|err| debug!(%err, "lexing stopped"))
    }

    fn assemble(
        &self,
        pos: &mut u32,
        prev_is_operator: bool,
        comma_is_operator: bool,
    ) -> Result<Token<'a>, LexError> {
        if *pos >= self.src.len() {
            return Ok(Token::empty(TokenKind::Eof, self.src.len()));
        }

        let (raw, saw_comma) = self.skip_ignored(pos)?;
        let start = *pos;
        let prev_is_operator = prev_is_operator || (comma_is_operator && saw_comma);

        match raw.kind {
            TokenKind::Eof => return Ok(Token::empty(TokenKind::Eof, start)),
            TokenKind::Semi => return Ok(Token::empty(TokenKind::Semi, start)),
            TokenKind::Illegal if raw.len == 0 => {
                return Err(LexError::from_illegal(start, self.byte_at(start)));
            }
            _ => {}
        }

        let mut kind = raw.kind;
        let mut len = raw.len;
        let end = start + raw.len;

        // No whitespace allowed on either side of the dot.
        if self.byte_at(end) == b'.' {
            if !matches!(kind, TokenKind::Id | TokenKind::String) {
                return Err(LexError::InvalidQualifiedName {
                    offset: start,
                    kind,
                });
            }
            len += 1 + self.scan(end + 1).len;
        } else if kind == TokenKind::Illegal {
            *pos = end;
            return Err(LexError::from_illegal(start, self.byte_at(start)));
        } else if self.options.sign.applies(prev_is_operator)
            && matches!(kind, TokenKind::Plus | TokenKind::Minus)
        {
            let number = self.scan(end);
            if matches!(number.kind, TokenKind::Integer | TokenKind::Float) {
                kind = number.kind;
                len += number.len;
            }
        }

        *pos = start + len;
        Ok(Token::new(kind, start, self.src.slice(start, *pos)))
    }

    /// Skip separators and ignored kinds, returning the first kept raw token
    /// with `*pos` on its first byte, and whether a comma was skipped.
    ///
    /// Zero-length tokens are never skipped, so an ignore set holding `Eof`
    /// or `Illegal` cannot stall the loop.
    fn skip_ignored(&self, pos: &mut u32) -> Result<(RawToken, bool), LexError> {
        let mut saw_comma = false;
        loop {
            saw_comma |= self.skip_separators(pos)?;
            let raw = self.scan(*pos);
            if raw.len == 0 || !self.options.ignore.contains(raw.kind) {
                return Ok((raw, saw_comma));
            }
            *pos += raw.len;
        }
    }

    /// Skip whitespace and at most one comma. Returns `true` if the comma
    /// was there.
    fn skip_separators(&self, pos: &mut u32) -> Result<bool, LexError> {
        let mut seen_comma = false;
        loop {
            match self.byte_at(*pos) {
                b' ' | b'\n' | b'\r' | b'\t' | b'\x0c' => {}
                b',' if !seen_comma => seen_comma = true,
                b',' => return Err(LexError::RepeatedComma { offset: *pos }),
                _ => return Ok(seen_comma),
            }
            *pos += 1;
        }
    }

    #[inline]
    fn scan(&self, pos: u32) -> RawToken {
        scan_token_with(self.src, pos, self.keywords)
    }

    /// Byte at `pos`; `0` on the sentinel and beyond.
    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.src.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }
}

/// Assemble the token at `*pos` with the global keyword index.
///
/// `ignore` names the kinds to skip, typically [`KindSet::TRIVIA`]. A
/// zero-length result means end of input, end of statement, or failure;
/// check `kind` to tell them apart.
pub fn next_token<'a>(
    src: &'a SourceBuffer,
    pos: &mut u32,
    prev_is_operator: bool,
    ignore: KindSet,
) -> Token<'a> {
    TokenAssembler::new(src, LexOptions::default().with_ignore(ignore))
        .next_token(pos, prev_is_operator)
}

// ─── Streams ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
    Running,
    AtSemi,
    Done,
}

/// Iterator over the tokens of one statement.
///
/// Works out the unary-sign hint itself: a `+`/`-` is unary at the start of
/// a statement, after a separating comma, and after any token that does not
/// end an operand. Trivia is transparent to that decision.
///
/// Yields at most one `Err`, then stops. After a `;`,
/// [`next_statement`](Self::next_statement) resumes with the next statement.
pub struct TokenStream<'a> {
    assembler: TokenAssembler<'a>,
    pos: u32,
    prev: Option<TokenKind>,
    state: StreamState,
}

impl<'a> TokenStream<'a> {
    pub fn new(assembler: TokenAssembler<'a>) -> Self {
        Self {
            assembler,
            pos: 0,
            prev: None,
            state: StreamState::Running,
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// `true` once the current statement ended at a `;`.
    pub fn at_statement_end(&self) -> bool {
        self.state == StreamState::AtSemi
    }

    /// Step over the `;` that ended the current statement.
    ///
    /// Returns `false` (and does nothing) unless the stream stopped at a `;`.
    pub fn next_statement(&mut self) -> bool {
        if self.state != StreamState::AtSemi {
            return false;
        }
        self.pos += 1;
        self.prev = None;
        self.state = StreamState::Running;
        true
    }

    fn prev_is_operator(&self) -> bool {
        !self.prev.is_some_and(TokenKind::ends_operand)
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != StreamState::Running {
            return None;
        }
        let prev_is_operator = self.prev_is_operator();
        match self
            .assembler
            .try_assemble(&mut self.pos, prev_is_operator, true)
        {
            Ok(tok) if tok.is_empty() => {
                self.state = if tok.kind == TokenKind::Semi {
                    StreamState::AtSemi
                } else {
                    StreamState::Done
                };
                None
            }
            Ok(tok) => {
                if !tok.kind.is_trivia() {
                    self.prev = Some(tok.kind);
                }
                Some(Ok(tok))
            }
            Err(err) => {
                self.state = StreamState::Done;
                Some(Err(err))
            }
        }
    }
}

/// Assemble the first statement of `src`.
///
/// # Errors
///
/// Returns the first [`LexError`] hit before the end of the statement.
pub fn lex<'a>(src: &'a SourceBuffer, options: &LexOptions) -> Result<Vec<Token<'a>>, LexError> {
    TokenStream::new(TokenAssembler::new(src, *options)).collect()
}

/// Assemble every `;`-separated statement of `src`.
///
/// Empty statements (`;;`) are dropped.
///
/// # Errors
///
/// Returns the first [`LexError`] in any statement.
pub fn lex_statements<'a>(
    src: &'a SourceBuffer,
    options: &LexOptions,
) -> Result<Vec<Vec<Token<'a>>>, LexError> {
    let mut stream = TokenStream::new(TokenAssembler::new(src, *options));
    let mut statements = Vec::new();
    loop {
        let statement = stream.by_ref().collect::<Result<Vec<_>, _>>()?;
        if !statement.is_empty() {
            statements.push(statement);
        }
        if !stream.next_statement() {
            return Ok(statements);
        }
    }
}
