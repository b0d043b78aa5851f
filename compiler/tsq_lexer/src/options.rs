//! Assembler configuration.

use tsq_lexer_core::TokenKind;

use crate::KindSet;

/// When a leading `+`/`-` is glued onto the number after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SignAttachment {
    /// Signs are always separate tokens.
    Never,
    /// Glue only when the caller says the previous token was an operator.
    #[default]
    AfterOperator,
    /// Glue whenever a number follows directly.
    Always,
}

impl SignAttachment {
    /// Resolve the caller's previous-token hint against this policy.
    #[inline]
    pub fn applies(self, prev_is_operator: bool) -> bool {
        match self {
            Self::Never => false,
            Self::AfterOperator => prev_is_operator,
            Self::Always => true,
        }
    }
}

/// Options for [`TokenAssembler`](crate::TokenAssembler) and [`lex`](crate::lex).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexOptions {
    /// Kinds skipped between returned tokens.
    pub ignore: KindSet,
    /// Sign handling for `-5` and `+1.5`.
    pub sign: SignAttachment,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            ignore: KindSet::TRIVIA,
            sign: SignAttachment::AfterOperator,
        }
    }
}

impl LexOptions {
    /// Replace the ignore set.
    #[must_use]
    pub fn with_ignore(mut self, ignore: KindSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// Also skip `kind`.
    #[must_use]
    pub fn ignoring(mut self, kind: TokenKind) -> Self {
        self.ignore.insert(kind);
        self
    }

    /// Return comments and `Space` runs instead of skipping them.
    ///
    /// Separator whitespace between tokens is still skipped.
    #[must_use]
    pub fn keep_trivia(mut self) -> Self {
        self.ignore = self.ignore.without(TokenKind::Space).without(TokenKind::Comment);
        self
    }

    #[must_use]
    pub fn with_sign(mut self, sign: SignAttachment) -> Self {
        self.sign = sign;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_skip_trivia() {
        let opts = LexOptions::default();
        assert_eq!(opts.ignore, KindSet::TRIVIA);
        assert_eq!(opts.sign, SignAttachment::AfterOperator);
    }

    #[test]
    fn keep_trivia_only_drops_trivia() {
        let opts = LexOptions::default().ignoring(TokenKind::Semi).keep_trivia();
        assert_eq!(opts.ignore, KindSet::single(TokenKind::Semi));
    }

    #[test]
    fn sign_policy() {
        assert!(!SignAttachment::Never.applies(true));
        assert!(SignAttachment::AfterOperator.applies(true));
        assert!(!SignAttachment::AfterOperator.applies(false));
        assert!(SignAttachment::Always.applies(false));
    }
}
