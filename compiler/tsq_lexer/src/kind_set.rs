//! Bitset of token kinds.
//!
//! Used as the assembler's ignore set. Every [`TokenKind`] discriminant is a
//! `u8`, so two `u128` words cover the whole kind space and membership is a
//! shift and a mask.

use std::fmt;

use tsq_lexer_core::TokenKind;

/// A set of token kinds with O(1) membership testing.
///
/// # Example
/// ```
/// use tsq_lexer::KindSet;
/// use tsq_lexer_core::TokenKind;
///
/// const TRIVIA: KindSet = KindSet::new()
///     .with(TokenKind::Space)
///     .with(TokenKind::Comment);
///
/// assert!(TRIVIA.contains(TokenKind::Comment));
/// assert!(!TRIVIA.contains(TokenKind::Id));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet([u128; 2]);

/// Word index and bit mask for `kind`.
#[inline]
const fn slot(kind: TokenKind) -> (usize, u128) {
    let code = kind as u8;
    ((code >> 7) as usize, 1u128 << (code & 0x7F))
}

impl KindSet {
    /// Whitespace and comments.
    pub const TRIVIA: Self = Self::new().with(TokenKind::Space).with(TokenKind::Comment);

    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self([0; 2])
    }

    /// Create a set containing a single kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self::new().with(kind)
    }

    /// Add a kind (builder form, usable in `const`).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let (word, bit) = slot(kind);
        let mut words = self.0;
        words[word] |= bit;
        Self(words)
    }

    /// Remove a kind (builder form, usable in `const`).
    #[inline]
    #[must_use]
    pub const fn without(self, kind: TokenKind) -> Self {
        let (word, bit) = slot(kind);
        let mut words = self.0;
        words[word] &= !bit;
        Self(words)
    }

    /// Union of two sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self([self.0[0] | other.0[0], self.0[1] | other.0[1]])
    }

    /// Check whether `kind` is in the set.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let (word, bit) = slot(kind);
        self.0[word] & bit != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Number of kinds in the set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0[0].count_ones() + self.0[1].count_ones()
    }

    /// Add a kind in place.
    #[inline]
    pub fn insert(&mut self, kind: TokenKind) {
        *self = self.with(kind);
    }

    /// Remove a kind in place.
    #[inline]
    pub fn remove(&mut self, kind: TokenKind) {
        *self = self.without(kind);
    }

    /// Iterate over the kinds in discriminant order.
    pub fn iter(&self) -> KindSetIter {
        KindSetIter {
            words: self.0,
            word: 0,
        }
    }
}

impl FromIterator<TokenKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl IntoIterator for &KindSet {
    type Item = TokenKind;
    type IntoIter = KindSetIter;

    fn into_iter(self) -> KindSetIter {
        self.iter()
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the kinds in a [`KindSet`].
pub struct KindSetIter {
    words: [u128; 2],
    word: usize,
}

impl Iterator for KindSetIter {
    type Item = TokenKind;

    fn next(&mut self) -> Option<TokenKind> {
        while self.word < 2 {
            let bits = self.words[self.word];
            if bits == 0 {
                self.word += 1;
                continue;
            }
            self.words[self.word] &= bits - 1; // clear lowest set bit
            #[allow(
                clippy::cast_possible_truncation,
                reason = "word * 128 + trailing_zeros is at most 255"
            )]
            let code = (self.word * 128 + bits.trailing_zeros() as usize) as u8;
            if let Some(kind) = TokenKind::from_code(code) {
                return Some(kind);
            }
        }
        None
    }
}
