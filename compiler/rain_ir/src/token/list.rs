//! Append-only token storage.

use std::ops::Index;

use super::Token;

/// Typed index into a [`TokenList`].
///
/// Indices stay valid for the list's whole lifetime: the list only grows,
/// and a reallocation of the backing `Vec` moves tokens without changing
/// their index.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TokenIdx(u32);

impl TokenIdx {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TokenIdx(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered, append-only sequence of tokens.
#[derive(Clone, Debug, Default)]
pub struct TokenList<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenList<'src> {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Append a token and return its index.
    ///
    /// Lists are capped at `u32::MAX` tokens; the index saturates past that.
    #[inline]
    pub fn push(&mut self, token: Token<'src>) -> TokenIdx {
        let idx = TokenIdx(u32::try_from(self.tokens.len()).unwrap_or(u32::MAX));
        self.tokens.push(token);
        idx
    }

    #[inline]
    pub fn get(&self, idx: TokenIdx) -> Option<&Token<'src>> {
        self.tokens.get(idx.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Token<'src>> {
        self.tokens.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token<'src>] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'src>> {
        self.tokens.iter()
    }
}

impl<'src> Index<TokenIdx> for TokenList<'src> {
    type Output = Token<'src>;

    #[inline]
    fn index(&self, idx: TokenIdx) -> &Self::Output {
        &self.tokens[idx.index()]
    }
}

impl<'src> Index<usize> for TokenList<'src> {
    type Output = Token<'src>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a, 'src> IntoIterator for &'a TokenList<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = std::slice::Iter<'a, Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
