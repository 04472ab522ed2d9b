use std::fmt;

use rain_ir::{Token, TokenIdx, TokenKind};
use rain_lexer::TokenStream;

use super::Rule;
use crate::{ExpectedKinds, ParseOutcome};

/// One token of kind `K` (raw [`TokenKind`] bits), kept in the tree by index.
///
/// ```text
/// type Plus = Terminal<{ TokenKind::SIGN_ADD.bits() }>;
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Terminal<const K: u16> {
    token: TokenIdx,
}

impl<const K: u16> Terminal<K> {
    pub const KIND: TokenKind = TokenKind::from_bits(K);

    #[inline]
    pub fn kind(&self) -> TokenKind {
        Self::KIND
    }

    /// Index of the matched token in the stream.
    #[inline]
    pub fn index(&self) -> TokenIdx {
        self.token
    }

    /// The matched token.
    pub fn token<'a, 'src>(&self, stream: &'a TokenStream<'src>) -> Option<&'a Token<'src>> {
        stream.token(self.token)
    }
}

impl<const K: u16> fmt::Debug for Terminal<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Terminal({} #{})", Self::KIND, self.token.raw())
    }
}

impl<const K: u16> Rule for Terminal<K> {
    #[inline]
    fn lookahead(stream: &mut TokenStream<'_>) -> bool {
        stream.peek_kind() == Self::KIND
    }

    fn first() -> ExpectedKinds {
        ExpectedKinds::single(Self::KIND)
    }

    fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self> {
        if !Self::lookahead(stream) {
            return ParseOutcome::empty_err(Self::first(), stream.position());
        }
        let token = stream.current_index();
        stream.next();
        ParseOutcome::consumed_ok(Terminal { token })
    }
}

/// One token of kind `K`, matched and then dropped from the tree.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Discard<const K: u16>;

impl<const K: u16> Discard<K> {
    pub const KIND: TokenKind = TokenKind::from_bits(K);
}

impl<const K: u16> fmt::Debug for Discard<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discard({})", Self::KIND)
    }
}

impl<const K: u16> Rule for Discard<K> {
    #[inline]
    fn lookahead(stream: &mut TokenStream<'_>) -> bool {
        Terminal::<K>::lookahead(stream)
    }

    fn first() -> ExpectedKinds {
        Terminal::<K>::first()
    }

    fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self> {
        Terminal::<K>::parse(stream).map(|_| Discard)
    }
}
