//! Tokens and token storage.

mod kind;
mod list;

pub use kind::{KindFlags, TokenKind};
pub use list::{TokenIdx, TokenList};

use std::fmt;

use crate::{Position, Span};

/// One lexeme: its kind, the text it spans, and where it starts.
///
/// `text` borrows the source buffer, so tokens never copy source bytes.
/// Tokens are immutable once appended to a [`TokenList`]; the scanner ORs
/// in [`KindFlags::ERROR`] before that happens.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
    pub pos: Position,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span, pos: Position) -> Self {
        Token {
            kind,
            text,
            span,
            pos,
        }
    }

    /// Check for an exact kind match, flags included.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.text, self.pos)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{TokenIdx, TokenKind};
    crate::static_assert_size!(TokenKind, 2);
    crate::static_assert_size!(TokenIdx, 4);
}
