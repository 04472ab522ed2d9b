//! Lazily materialized token sequence with a read cursor.
//!
//! Tokens are produced on demand, one per `peek` at the end of what has
//! been materialized so far, and appended to a [`TokenList`]. Parsers keep
//! [`TokenIdx`] values rather than references, so growth never invalidates
//! anything they hold.

use rain_ir::{SourceId, Token, TokenIdx, TokenKind, TokenList};
use rain_lexer_core::SourceBuffer;
use thiserror::Error;
use tracing::warn;

use crate::{LexError, Scanner};

/// Invalid cursor movement on a [`TokenStream`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("cannot seek by {delta} from token {from}: only {len} tokens materialized")]
    SeekOutOfRange { from: usize, delta: isize, len: usize },
}

/// A lexical diagnostic and the token it was attached to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenDiagnostic {
    pub token: TokenIdx,
    pub error: LexError,
}

/// Opaque saved cursor position. Restoring one is always valid because the
/// token list only grows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(usize);

impl Mark {
    pub fn index(self) -> usize {
        self.0
    }
}

pub struct TokenStream<'src> {
    scanner: Scanner<'src>,
    tokens: TokenList<'src>,
    cursor: usize,
    diagnostics: Vec<TokenDiagnostic>,
}

impl<'src> TokenStream<'src> {
    pub fn new(buffer: &'src SourceBuffer, source: SourceId) -> Self {
        Self::with_scanner(Scanner::new(buffer, source))
    }

    pub fn with_scanner(scanner: Scanner<'src>) -> Self {
        TokenStream {
            scanner,
            tokens: TokenList::new(),
            cursor: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Scan one more token onto the end of the list.
    fn produce(&mut self) {
        let scanned = self.scanner.next_token();
        let idx = self.tokens.push(scanned.token);
        for error in scanned.errors {
            warn!(
                line = error.pos.line,
                column = error.pos.column,
                code = %error.kind.code(),
                "{}",
                error.kind
            );
            self.diagnostics.push(TokenDiagnostic { token: idx, error });
        }
    }

    /// The token under the cursor, scanning it first if needed.
    pub fn peek(&mut self) -> &Token<'src> {
        if self.cursor == self.tokens.len() {
            self.produce();
        }
        &self.tokens[self.cursor]
    }

    /// Kind of the token under the cursor.
    #[inline]
    pub fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Advance past the current token, then peek.
    pub fn next(&mut self) -> &Token<'src> {
        if self.cursor == self.tokens.len() {
            self.produce();
        }
        self.cursor += 1;
        self.peek()
    }

    /// Index of the token under the cursor, scanning it first if needed.
    pub fn current_index(&mut self) -> TokenIdx {
        self.peek();
        TokenIdx::from_raw(u32::try_from(self.cursor).unwrap_or(u32::MAX))
    }

    /// Move the cursor by `delta` tokens.
    ///
    /// The target must lie in `0..=len` where `len` is the number of tokens
    /// materialized so far; seeking never scans. On error the cursor is
    /// unchanged.
    pub fn seek(&mut self, delta: isize) -> Result<(), StreamError> {
        let len = self.tokens.len();
        match self.cursor.checked_add_signed(delta) {
            Some(target) if target <= len => {
                self.cursor = target;
                Ok(())
            }
            _ => Err(StreamError::SeekOutOfRange {
                from: self.cursor,
                delta,
                len,
            }),
        }
    }

    /// Cursor position in tokens.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark(self.cursor)
    }

    /// Return to a saved position.
    #[inline]
    pub fn restore(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.tokens.len());
        self.cursor = mark.0;
    }

    /// A materialized token.
    pub fn token(&self, idx: TokenIdx) -> Option<&Token<'src>> {
        self.tokens.get(idx)
    }

    /// Every token materialized so far.
    pub fn tokens(&self) -> &TokenList<'src> {
        &self.tokens
    }

    pub fn source(&self) -> SourceId {
        self.scanner.source()
    }

    /// Lexical diagnostics for the tokens materialized so far.
    pub fn diagnostics(&self) -> &[TokenDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<TokenDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Scan everything up to and including the end marker and hand back the
    /// tokens and diagnostics.
    pub fn finish(mut self) -> (TokenList<'src>, Vec<TokenDiagnostic>) {
        while !self.tokens.last().is_some_and(|t| t.kind.is_endmark()) {
            self.produce();
        }
        (self.tokens, self.diagnostics)
    }
}
