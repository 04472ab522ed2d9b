//! Lexer for Rain.
//!
//! - [`Scanner`] turns a [`SourceBuffer`] into tokens one lexeme at a time,
//!   collecting [`LexError`]s beside each token.
//! - [`TokenStream`] materializes tokens lazily for the parser.
//! - [`lex`] scans a whole buffer eagerly.

mod keywords;
mod lex_error;
mod scanner;
mod stream;

pub use keywords::{KeywordTrie, RESERVED};
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{Scanned, Scanner};
pub use stream::{Mark, StreamError, TokenDiagnostic, TokenStream};

use rain_ir::{SourceId, TokenList};
use rain_lexer_core::SourceBuffer;

/// Output of [`lex`].
#[derive(Clone, Debug, Default)]
pub struct LexOutput<'src> {
    /// Every token, ending with exactly one `ENDMARK`.
    pub tokens: TokenList<'src>,
    pub diagnostics: Vec<TokenDiagnostic>,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scan all of `buffer`.
pub fn lex(buffer: &SourceBuffer, source: SourceId) -> LexOutput<'_> {
    let (tokens, diagnostics) = TokenStream::new(buffer, source).finish();
    LexOutput {
        tokens,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rain_ir::{SourceId, TokenKind};
    use rain_lexer_core::SourceBuffer;

    use super::lex;

    #[test]
    fn lex_ends_with_single_end_marker() {
        let buffer = SourceBuffer::from_text("let x = 0x1F; // done");
        let output = lex(&buffer, SourceId::ANONYMOUS);
        let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::KEYWORD_LET,
                TokenKind::IDENTIFIER,
                TokenKind::SIGN_ASSIGN,
                TokenKind::HEX_INTEGER,
                TokenKind::SIGN_SEMICOLON,
                TokenKind::ENDMARK,
            ]
        );
        assert!(!output.has_errors());
    }

    #[test]
    fn lex_empty_source() {
        let buffer = SourceBuffer::new(b"");
        let output = lex(&buffer, SourceId::ANONYMOUS);
        assert_eq!(output.tokens.len(), 1);
        assert!(output.tokens[0].kind.is_endmark());
    }
}
