//! Lexical diagnostics.
//!
//! A lexeme with problems still becomes a token (flagged
//! [`KindFlags::ERROR`](rain_ir::KindFlags::ERROR)); the problems travel
//! beside it as [`LexError`] values. They are never `Err`.

use std::fmt;

use rain_diagnostic::{Diagnostic, ErrorCode};
use rain_ir::{Position, Span};
use rain_lexer_core::EncodingIssueKind;
use thiserror::Error;

/// A lexical problem and where it occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: Position,
    pub span: Span,
}

/// What went wrong while scanning a lexeme.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated char literal")]
    UnterminatedChar,
    /// `0x`/`0b` not followed by a digit of the base.
    #[error("expected a base-{radix} digit, found {}", Found(.found))]
    MissingRadixDigit { radix: u8, found: Option<char> },
    /// `8` or `9` inside an octal literal.
    #[error("invalid digit '{digit}' in octal literal")]
    InvalidOctalDigit { digit: char },
    #[error("invalid escape sequence '\\{}'", .found.escape_default())]
    InvalidEscape { found: char },
    /// A fixed-width escape (`\x`, `\u`, `\U`, octal) with a bad digit.
    #[error("expected a base-{radix} digit in escape sequence, found {}", Found(.found))]
    InvalidEscapeDigit { radix: u8, found: Option<char> },
    #[error("empty char literal")]
    EmptyChar,
    #[error("char literal must contain exactly one character")]
    MultiCharLiteral,
    #[error("unrecognized character '{}'", .found.escape_default())]
    UnrecognizedChar { found: char },
    #[error("{}", .0.message())]
    Encoding(EncodingIssueKind),
}

/// Renders a looked-at character, or end of input.
struct Found<'a>(&'a Option<char>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(c) => write!(f, "'{}'", c.escape_default()),
            None => f.write_str("end of input"),
        }
    }
}

impl LexErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedChar => ErrorCode::E0001,
            LexErrorKind::UnrecognizedChar { .. } => ErrorCode::E0002,
            LexErrorKind::MissingRadixDigit { .. } | LexErrorKind::InvalidOctalDigit { .. } => {
                ErrorCode::E0003
            }
            LexErrorKind::InvalidEscape { .. } | LexErrorKind::InvalidEscapeDigit { .. } => {
                ErrorCode::E0004
            }
            LexErrorKind::UnterminatedBlockComment => ErrorCode::E0005,
            LexErrorKind::EmptyChar | LexErrorKind::MultiCharLiteral => ErrorCode::E0006,
            LexErrorKind::Encoding(_) => ErrorCode::E0007,
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, pos: Position, span: Span) -> Self {
        LexError { kind, pos, span }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code(), self.kind.to_string(), self.pos, self.span)
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        err.to_diagnostic()
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.pos)
    }
}
