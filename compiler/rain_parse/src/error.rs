//! Errors from the top-level parse entry points.
//!
//! Inside the grammar a failed rule is just
//! [`ParseOutcome::EmptyErr`](crate::ParseOutcome::EmptyErr); only
//! [`Parser`](crate::Parser) turns that into a [`ParseError`].

use rain_diagnostic::{Diagnostic, ErrorCode};
use rain_ir::{Position, Span, TokenKind};
use thiserror::Error;

use crate::ExpectedKinds;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// No rule could continue at `found`.
    #[error("expected {expected}, found {found} at {position}")]
    Unexpected {
        expected: ExpectedKinds,
        found: TokenKind,
        position: Position,
        span: Span,
    },
    /// The rule matched but input remains after it.
    #[error("unexpected {found} after end of expression at {position}")]
    TrailingInput {
        found: TokenKind,
        position: Position,
        span: Span,
    },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Unexpected { .. } => ErrorCode::E1001,
            ParseError::TrailingInput { .. } => ErrorCode::E1002,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::Unexpected { position, .. } | ParseError::TrailingInput { position, .. } => {
                *position
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Unexpected {
                expected,
                found,
                position,
                span,
            } => Diagnostic::error(
                self.code(),
                format!("expected {expected}, found {found}"),
                *position,
                *span,
            ),
            ParseError::TrailingInput {
                found,
                position,
                span,
            } => Diagnostic::error(
                self.code(),
                format!("unexpected {found} after end of expression"),
                *position,
                *span,
            )
            .with_note("an expression must be followed by the end of input"),
        }
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        error.to_diagnostic()
    }
}
