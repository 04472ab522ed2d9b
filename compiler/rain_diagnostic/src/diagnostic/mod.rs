//! Core diagnostic types.

use std::fmt;

use rain_ir::{Position, Span};

use crate::ErrorCode;

/// A single reportable problem. Every diagnostic is an error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Line/column of the offending byte.
    pub pos: Position,
    /// Byte range to underline. May be empty (points at `span.start`).
    pub span: Span,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: ErrorCode, message: impl Into<String>, pos: Position, span: Span) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            pos,
            span,
            notes: Vec::new(),
        }
    }

    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}]: {} at {}",
            self.code, self.message, self.pos
        )
    }
}

#[cfg(test)]
mod tests;
