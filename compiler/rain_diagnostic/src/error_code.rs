//! Error codes for all front-end diagnostics.

use std::fmt;

/// Error codes for front-end diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string or char literal
    E0001,
    /// Unrecognized character in source
    E0002,
    /// Invalid digit in a numeric literal
    E0003,
    /// Invalid escape sequence
    E0004,
    /// Unterminated block comment
    E0005,
    /// Malformed char literal (empty or multi-character)
    E0006,
    /// Source encoding problem (BOM, NUL, invalid UTF-8)
    E0007,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Input left over after a complete parse
    E1002,
}

impl ErrorCode {
    /// The code as it appears in rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
