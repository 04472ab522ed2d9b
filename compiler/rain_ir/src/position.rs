//! Line/column positions of lexemes.

use std::fmt;

use crate::SourceId;

/// Where a lexeme starts: source, 1-based line, 0-based byte column.
///
/// Immutable once created. One instance per token, owned by that token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub source: SourceId,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Create a position.
    #[inline]
    pub const fn new(source: SourceId, line: u32, column: u32) -> Self {
        debug_assert!(line >= 1, "lines are 1-based");
        Position {
            source,
            line,
            column,
        }
    }

    /// The first position of a source: line 1, column 0.
    #[inline]
    pub const fn start_of(source: SourceId) -> Self {
        Position {
            source,
            line: 1,
            column: 0,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start_of(SourceId::ANONYMOUS)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_line_one_column_zero() {
        let pos = Position::start_of(SourceId::ANONYMOUS);
        assert_eq!((pos.line, pos.column), (1, 0));
    }

    #[test]
    fn display_is_line_colon_column() {
        let pos = Position::new(SourceId::ANONYMOUS, 3, 14);
        assert_eq!(pos.to_string(), "3:14");
    }
}
