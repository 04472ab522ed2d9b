//! Hand-written scanner producing one token per call.
//!
//! [`Scanner::next_token`] skips trivia, records where the lexeme starts,
//! then tries the operator table before falling back to literals and
//! identifiers. Every non-trivia byte ends up inside some token, so each
//! call before end of input moves the cursor forward by at least one byte.
//! At end of input the scanner keeps returning `ENDMARK` tokens.

mod literal;
mod number;
mod operator;

use rain_ir::{KindFlags, Position, SourceId, Span, Token, TokenKind};
use rain_lexer_core::{Cursor, EncodingIssue, LineTracker, SourceBuffer};
use tracing::{debug, trace};

use crate::{KeywordTrie, LexError, LexErrorKind};

/// A token together with the problems found while scanning it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scanned<'src> {
    pub token: Token<'src>,
    pub errors: Vec<LexError>,
}

/// Trivia state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Trivia {
    Plain,
    LineComment,
    /// Where the comment opened, for the unterminated report.
    BlockComment { offset: u32, tracker: LineTracker },
    Done,
}

pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    tracker: LineTracker,
    source: SourceId,
    keywords: KeywordTrie,
    /// Start offset and line state of the lexeme being scanned.
    lexeme_start: u32,
    lexeme_tracker: LineTracker,
    /// Problems for the lexeme being scanned, including those found in the
    /// trivia before it.
    errors: Vec<LexError>,
    /// Encoding issues not yet reported, sorted by offset.
    issues: &'src [EncodingIssue],
}

impl<'src> Scanner<'src> {
    /// Scanner over `buffer` using the reserved-word table.
    pub fn new(buffer: &'src SourceBuffer, source: SourceId) -> Self {
        Self::with_keywords(buffer, source, KeywordTrie::reserved())
    }

    pub fn with_keywords(buffer: &'src SourceBuffer, source: SourceId, keywords: KeywordTrie) -> Self {
        Scanner {
            cursor: buffer.cursor(),
            tracker: LineTracker::new(),
            source,
            keywords,
            lexeme_start: 0,
            lexeme_tracker: LineTracker::new(),
            errors: Vec::new(),
            issues: buffer.encoding_issues(),
        }
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    /// Byte offset of the next unscanned byte.
    pub fn offset(&self) -> u32 {
        self.cursor.pos()
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Scan one lexeme.
    ///
    /// Encoding issues travel with the token whose trivia or text contains
    /// them. Only those inside the token's own text flag it as an error.
    pub fn next_token(&mut self) -> Scanned<'src> {
        let trivia_start = self.cursor.pos();
        let trivia_tracker = self.tracker;
        self.skip_trivia();

        let start = self.cursor.pos();
        self.lexeme_start = start;
        self.lexeme_tracker = self.tracker;
        let pos = self.position_of(self.tracker);

        let kind = if self.cursor.is_eof() {
            TokenKind::ENDMARK
        } else if let Some(kind) = self.operator() {
            kind
        } else {
            self.literal_or_identifier()
        };

        let end = self.cursor.pos();
        debug_assert!(end > start || kind.is_endmark(), "scanner made no progress");
        let text = self.cursor.slice_from(start).unwrap_or_default();
        self.tracker.advance_over(self.cursor.bytes_from(start));

        let mut errors = std::mem::take(&mut self.errors);
        let mut malformed = !errors.is_empty();
        malformed |= self.report_encoding(trivia_start, trivia_tracker, start, &mut errors);
        errors.sort_by_key(|e| e.span.start);

        let kind = if malformed {
            kind.with(KindFlags::ERROR)
        } else {
            kind
        };
        trace!(%kind, line = pos.line, column = pos.column, "token");

        Scanned {
            token: Token::new(kind, text, Span::new(start, end), pos),
            errors,
        }
    }

    /// Move encoding issues between `from` and the cursor into `errors`.
    /// Returns whether any lies at or after `lexeme_start`.
    fn report_encoding(
        &mut self,
        from: u32,
        tracker: LineTracker,
        lexeme_start: u32,
        errors: &mut Vec<LexError>,
    ) -> bool {
        let end = self.cursor.pos();
        let scanned = self.cursor.bytes_from(from);
        let mut inside = false;
        let mut pending = self.issues;
        while let Some((issue, rest)) = pending.split_first() {
            if issue.pos >= end {
                break;
            }
            let mut at = tracker;
            let before = issue.pos.saturating_sub(from) as usize;
            at.advance_over(scanned.get(..before).unwrap_or_default());
            errors.push(LexError::new(
                LexErrorKind::Encoding(issue.kind),
                self.position_of(at),
                Span::new(issue.pos, issue.pos + issue.len),
            ));
            inside |= issue.pos >= lexeme_start;
            pending = rest;
        }
        self.issues = pending;
        inside
    }

    fn position_of(&self, tracker: LineTracker) -> Position {
        Position::new(self.source, tracker.line(), tracker.column())
    }

    /// Position of the byte under the cursor, inside the current lexeme.
    fn here(&self) -> Position {
        let mut tracker = self.lexeme_tracker;
        tracker.advance_over(self.cursor.bytes_from(self.lexeme_start));
        self.position_of(tracker)
    }

    /// The character under the cursor, or `None` at end of input.
    fn current_char(&self) -> Option<char> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let width = Cursor::utf8_char_width(self.cursor.current());
        let end = start.saturating_add(width).min(self.cursor.source_len());
        self.cursor
            .slice(start, end)
            .ok()
            .and_then(|s| s.chars().next())
    }

    /// Record a problem with the character under the cursor.
    fn error_here(&mut self, kind: LexErrorKind) {
        let start = self.cursor.pos();
        let width = self.current_char().map_or(0, |c| c.len_utf8() as u32);
        let err = LexError::new(kind, self.here(), Span::new(start, start + width));
        self.errors.push(err);
    }

    /// Record a problem covering the lexeme so far.
    fn error_lexeme(&mut self, kind: LexErrorKind) {
        let pos = self.position_of(self.lexeme_tracker);
        let span = Span::new(self.lexeme_start, self.cursor.pos());
        self.errors.push(LexError::new(kind, pos, span));
    }

    fn skip_trivia(&mut self) {
        let start = self.cursor.pos();
        let mut state = Trivia::Plain;

        while state != Trivia::Done {
            state = match state {
                Trivia::Plain => match (self.cursor.current(), self.cursor.peek(1)) {
                    (b, _) if is_whitespace(b) => {
                        self.cursor.bump();
                        Trivia::Plain
                    }
                    (b'/', b'/') => {
                        self.cursor.advance(2);
                        Trivia::LineComment
                    }
                    (b'/', b'*') => {
                        let mut tracker = self.tracker;
                        tracker.advance_over(self.cursor.bytes_from(start));
                        let offset = self.cursor.pos();
                        self.cursor.advance(2);
                        Trivia::BlockComment { offset, tracker }
                    }
                    _ => Trivia::Done,
                },
                Trivia::LineComment => {
                    self.cursor.eat_until_newline_or_eof();
                    Trivia::Plain
                }
                Trivia::BlockComment { offset, tracker } => {
                    if !self.cursor.eat_past_block_comment_end() {
                        self.errors.push(LexError::new(
                            LexErrorKind::UnterminatedBlockComment,
                            self.position_of(tracker),
                            Span::new(offset, self.cursor.pos()),
                        ));
                    }
                    Trivia::Plain
                }
                Trivia::Done => Trivia::Done,
            };
        }

        if self.cursor.pos() > start {
            let from = self.tracker;
            self.tracker.advance_over(self.cursor.bytes_from(start));
            debug!(
                from_line = from.line(),
                from_column = from.column(),
                to_line = self.tracker.line(),
                to_column = self.tracker.column(),
                "skipped trivia"
            );
        }
    }

    fn literal_or_identifier(&mut self) -> TokenKind {
        match self.cursor.current() {
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'"' => self.string(),
            b'\'' => self.char_literal(),
            _ => self.unrecognized(),
        }
    }

    fn identifier(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start).unwrap_or_default();
        self.keywords
            .lookup(text)
            .unwrap_or(TokenKind::IDENTIFIER)
    }

    /// Consume at least one whole character and flag it.
    fn unrecognized(&mut self) -> TokenKind {
        let found = self.current_char().unwrap_or('\u{FFFD}');
        self.error_here(LexErrorKind::UnrecognizedChar { found });
        self.cursor.advance_char();
        TokenKind::NONE
    }
}

/// ASCII whitespace, vertical tab and form feed included.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests;
