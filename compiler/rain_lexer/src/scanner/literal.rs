//! String and char literals.
//!
//! A literal runs to its closing quote. A raw newline or the end of input
//! first ends it as unterminated, leaving the newline for the trivia
//! scanner. Fixed-width escapes always advance their full width, but never
//! across a newline or the end of input.

use rain_ir::TokenKind;

use super::Scanner;
use crate::LexErrorKind;

impl Scanner<'_> {
    pub(super) fn string(&mut self) -> TokenKind {
        self.quoted(b'"', LexErrorKind::UnterminatedString);
        TokenKind::LITERAL_STRING
    }

    pub(super) fn char_literal(&mut self) -> TokenKind {
        if let Some(units) = self.quoted(b'\'', LexErrorKind::UnterminatedChar) {
            match units {
                0 => self.error_lexeme(LexErrorKind::EmptyChar),
                1 => {}
                _ => self.error_lexeme(LexErrorKind::MultiCharLiteral),
            }
        }
        TokenKind::LITERAL_CHAR
    }

    /// Consume a quoted literal. Returns the number of characters between
    /// the quotes (an escape counts once), or `None` if unterminated.
    fn quoted(&mut self, quote: u8, unterminated: LexErrorKind) -> Option<usize> {
        self.cursor.bump(); // opening quote
        let mut units = 0;
        loop {
            if self.cursor.is_eof() || self.cursor.current() == b'\n' {
                self.error_here(unterminated);
                return None;
            }
            match self.cursor.current() {
                b if b == quote => {
                    self.cursor.bump();
                    return Some(units);
                }
                b'\\' => self.escape(),
                _ => self.cursor.advance_char(),
            }
            units += 1;
        }
    }

    /// Cursor on the backslash.
    fn escape(&mut self) {
        self.cursor.bump();
        if self.cursor.is_eof() || self.cursor.current() == b'\n' {
            // Reported as an unterminated literal by the caller.
            return;
        }
        match self.cursor.current() {
            b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'?' | b'\\' | b'\'' | b'"' => {
                self.cursor.bump();
            }
            b'x' | b'X' => {
                self.cursor.bump();
                self.fixed_digits(2, 16);
            }
            b'u' => {
                self.cursor.bump();
                self.fixed_digits(4, 16);
            }
            b'U' => {
                self.cursor.bump();
                self.fixed_digits(8, 16);
            }
            b'0'..=b'7' => {
                let lone_zero = self.cursor.current() == b'0' && !is_octal(self.cursor.peek(1));
                self.cursor.bump();
                if !lone_zero {
                    self.fixed_digits(2, 8);
                }
            }
            _ => {
                let found = self.current_char().unwrap_or('\u{FFFD}');
                self.error_here(LexErrorKind::InvalidEscape { found });
                self.cursor.advance_char();
            }
        }
    }

    /// Advance `width` characters, reporting the first that is not a digit
    /// of `radix`.
    ///
    /// Stops early only at a newline or end of input. A short escape such
    /// as `"\x4"` therefore consumes the closing quote as its second digit,
    /// and the literal goes on to report itself unterminated.
    fn fixed_digits(&mut self, width: u32, radix: u8) {
        let mut reported = false;
        for _ in 0..width {
            let at_break = self.cursor.is_eof() || self.cursor.current() == b'\n';
            let ok = !at_break && is_digit_of(self.cursor.current(), radix);
            if !ok && !reported {
                let found = if at_break { None } else { self.current_char() };
                self.error_here(LexErrorKind::InvalidEscapeDigit { radix, found });
                reported = true;
            }
            if at_break {
                return;
            }
            self.cursor.advance_char();
        }
    }
}

#[inline]
fn is_octal(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
fn is_digit_of(b: u8, radix: u8) -> bool {
    match radix {
        8 => is_octal(b),
        _ => b.is_ascii_hexdigit(),
    }
}
