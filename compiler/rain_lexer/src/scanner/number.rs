//! Numeric literals.
//!
//! - `0x`/`0X` and `0b`/`0B` need at least one digit of their base; a bad
//!   first digit ends the literal right after the prefix.
//! - `0` followed by digits is octal. An `8` or `9` is reported but the
//!   literal still covers the whole digit run.
//! - Anything else is decimal, becoming a float only when a `.` is followed
//!   by a digit. A lone `0` never starts a float.

use rain_ir::TokenKind;

use super::Scanner;
use crate::LexErrorKind;

impl Scanner<'_> {
    pub(super) fn number(&mut self) -> TokenKind {
        if self.cursor.current() == b'0' {
            match self.cursor.peek(1) {
                b'0'..=b'9' => return self.octal(),
                b'x' | b'X' => {
                    return self.radix_prefixed(TokenKind::HEX_INTEGER, 16, |b| {
                        b.is_ascii_hexdigit()
                    });
                }
                b'b' | b'B' => {
                    return self.radix_prefixed(TokenKind::BIN_INTEGER, 2, |b| {
                        matches!(b, b'0' | b'1')
                    });
                }
                _ => {
                    self.cursor.bump();
                    return TokenKind::DEC_INTEGER;
                }
            }
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek(1).is_ascii_digit() {
            self.cursor.bump();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            return TokenKind::FLOAT;
        }
        TokenKind::DEC_INTEGER
    }

    fn octal(&mut self) -> TokenKind {
        self.cursor.bump(); // '0'
        while self.cursor.current().is_ascii_digit() {
            let digit = self.cursor.current();
            if digit >= b'8' {
                self.error_here(LexErrorKind::InvalidOctalDigit {
                    digit: char::from(digit),
                });
            }
            self.cursor.bump();
        }
        TokenKind::OCT_INTEGER
    }

    fn radix_prefixed(
        &mut self,
        kind: TokenKind,
        radix: u8,
        is_digit: impl Fn(u8) -> bool + Copy,
    ) -> TokenKind {
        self.cursor.advance(2); // '0x' / '0b'
        if self.cursor.is_eof() || !is_digit(self.cursor.current()) {
            let found = self.current_char();
            self.error_here(LexErrorKind::MissingRadixDigit { radix, found });
            return kind;
        }
        self.cursor.eat_while(is_digit);
        kind
    }
}
