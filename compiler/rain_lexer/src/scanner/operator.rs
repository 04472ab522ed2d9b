//! Operator scanning.
//!
//! Each leading byte maps to a base kind plus two switches: whether a
//! doubled byte forms a repeated kind (`<<`, `&&`) and whether a trailing
//! `=` forms the assignment variant (`<=`, `+=`). After `<<` or `>>` the
//! `=` check runs again against the byte past the pair.

use rain_ir::{KindFlags, TokenKind};

use super::Scanner;

#[derive(Copy, Clone)]
struct OperatorEntry {
    base: TokenKind,
    doubles: bool,
    assigns: bool,
}

const fn entry(base: TokenKind, doubles: bool, assigns: bool) -> Option<OperatorEntry> {
    Some(OperatorEntry {
        base,
        doubles,
        assigns,
    })
}

fn lookup(byte: u8) -> Option<OperatorEntry> {
    match byte {
        b'=' => entry(TokenKind::SIGN_ASSIGN, true, false),
        b'<' => entry(TokenKind::SIGN_LT, true, true),
        b'>' => entry(TokenKind::SIGN_GT, true, true),
        b'+' => entry(TokenKind::SIGN_ADD, true, true),
        b'-' => entry(TokenKind::SIGN_SUB, true, true),
        b'*' => entry(TokenKind::SIGN_MUL, true, true),
        b'/' => entry(TokenKind::SIGN_DIV, true, true),
        b'%' => entry(TokenKind::SIGN_MOD, true, true),
        b'&' => entry(TokenKind::SIGN_AND, true, true),
        b'|' => entry(TokenKind::SIGN_OR, true, true),
        b'^' => entry(TokenKind::SIGN_XOR, false, true),
        b'!' => entry(TokenKind::SIGN_NOT, false, true),
        b':' => entry(TokenKind::SIGN_COLON, true, false),
        b'~' => entry(TokenKind::SIGN_TILDE, false, false),
        b'?' => entry(TokenKind::SIGN_QUESTION, false, false),
        b'.' => entry(TokenKind::SIGN_DOT, false, false),
        b',' => entry(TokenKind::SIGN_COMMA, false, false),
        b';' => entry(TokenKind::SIGN_SEMICOLON, false, false),
        b'(' => entry(TokenKind::SIGN_LPAREN, false, false),
        b')' => entry(TokenKind::SIGN_RPAREN, false, false),
        b'[' => entry(TokenKind::SIGN_LBRACKET, false, false),
        b']' => entry(TokenKind::SIGN_RBRACKET, false, false),
        b'{' => entry(TokenKind::SIGN_LBRACE, false, false),
        b'}' => entry(TokenKind::SIGN_RBRACE, false, false),
        _ => None,
    }
}

impl Scanner<'_> {
    /// Scan an operator, or return `None` without moving if the current
    /// byte does not start one.
    pub(super) fn operator(&mut self) -> Option<TokenKind> {
        let first = self.cursor.current();

        // `->` wins over the doubling rule.
        if first == b'-' && self.cursor.peek(1) == b'>' {
            self.cursor.advance(2);
            return Some(TokenKind::SIGN_ARROW);
        }

        let OperatorEntry {
            base,
            doubles,
            mut assigns,
        } = lookup(first)?;

        let mut kind = base;
        let mut len = 1;
        let mut next = self.cursor.peek(1);

        if doubles && next == first {
            kind = kind.with(KindFlags::REPEAT);
            assigns = matches!(first, b'<' | b'>');
            len = 2;
            next = self.cursor.peek(2);
        }

        if assigns && next == b'=' {
            kind = kind.with(KindFlags::VARIANT);
            len += 1;
        }

        self.cursor.advance(len);
        Some(kind)
    }
}
