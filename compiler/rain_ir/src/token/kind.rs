//! Bit-packed token kinds.
//!
//! A [`TokenKind`] is a 16-bit value: a base code in the low 9 bits OR'd with
//! independent [`KindFlags`] in the high bits.
//!
//! ```text
//!  15  14    13      12     11    10      9     8..0
//! [ . |ERR|ENDMARK|REPEAT|SIGN|VARIANT|KEYWORD| base ]
//! ```
//!
//! Compound kinds are always `base | flag...`:
//! `<=` is `SIGN_LT | VARIANT`, `<<=` is `SIGN_LT | REPEAT | VARIANT`.
//! The raw values are stable and may be persisted or compared directly.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Independent attribute bits of a [`TokenKind`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct KindFlags: u16 {
        /// The lexeme carried at least one diagnostic.
        const ERROR = 0x4000;
        /// End of input marker.
        const ENDMARK = 0x2000;
        /// Doubled operator (`==`, `<<`, `&&`, `++`).
        const REPEAT = 0x1000;
        /// Operator/punctuation category marker.
        const SIGN = 0x0800;
        /// Assignment variant (`<=`, `+=`, `!=`).
        const VARIANT = 0x0400;
        /// Reserved word.
        const KEYWORD = 0x0200;
    }
}

/// Bit-packed token kind. See the module docs for the layout.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TokenKind(u16);

const SIGN: u16 = KindFlags::SIGN.bits();
const REPEAT: u16 = KindFlags::REPEAT.bits();
const VARIANT: u16 = KindFlags::VARIANT.bits();
const KEYWORD: u16 = KindFlags::KEYWORD.bits();

impl TokenKind {
    /// Low bits holding the base code.
    pub const BASE_MASK: u16 = 0x01FF;

    pub const NONE: TokenKind = TokenKind(0x0000);
    pub const ENDMARK: TokenKind = TokenKind(KindFlags::ENDMARK.bits());

    // === Identifiers & Literals ===
    pub const IDENTIFIER: TokenKind = TokenKind(0x0001);
    pub const DEC_INTEGER: TokenKind = TokenKind(0x0002);
    pub const BIN_INTEGER: TokenKind = TokenKind(0x0003);
    pub const HEX_INTEGER: TokenKind = TokenKind(0x0004);
    pub const OCT_INTEGER: TokenKind = TokenKind(0x0005);
    pub const FLOAT: TokenKind = TokenKind(0x0006);
    pub const LITERAL_STRING: TokenKind = TokenKind(0x0007);
    pub const LITERAL_CHAR: TokenKind = TokenKind(0x0008);

    // === Operators ===
    pub const SIGN_ASSIGN: TokenKind = TokenKind(SIGN | 0x0001);
    pub const SIGN_EQUAL: TokenKind = TokenKind(REPEAT | SIGN | 0x0001);
    pub const SIGN_LT: TokenKind = TokenKind(SIGN | 0x0002);
    pub const SIGN_LTE: TokenKind = TokenKind(VARIANT | SIGN | 0x0002);
    pub const SIGN_LSHIFT: TokenKind = TokenKind(REPEAT | SIGN | 0x0002);
    pub const SIGN_LSHIFTAS: TokenKind = TokenKind(VARIANT | REPEAT | SIGN | 0x0002);
    pub const SIGN_GT: TokenKind = TokenKind(SIGN | 0x0003);
    pub const SIGN_GTE: TokenKind = TokenKind(VARIANT | SIGN | 0x0003);
    pub const SIGN_RSHIFT: TokenKind = TokenKind(REPEAT | SIGN | 0x0003);
    pub const SIGN_RSHIFTAS: TokenKind = TokenKind(VARIANT | REPEAT | SIGN | 0x0003);
    pub const SIGN_ADD: TokenKind = TokenKind(SIGN | 0x0004);
    pub const SIGN_INC: TokenKind = TokenKind(REPEAT | SIGN | 0x0004);
    pub const SIGN_ADDAS: TokenKind = TokenKind(VARIANT | SIGN | 0x0004);
    pub const SIGN_SUB: TokenKind = TokenKind(SIGN | 0x0006);
    pub const SIGN_DEC: TokenKind = TokenKind(REPEAT | SIGN | 0x0006);
    pub const SIGN_SUBAS: TokenKind = TokenKind(VARIANT | SIGN | 0x0006);
    pub const SIGN_MUL: TokenKind = TokenKind(SIGN | 0x0007);
    pub const SIGN_POW: TokenKind = TokenKind(REPEAT | SIGN | 0x0007);
    pub const SIGN_MULAS: TokenKind = TokenKind(VARIANT | SIGN | 0x0007);
    pub const SIGN_DIV: TokenKind = TokenKind(SIGN | 0x0008);
    pub const SIGN_DIVAS: TokenKind = TokenKind(VARIANT | SIGN | 0x0008);
    pub const SIGN_MOD: TokenKind = TokenKind(SIGN | 0x0009);
    pub const SIGN_MODAS: TokenKind = TokenKind(VARIANT | SIGN | 0x0009);
    pub const SIGN_AND: TokenKind = TokenKind(SIGN | 0x000A);
    pub const SIGN_LAND: TokenKind = TokenKind(REPEAT | SIGN | 0x000A);
    pub const SIGN_ANDAS: TokenKind = TokenKind(VARIANT | SIGN | 0x000A);
    pub const SIGN_OR: TokenKind = TokenKind(SIGN | 0x000B);
    pub const SIGN_LOR: TokenKind = TokenKind(REPEAT | SIGN | 0x000B);
    pub const SIGN_ORAS: TokenKind = TokenKind(VARIANT | SIGN | 0x000B);
    pub const SIGN_XOR: TokenKind = TokenKind(SIGN | 0x000C);
    pub const SIGN_XORAS: TokenKind = TokenKind(VARIANT | SIGN | 0x000C);
    pub const SIGN_NOT: TokenKind = TokenKind(SIGN | 0x000D);
    pub const SIGN_NE: TokenKind = TokenKind(VARIANT | SIGN | 0x000D);
    pub const SIGN_TILDE: TokenKind = TokenKind(SIGN | 0x000E);
    pub const SIGN_QUESTION: TokenKind = TokenKind(SIGN | 0x000F);
    pub const SIGN_DOT: TokenKind = TokenKind(SIGN | 0x0010);
    pub const SIGN_COMMA: TokenKind = TokenKind(SIGN | 0x0011);
    pub const SIGN_SEMICOLON: TokenKind = TokenKind(SIGN | 0x0012);
    pub const SIGN_COLON: TokenKind = TokenKind(SIGN | 0x0013);
    pub const SIGN_SCOPE: TokenKind = TokenKind(REPEAT | SIGN | 0x0013);
    pub const SIGN_ARROW: TokenKind = TokenKind(SIGN | 0x0014);

    // === Delimiters ===
    pub const SIGN_LPAREN: TokenKind = TokenKind(SIGN | 0x0015);
    pub const SIGN_RPAREN: TokenKind = TokenKind(SIGN | 0x0016);
    pub const SIGN_LBRACKET: TokenKind = TokenKind(SIGN | 0x0017);
    pub const SIGN_RBRACKET: TokenKind = TokenKind(SIGN | 0x0018);
    pub const SIGN_LBRACE: TokenKind = TokenKind(SIGN | 0x0019);
    pub const SIGN_RBRACE: TokenKind = TokenKind(SIGN | 0x001A);

    // === Keywords ===
    pub const KEYWORD_IF: TokenKind = TokenKind(KEYWORD | 0x0001);
    pub const KEYWORD_ELSE: TokenKind = TokenKind(KEYWORD | 0x0002);
    pub const KEYWORD_WHILE: TokenKind = TokenKind(KEYWORD | 0x0003);
    pub const KEYWORD_FOR: TokenKind = TokenKind(KEYWORD | 0x0004);
    pub const KEYWORD_DO: TokenKind = TokenKind(KEYWORD | 0x0005);
    pub const KEYWORD_BREAK: TokenKind = TokenKind(KEYWORD | 0x0006);
    pub const KEYWORD_CONTINUE: TokenKind = TokenKind(KEYWORD | 0x0007);
    pub const KEYWORD_RETURN: TokenKind = TokenKind(KEYWORD | 0x0008);
    pub const KEYWORD_LET: TokenKind = TokenKind(KEYWORD | 0x0009);
    pub const KEYWORD_CONST: TokenKind = TokenKind(KEYWORD | 0x000A);
    pub const KEYWORD_FN: TokenKind = TokenKind(KEYWORD | 0x000B);
    pub const KEYWORD_STRUCT: TokenKind = TokenKind(KEYWORD | 0x000C);
    pub const KEYWORD_TRUE: TokenKind = TokenKind(KEYWORD | 0x000D);
    pub const KEYWORD_FALSE: TokenKind = TokenKind(KEYWORD | 0x000E);

    /// Reinterpret a raw 16-bit value.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        TokenKind(bits)
    }

    /// The raw 16-bit encoding.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Base code without any flag bits.
    #[inline]
    pub const fn base(self) -> u16 {
        self.0 & Self::BASE_MASK
    }

    /// Flag bits of this kind.
    #[inline]
    pub const fn flags(self) -> KindFlags {
        KindFlags::from_bits_truncate(self.0)
    }

    /// `self` with `flags` OR'd in.
    #[inline]
    #[must_use]
    pub const fn with(self, flags: KindFlags) -> Self {
        TokenKind(self.0 | flags.bits())
    }

    /// `self` with `flags` cleared.
    #[inline]
    #[must_use]
    pub const fn without(self, flags: KindFlags) -> Self {
        TokenKind(self.0 & !flags.bits())
    }

    /// Check whether every bit of `flags` is set.
    #[inline]
    pub const fn has(self, flags: KindFlags) -> bool {
        self.0 & flags.bits() == flags.bits()
    }

    /// The operator family a compound kind derives from: `<<=` -> `<`.
    ///
    /// Drops `REPEAT`, `VARIANT`, and `ERROR`; keeps the category markers.
    #[inline]
    #[must_use]
    pub const fn family(self) -> Self {
        self.without(
            KindFlags::REPEAT
                .union(KindFlags::VARIANT)
                .union(KindFlags::ERROR),
        )
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        self.has(KindFlags::ERROR)
    }

    #[inline]
    pub const fn is_sign(self) -> bool {
        self.has(KindFlags::SIGN)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.has(KindFlags::KEYWORD)
    }

    #[inline]
    pub const fn is_endmark(self) -> bool {
        self.family().0 == Self::ENDMARK.0
    }

    /// Check if this is one of the literal kinds (numbers, strings, chars).
    #[inline]
    pub const fn is_literal(self) -> bool {
        let family = self.family().0;
        family >= Self::DEC_INTEGER.0 && family <= Self::LITERAL_CHAR.0
    }

    /// Canonical name of this exact kind, if it has one.
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|&(_, name)| name)
    }
}

/// Canonical names, one per named kind.
const NAMES: &[(TokenKind, &str)] = &[
    (TokenKind::NONE, "NONE"),
    (TokenKind::ENDMARK, "ENDMARK"),
    (TokenKind::IDENTIFIER, "IDENTIFIER"),
    (TokenKind::DEC_INTEGER, "DEC_INTEGER"),
    (TokenKind::BIN_INTEGER, "BIN_INTEGER"),
    (TokenKind::HEX_INTEGER, "HEX_INTEGER"),
    (TokenKind::OCT_INTEGER, "OCT_INTEGER"),
    (TokenKind::FLOAT, "FLOAT"),
    (TokenKind::LITERAL_STRING, "LITERAL_STRING"),
    (TokenKind::LITERAL_CHAR, "LITERAL_CHAR"),
    (TokenKind::SIGN_ASSIGN, "SIGN_ASSIGN"),
    (TokenKind::SIGN_EQUAL, "SIGN_EQUAL"),
    (TokenKind::SIGN_LT, "SIGN_LT"),
    (TokenKind::SIGN_LTE, "SIGN_LTE"),
    (TokenKind::SIGN_LSHIFT, "SIGN_LSHIFT"),
    (TokenKind::SIGN_LSHIFTAS, "SIGN_LSHIFTAS"),
    (TokenKind::SIGN_GT, "SIGN_GT"),
    (TokenKind::SIGN_GTE, "SIGN_GTE"),
    (TokenKind::SIGN_RSHIFT, "SIGN_RSHIFT"),
    (TokenKind::SIGN_RSHIFTAS, "SIGN_RSHIFTAS"),
    (TokenKind::SIGN_ADD, "SIGN_ADD"),
    (TokenKind::SIGN_INC, "SIGN_INC"),
    (TokenKind::SIGN_ADDAS, "SIGN_ADDAS"),
    (TokenKind::SIGN_SUB, "SIGN_SUB"),
    (TokenKind::SIGN_DEC, "SIGN_DEC"),
    (TokenKind::SIGN_SUBAS, "SIGN_SUBAS"),
    (TokenKind::SIGN_MUL, "SIGN_MUL"),
    (TokenKind::SIGN_POW, "SIGN_POW"),
    (TokenKind::SIGN_MULAS, "SIGN_MULAS"),
    (TokenKind::SIGN_DIV, "SIGN_DIV"),
    (TokenKind::SIGN_DIVAS, "SIGN_DIVAS"),
    (TokenKind::SIGN_MOD, "SIGN_MOD"),
    (TokenKind::SIGN_MODAS, "SIGN_MODAS"),
    (TokenKind::SIGN_AND, "SIGN_AND"),
    (TokenKind::SIGN_LAND, "SIGN_LAND"),
    (TokenKind::SIGN_ANDAS, "SIGN_ANDAS"),
    (TokenKind::SIGN_OR, "SIGN_OR"),
    (TokenKind::SIGN_LOR, "SIGN_LOR"),
    (TokenKind::SIGN_ORAS, "SIGN_ORAS"),
    (TokenKind::SIGN_XOR, "SIGN_XOR"),
    (TokenKind::SIGN_XORAS, "SIGN_XORAS"),
    (TokenKind::SIGN_NOT, "SIGN_NOT"),
    (TokenKind::SIGN_NE, "SIGN_NE"),
    (TokenKind::SIGN_TILDE, "SIGN_TILDE"),
    (TokenKind::SIGN_QUESTION, "SIGN_QUESTION"),
    (TokenKind::SIGN_DOT, "SIGN_DOT"),
    (TokenKind::SIGN_COMMA, "SIGN_COMMA"),
    (TokenKind::SIGN_SEMICOLON, "SIGN_SEMICOLON"),
    (TokenKind::SIGN_COLON, "SIGN_COLON"),
    (TokenKind::SIGN_SCOPE, "SIGN_SCOPE"),
    (TokenKind::SIGN_ARROW, "SIGN_ARROW"),
    (TokenKind::SIGN_LPAREN, "SIGN_LPAREN"),
    (TokenKind::SIGN_RPAREN, "SIGN_RPAREN"),
    (TokenKind::SIGN_LBRACKET, "SIGN_LBRACKET"),
    (TokenKind::SIGN_RBRACKET, "SIGN_RBRACKET"),
    (TokenKind::SIGN_LBRACE, "SIGN_LBRACE"),
    (TokenKind::SIGN_RBRACE, "SIGN_RBRACE"),
    (TokenKind::KEYWORD_IF, "KEYWORD_IF"),
    (TokenKind::KEYWORD_ELSE, "KEYWORD_ELSE"),
    (TokenKind::KEYWORD_WHILE, "KEYWORD_WHILE"),
    (TokenKind::KEYWORD_FOR, "KEYWORD_FOR"),
    (TokenKind::KEYWORD_DO, "KEYWORD_DO"),
    (TokenKind::KEYWORD_BREAK, "KEYWORD_BREAK"),
    (TokenKind::KEYWORD_CONTINUE, "KEYWORD_CONTINUE"),
    (TokenKind::KEYWORD_RETURN, "KEYWORD_RETURN"),
    (TokenKind::KEYWORD_LET, "KEYWORD_LET"),
    (TokenKind::KEYWORD_CONST, "KEYWORD_CONST"),
    (TokenKind::KEYWORD_FN, "KEYWORD_FN"),
    (TokenKind::KEYWORD_STRUCT, "KEYWORD_STRUCT"),
    (TokenKind::KEYWORD_TRUE, "KEYWORD_TRUE"),
    (TokenKind::KEYWORD_FALSE, "KEYWORD_FALSE"),
];

impl fmt::Display for TokenKind {
    /// Canonical name when one exists, otherwise `NAME|FLAG|...` built from
    /// the nearest named kind (e.g. `DEC_INTEGER|ERROR`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }

        let error = KindFlags::ERROR;
        let clean = self.without(error);
        let (head, rest) = if let Some(name) = clean.name() {
            (name, self.flags() & error)
        } else if let Some(name) = clean.family().name() {
            (name, self.flags() & (KindFlags::REPEAT | KindFlags::VARIANT | error))
        } else {
            return write!(f, "UNKNOWN(0x{:04X})", self.0);
        };

        f.write_str(head)?;
        for (flag_name, _) in rest.iter_names() {
            write!(f, "|{flag_name}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
