use pretty_assertions::assert_eq;
use rain_ir::{KindFlags, SourceId, Span, TokenKind};
use rain_lexer_core::{EncodingIssueKind, SourceBuffer};

use super::Scanner;
use crate::keywords::RESERVED;
use crate::LexErrorKind;

/// Owned summary of one scanned token.
#[derive(Debug, PartialEq, Eq)]
struct Lexed {
    kind: TokenKind,
    text: String,
    errors: Vec<LexErrorKind>,
}

fn scan_bytes(source: &[u8]) -> Vec<Lexed> {
    let buffer = SourceBuffer::new(source);
    let mut scanner = Scanner::new(&buffer, SourceId::ANONYMOUS);
    let mut out = Vec::new();
    loop {
        let scanned = scanner.next_token();
        let done = scanned.token.kind.is_endmark();
        out.push(Lexed {
            kind: scanned.token.kind,
            text: scanned.token.text.to_owned(),
            errors: scanned.errors.iter().map(|e| e.kind).collect(),
        });
        if done {
            return out;
        }
    }
}

fn scan(source: &str) -> Vec<Lexed> {
    scan_bytes(source.as_bytes())
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).into_iter().map(|t| t.kind).collect()
}

/// Kinds without the trailing end marker.
fn body_kinds(source: &str) -> Vec<TokenKind> {
    let mut kinds = kinds(source);
    assert_eq!(kinds.pop(), Some(TokenKind::ENDMARK));
    kinds
}

fn single(source: &str) -> Lexed {
    let mut tokens = scan(source);
    assert_eq!(tokens.len(), 2, "expected one token plus ENDMARK: {tokens:?}");
    tokens.remove(0)
}

// === Operators ===

#[test]
fn shift_assign_is_one_token() {
    let tok = single("<<=");
    assert_eq!(tok.kind, TokenKind::SIGN_LSHIFTAS);
    assert_eq!(tok.kind.base(), TokenKind::SIGN_LT.base());
    assert!(tok.kind.has(KindFlags::REPEAT | KindFlags::VARIANT));
    assert!(tok.errors.is_empty());
}

#[test]
fn separated_less_and_assign_are_two_tokens() {
    assert_eq!(
        body_kinds("< ="),
        vec![TokenKind::SIGN_LT, TokenKind::SIGN_ASSIGN]
    );
}

#[test]
fn operator_families() {
    let cases = [
        ("=", TokenKind::SIGN_ASSIGN),
        ("==", TokenKind::SIGN_EQUAL),
        ("<", TokenKind::SIGN_LT),
        ("<=", TokenKind::SIGN_LTE),
        ("<<", TokenKind::SIGN_LSHIFT),
        (">=", TokenKind::SIGN_GTE),
        (">>", TokenKind::SIGN_RSHIFT),
        (">>=", TokenKind::SIGN_RSHIFTAS),
        ("+", TokenKind::SIGN_ADD),
        ("++", TokenKind::SIGN_INC),
        ("+=", TokenKind::SIGN_ADDAS),
        ("--", TokenKind::SIGN_DEC),
        ("-=", TokenKind::SIGN_SUBAS),
        ("->", TokenKind::SIGN_ARROW),
        ("**", TokenKind::SIGN_POW),
        ("*=", TokenKind::SIGN_MULAS),
        ("/=", TokenKind::SIGN_DIVAS),
        ("%=", TokenKind::SIGN_MODAS),
        ("&&", TokenKind::SIGN_LAND),
        ("&=", TokenKind::SIGN_ANDAS),
        ("||", TokenKind::SIGN_LOR),
        ("|=", TokenKind::SIGN_ORAS),
        ("^=", TokenKind::SIGN_XORAS),
        ("!=", TokenKind::SIGN_NE),
        ("::", TokenKind::SIGN_SCOPE),
        ("~", TokenKind::SIGN_TILDE),
        ("?", TokenKind::SIGN_QUESTION),
        (".", TokenKind::SIGN_DOT),
        (",", TokenKind::SIGN_COMMA),
        (";", TokenKind::SIGN_SEMICOLON),
        ("(", TokenKind::SIGN_LPAREN),
        (")", TokenKind::SIGN_RPAREN),
        ("[", TokenKind::SIGN_LBRACKET),
        ("]", TokenKind::SIGN_RBRACKET),
        ("{", TokenKind::SIGN_LBRACE),
        ("}", TokenKind::SIGN_RBRACE),
    ];
    for (source, kind) in cases {
        let tok = single(source);
        assert_eq!(tok.kind, kind, "{source}");
        assert_eq!(tok.text, source);
    }
}

#[test]
fn doubling_turns_off_assignment_except_shifts() {
    assert_eq!(
        body_kinds("**="),
        vec![TokenKind::SIGN_POW, TokenKind::SIGN_ASSIGN]
    );
    assert_eq!(
        body_kinds("==="),
        vec![TokenKind::SIGN_EQUAL, TokenKind::SIGN_ASSIGN]
    );
    assert_eq!(
        body_kinds("&&="),
        vec![TokenKind::SIGN_LAND, TokenKind::SIGN_ASSIGN]
    );
}

#[test]
fn arrow_checked_before_doubling() {
    assert_eq!(
        body_kinds("-->"),
        vec![TokenKind::SIGN_DEC, TokenKind::SIGN_GT]
    );
    assert_eq!(
        body_kinds("->>"),
        vec![TokenKind::SIGN_ARROW, TokenKind::SIGN_GT]
    );
}

#[test]
fn no_doubling_for_single_only_operators() {
    assert_eq!(
        body_kinds("^^"),
        vec![TokenKind::SIGN_XOR, TokenKind::SIGN_XOR]
    );
    assert_eq!(
        body_kinds("!!"),
        vec![TokenKind::SIGN_NOT, TokenKind::SIGN_NOT]
    );
}

// === Numbers ===

#[test]
fn octal_with_bad_digits_keeps_scanning() {
    let tok = single("089");
    assert_eq!(tok.kind, TokenKind::OCT_INTEGER.with(KindFlags::ERROR));
    assert_eq!(tok.text, "089");
    assert_eq!(
        tok.errors,
        vec![
            LexErrorKind::InvalidOctalDigit { digit: '8' },
            LexErrorKind::InvalidOctalDigit { digit: '9' },
        ]
    );
}

#[test]
fn hex_with_bad_first_digit_stops_after_prefix() {
    let tokens = scan("0xZZ");
    assert_eq!(tokens[0].kind, TokenKind::HEX_INTEGER.with(KindFlags::ERROR));
    assert_eq!(tokens[0].text, "0x");
    assert_eq!(
        tokens[0].errors,
        vec![LexErrorKind::MissingRadixDigit {
            radix: 16,
            found: Some('Z')
        }]
    );
    assert_eq!(tokens[1].kind, TokenKind::IDENTIFIER);
    assert_eq!(tokens[1].text, "ZZ");
}

#[test]
fn hex_prefix_at_end_of_input() {
    let tok = single("0X");
    assert_eq!(
        tok.errors,
        vec![LexErrorKind::MissingRadixDigit {
            radix: 16,
            found: None
        }]
    );
}

#[test]
fn well_formed_numbers() {
    let cases = [
        ("0", TokenKind::DEC_INTEGER),
        ("42", TokenKind::DEC_INTEGER),
        ("0x1F", TokenKind::HEX_INTEGER),
        ("0Xff", TokenKind::HEX_INTEGER),
        ("0b101", TokenKind::BIN_INTEGER),
        ("017", TokenKind::OCT_INTEGER),
        ("3.14", TokenKind::FLOAT),
    ];
    for (source, kind) in cases {
        let tok = single(source);
        assert_eq!((tok.kind, tok.text.as_str()), (kind, source));
        assert!(tok.errors.is_empty(), "{source}");
    }
}

#[test]
fn binary_stops_at_non_binary_digit() {
    let tokens = scan("0b102");
    assert_eq!(tokens[0].text, "0b10");
    assert_eq!(tokens[0].kind, TokenKind::BIN_INTEGER);
    assert_eq!(tokens[1].text, "2");

    let tok = &scan("0b2")[0];
    assert_eq!(tok.text, "0b");
    assert_eq!(tok.errors.len(), 1);
}

#[test]
fn trailing_dot_is_not_float() {
    assert_eq!(
        body_kinds("3."),
        vec![TokenKind::DEC_INTEGER, TokenKind::SIGN_DOT]
    );
    assert_eq!(
        body_kinds("1.2.3"),
        vec![TokenKind::FLOAT, TokenKind::SIGN_DOT, TokenKind::DEC_INTEGER]
    );
}

#[test]
fn leading_zero_never_starts_float() {
    assert_eq!(
        body_kinds("0.5"),
        vec![
            TokenKind::DEC_INTEGER,
            TokenKind::SIGN_DOT,
            TokenKind::DEC_INTEGER
        ]
    );
}

// === Strings and chars ===

#[test]
fn hex_escape_is_clean() {
    let tok = single(r#""\x41""#);
    assert_eq!(tok.kind, TokenKind::LITERAL_STRING);
    assert!(tok.errors.is_empty());
}

#[test]
fn bad_hex_escape_reports_once_and_advances_full_width() {
    let tok = single(r#""\xG1""#);
    assert_eq!(tok.kind, TokenKind::LITERAL_STRING.with(KindFlags::ERROR));
    assert_eq!(tok.text, r#""\xG1""#);
    assert_eq!(
        tok.errors,
        vec![LexErrorKind::InvalidEscapeDigit {
            radix: 16,
            found: Some('G')
        }]
    );
}

#[test]
fn short_hex_escape_swallows_closing_quote() {
    let tok = single(r#""\x4""#);
    assert_eq!(
        tok.errors,
        vec![
            LexErrorKind::InvalidEscapeDigit {
                radix: 16,
                found: Some('"')
            },
            LexErrorKind::UnterminatedString,
        ]
    );
}

#[test]
fn valid_escapes() {
    for source in [
        r#""\a\b\f\n\r\t\v\?\\\'\"""#,
        r#""\u00e9""#,
        r#""\U0001F600""#,
        r#""\0""#,
        r#""\012""#,
        r#""\08""#,
        r#""\777""#,
    ] {
        let tok = single(source);
        assert!(tok.errors.is_empty(), "{source}: {:?}", tok.errors);
    }
}

#[test]
fn unicode_escape_reports_first_bad_digit_only() {
    let tok = single(r#""\u0GZ1""#);
    assert_eq!(
        tok.errors,
        vec![LexErrorKind::InvalidEscapeDigit {
            radix: 16,
            found: Some('G')
        }]
    );
}

#[test]
fn octal_escape_needs_two_more_digits() {
    let tok = single(r#""\18x""#);
    assert_eq!(
        tok.errors,
        vec![LexErrorKind::InvalidEscapeDigit {
            radix: 8,
            found: Some('8')
        }]
    );
}

#[test]
fn unknown_escape() {
    let tok = single(r#""\q""#);
    assert_eq!(tok.errors, vec![LexErrorKind::InvalidEscape { found: 'q' }]);
}

#[test]
fn newline_ends_string_unterminated() {
    let tokens = scan("\"ab\ncd");
    assert_eq!(tokens[0].text, "\"ab");
    assert_eq!(tokens[0].errors, vec![LexErrorKind::UnterminatedString]);
    assert_eq!(tokens[1].kind, TokenKind::IDENTIFIER);
    assert_eq!(tokens[1].text, "cd");
}

#[test]
fn escape_stops_at_newline() {
    let tokens = scan("\"\\x\n1");
    assert_eq!(tokens[0].text, "\"\\x");
    assert_eq!(
        tokens[0].errors,
        vec![
            LexErrorKind::InvalidEscapeDigit {
                radix: 16,
                found: None
            },
            LexErrorKind::UnterminatedString,
        ]
    );
    assert_eq!(tokens[1].text, "1");
}

#[test]
fn end_of_input_ends_string_unterminated() {
    let tok = single("\"abc");
    assert_eq!(tok.errors, vec![LexErrorKind::UnterminatedString]);
}

#[test]
fn char_literals() {
    assert!(single("'a'").errors.is_empty());
    assert!(single(r"'\n'").errors.is_empty());
    assert!(single(r"'\x7f'").errors.is_empty());
    assert!(single("'é'").errors.is_empty());
    assert_eq!(single("''").errors, vec![LexErrorKind::EmptyChar]);
    assert_eq!(single("'ab'").errors, vec![LexErrorKind::MultiCharLiteral]);
    assert_eq!(single("'a").errors, vec![LexErrorKind::UnterminatedChar]);
    assert_eq!(single("'a'").kind, TokenKind::LITERAL_CHAR);
}

// === Identifiers and keywords ===

#[test]
fn every_reserved_word_lexes_as_keyword() {
    for &(spelling, kind) in RESERVED {
        assert_eq!(single(spelling).kind, kind, "{spelling}");
    }
}

#[test]
fn identifier_shaped_non_keywords() {
    for source in ["iffy", "_", "_if", "x1", "Return", "structs", "fn_"] {
        assert_eq!(single(source).kind, TokenKind::IDENTIFIER, "{source}");
    }
}

// === Trivia ===

#[test]
fn comments_are_skipped() {
    assert_eq!(
        body_kinds("// line\n1 /* block\n */ + /**/2"),
        vec![
            TokenKind::DEC_INTEGER,
            TokenKind::SIGN_ADD,
            TokenKind::DEC_INTEGER
        ]
    );
}

#[test]
fn unterminated_block_comment_flags_end_marker() {
    let tokens = scan("x /* never closed");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::ENDMARK.with(KindFlags::ERROR));
    assert_eq!(
        tokens[1].errors,
        vec![LexErrorKind::UnterminatedBlockComment]
    );
}

#[test]
fn lone_slash_is_division() {
    assert_eq!(
        body_kinds("a / b"),
        vec![
            TokenKind::IDENTIFIER,
            TokenKind::SIGN_DIV,
            TokenKind::IDENTIFIER
        ]
    );
}

// === Unrecognized input ===

#[test]
fn unrecognized_character_advances() {
    let tokens = scan("@x");
    assert_eq!(tokens[0].kind, TokenKind::NONE.with(KindFlags::ERROR));
    assert_eq!(tokens[0].text, "@");
    assert_eq!(
        tokens[0].errors,
        vec![LexErrorKind::UnrecognizedChar { found: '@' }]
    );
    assert_eq!(tokens[1].kind, TokenKind::IDENTIFIER);
}

#[test]
fn unrecognized_multibyte_character_consumed_whole() {
    let tokens = scan("€1");
    assert_eq!(tokens[0].text, "€");
    assert_eq!(tokens[1].text, "1");
}

#[test]
fn encoding_issue_stays_with_its_lexeme() {
    let tokens = scan_bytes(b"a\x00");
    assert_eq!(tokens[0].kind, TokenKind::IDENTIFIER);
    assert!(tokens[0].errors.is_empty());
    assert_eq!(tokens[1].kind, TokenKind::NONE.with(KindFlags::ERROR));
    assert_eq!(
        tokens[1].errors,
        vec![
            LexErrorKind::UnrecognizedChar { found: '\0' },
            LexErrorKind::Encoding(EncodingIssueKind::InteriorNull),
        ]
    );
}

#[test]
fn invalid_utf8_in_string_flags_only_the_string() {
    let tokens = scan_bytes(b"1 + \"\xFF\"");
    assert_eq!(tokens[0].kind, TokenKind::DEC_INTEGER);
    assert!(tokens[0].errors.is_empty());
    assert_eq!(tokens[1].kind, TokenKind::SIGN_ADD);
    assert_eq!(
        tokens[2].kind,
        TokenKind::LITERAL_STRING.with(KindFlags::ERROR)
    );
    assert_eq!(
        tokens[2].errors,
        vec![LexErrorKind::Encoding(EncodingIssueKind::InvalidUtf8)]
    );
}

#[test]
fn invalid_utf8_in_comment_is_reported_without_flagging() {
    let tokens = scan_bytes(b"1 /* \xFF */ + 2 // caf\xFF\n");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::DEC_INTEGER,
            TokenKind::SIGN_ADD,
            TokenKind::DEC_INTEGER,
            TokenKind::ENDMARK,
        ]
    );
    let invalid = vec![LexErrorKind::Encoding(EncodingIssueKind::InvalidUtf8)];
    assert_eq!(tokens[1].errors, invalid);
    assert_eq!(tokens[3].errors, invalid);
}

#[test]
fn encoding_issue_position_points_at_the_bytes() {
    let buffer = SourceBuffer::new(b"x\n  // \xFF\ny");
    let mut scanner = Scanner::new(&buffer, SourceId::ANONYMOUS);
    assert!(scanner.next_token().errors.is_empty());
    let scanned = scanner.next_token();
    assert_eq!(scanned.token.text, "y");
    assert_eq!(scanned.errors.len(), 1);
    let pos = scanned.errors[0].pos;
    assert_eq!((pos.line, pos.column), (2, 5));
}

// === Positions and the end marker ===

#[test]
fn positions_track_lines_and_columns() {
    let buffer = SourceBuffer::from_text("a\n  bb /* x\n */ c");
    let mut scanner = Scanner::new(&buffer, SourceId::ANONYMOUS);
    let positions: Vec<(u32, u32)> = (0..3)
        .map(|_| {
            let pos = scanner.next_token().token.pos;
            (pos.line, pos.column)
        })
        .collect();
    assert_eq!(positions, vec![(1, 0), (2, 2), (3, 4)]);
}

#[test]
fn error_positions_point_inside_lexeme() {
    let buffer = SourceBuffer::from_text("\n  0189");
    let mut scanner = Scanner::new(&buffer, SourceId::ANONYMOUS);
    let scanned = scanner.next_token();
    let columns: Vec<u32> = scanned.errors.iter().map(|e| e.pos.column).collect();
    assert_eq!(columns, vec![4, 5]);
    assert!(scanned.errors.iter().all(|e| e.pos.line == 2));
    assert_eq!(scanned.errors[0].span, Span::new(5, 6));
}

#[test]
fn end_marker_repeats() {
    let buffer = SourceBuffer::from_text("  ");
    let mut scanner = Scanner::new(&buffer, SourceId::ANONYMOUS);
    for _ in 0..3 {
        let scanned = scanner.next_token();
        assert_eq!(scanned.token.kind, TokenKind::ENDMARK);
        assert_eq!(scanned.token.text, "");
    }
}

#[test]
fn custom_keyword_table() {
    let buffer = SourceBuffer::from_text("if unless");
    let trie = crate::KeywordTrie::new(&[("unless", TokenKind::KEYWORD_IF)]);
    let mut scanner = Scanner::with_keywords(&buffer, SourceId::ANONYMOUS, trie);
    assert_eq!(scanner.next_token().token.kind, TokenKind::IDENTIFIER);
    assert_eq!(scanner.next_token().token.kind, TokenKind::KEYWORD_IF);
}

// === Properties ===

mod properties {
    use proptest::prelude::*;
    use rain_ir::SourceId;
    use rain_lexer_core::SourceBuffer;

    use crate::Scanner;

    fn check_progress(bytes: &[u8]) -> Result<(), TestCaseError> {
        let buffer = SourceBuffer::new(bytes);
        let mut scanner = Scanner::new(&buffer, SourceId::ANONYMOUS);
        let mut last_end = 0;
        // Every token but the end marker consumes at least one byte.
        for _ in 0..=buffer.len() {
            let before = scanner.offset();
            let scanned = scanner.next_token();
            let span = scanned.token.span;
            prop_assert!(span.start >= last_end);
            prop_assert_eq!(span.len() as usize, scanned.token.text.len());
            if scanned.token.kind.is_endmark() {
                prop_assert_eq!(scanner.offset(), buffer.len());
                return Ok(());
            }
            prop_assert!(scanner.offset() > before);
            prop_assert!(!span.is_empty());
            last_end = span.end;
        }
        Err(TestCaseError::fail("scanner did not reach the end marker"))
    }

    proptest! {
        #[test]
        fn terminates_on_arbitrary_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            check_progress(&bytes)?;
        }

        #[test]
        fn terminates_on_token_soup(
            pieces in proptest::collection::vec(
                prop_oneof![
                    Just("\""), Just("'"), Just("\\"), Just("/*"), Just("*/"), Just("//"),
                    Just("\n"), Just("0x"), Just("0b"), Just("09"), Just("<<="), Just("->"),
                    Just("\\x"), Just("\\u"), Just("if"), Just(" "), Just("."), Just("1"),
                ],
                0..64,
            )
        ) {
            check_progress(pieces.concat().as_bytes())?;
        }
    }
}
