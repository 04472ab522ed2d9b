use pretty_assertions::assert_eq;
use rain_ir::SourceId;

use super::*;

fn pos(line: u32, column: u32) -> Position {
    Position::new(SourceId::ANONYMOUS, line, column)
}

#[test]
fn error_keeps_fields() {
    let diag = Diagnostic::error(ErrorCode::E0002, "unrecognized character", pos(1, 0), Span::new(0, 1));
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.span, Span::new(0, 1));
    assert!(diag.notes.is_empty());
}

#[test]
fn notes_accumulate_in_order() {
    let diag = Diagnostic::error(ErrorCode::E1001, "unexpected token", pos(2, 4), Span::new(9, 10))
        .with_note("expected `)`")
        .with_note("while parsing a parenthesized expression");
    assert_eq!(
        diag.notes,
        vec![
            "expected `)`".to_owned(),
            "while parsing a parenthesized expression".to_owned()
        ]
    );
}

#[test]
fn display_is_single_line() {
    let diag = Diagnostic::error(ErrorCode::E0003, "invalid digit '9'", pos(3, 7), Span::new(20, 21));
    assert_eq!(diag.to_string(), "error[E0003]: invalid digit '9' at 3:7");
}
