use pretty_assertions::assert_eq;
use rain_diagnostic::ErrorCode;
use rain_ir::{SourceId, TokenKind};
use rain_lexer::TokenStream;
use rain_lexer_core::SourceBuffer;

use super::{parse_expression, Parser};
use crate::grammar::{Expression, Literal};
use crate::{ExpectedKinds, ParseError};

#[test]
fn parse_expression_requires_end_of_input() {
    let buffer = SourceBuffer::from_text("1 + 2 * 3");
    let mut stream = TokenStream::new(&buffer, SourceId::ANONYMOUS);
    let expr = parse_expression(&mut stream);
    assert!(expr.is_ok());
    assert_eq!(stream.peek_kind(), TokenKind::ENDMARK);
    assert_eq!(stream.tokens().len(), 6);
}

#[test]
fn unexpected_token_names_expected_kinds() {
    let buffer = SourceBuffer::from_text("(1 + 2");
    let mut stream = TokenStream::new(&buffer, SourceId::ANONYMOUS);
    let Err(error) = parse_expression(&mut stream) else {
        panic!("missing paren accepted");
    };
    assert_eq!(
        error,
        ParseError::Unexpected {
            expected: ExpectedKinds::single(TokenKind::SIGN_RPAREN),
            found: TokenKind::ENDMARK,
            position: stream.tokens()[4].pos,
            span: stream.tokens()[4].span,
        }
    );
    assert_eq!(error.code(), ErrorCode::E1001);
    assert_eq!(error.position().column, 6);
    assert_eq!(stream.position(), 0);
}

#[test]
fn trailing_input_restores_cursor() {
    let buffer = SourceBuffer::from_text("1 2");
    let mut stream = TokenStream::new(&buffer, SourceId::ANONYMOUS);
    let Err(error) = parse_expression(&mut stream) else {
        panic!("trailing input accepted");
    };
    assert!(matches!(
        error,
        ParseError::TrailingInput {
            found: TokenKind::DEC_INTEGER,
            ..
        }
    ));
    assert_eq!(error.code(), ErrorCode::E1002);
    assert_eq!(stream.position(), 0);
}

#[test]
fn parse_leaves_cursor_after_match() {
    let buffer = SourceBuffer::from_text("7 rest");
    let mut stream = TokenStream::new(&buffer, SourceId::ANONYMOUS);
    let mut parser = Parser::new(&mut stream);
    let literal = parser.parse::<Literal>();
    assert_eq!(literal.map(|l| l.kind()), Ok(TokenKind::DEC_INTEGER));
    assert_eq!(parser.stream().position(), 1);
    assert!(parser.parse::<Literal>().is_err());
    assert_eq!(parser.stream().position(), 1);
}

#[test]
fn empty_input_expects_an_operand() {
    let buffer = SourceBuffer::from_text("");
    let mut stream = TokenStream::new(&buffer, SourceId::ANONYMOUS);
    let Err(ParseError::Unexpected {
        expected, found, ..
    }) = Parser::new(&mut stream).parse::<Expression>()
    else {
        panic!("empty input accepted");
    };
    assert_eq!(found, TokenKind::ENDMARK);
    assert!(expected.contains(TokenKind::IDENTIFIER));
    assert!(expected.contains(TokenKind::SIGN_LPAREN));
}

#[test]
fn errors_render_as_diagnostics() {
    let buffer = SourceBuffer::from_text("1 +\n* 2");
    let mut stream = TokenStream::new(&buffer, SourceId::ANONYMOUS);
    let Err(error) = parse_expression(&mut stream) else {
        panic!("dangling operator accepted");
    };
    let diagnostic = error.to_diagnostic();
    assert_eq!(diagnostic.code, ErrorCode::E1002);
    assert_eq!(diagnostic.message, "unexpected SIGN_ADD after end of expression");
    assert_eq!((diagnostic.pos.line, diagnostic.pos.column), (1, 2));
}
