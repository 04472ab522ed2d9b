use std::fmt::Write;

use rain_ir::TokenIdx;
use rain_lexer::TokenStream;
use rain_parse::grammar::{Additive, Multiplicative, Primary, PrimaryRef};
use rain_parse::{ensure_sufficient_stack, Expression};

/// Indented outline of an expression tree, one node per line.
///
/// ```text
/// Additive +
///   Multiplicative
///     Literal DEC_INTEGER "1"
///   Multiplicative *
///     Literal DEC_INTEGER "2"
///     Literal DEC_INTEGER "3"
/// ```
pub fn render_expression(stream: &TokenStream<'_>, expr: &Expression) -> String {
    let mut out = String::new();
    additive(&mut out, stream, expr.additive(), 0);
    out
}

fn text<'s>(stream: &'s TokenStream<'_>, idx: TokenIdx) -> &'s str {
    stream.token(idx).map_or("", |t| t.text)
}

fn operators(stream: &TokenStream<'_>, indices: &[TokenIdx]) -> String {
    indices
        .iter()
        .map(|&idx| text(stream, idx))
        .collect::<Vec<_>>()
        .join(" ")
}

fn header(out: &mut String, depth: usize, name: &str, ops: &str) {
    let indent = "  ".repeat(depth);
    if ops.is_empty() {
        let _ = writeln!(out, "{indent}{name}");
    } else {
        let _ = writeln!(out, "{indent}{name} {ops}");
    }
}

fn additive(out: &mut String, stream: &TokenStream<'_>, node: &Additive, depth: usize) {
    header(out, depth, "Additive", &operators(stream, &node.operators()));
    for term in node.operands() {
        multiplicative(out, stream, term, depth + 1);
    }
}

fn multiplicative(out: &mut String, stream: &TokenStream<'_>, node: &Multiplicative, depth: usize) {
    header(out, depth, "Multiplicative", &operators(stream, &node.operators()));
    for factor in node.operands() {
        primary(out, stream, factor, depth + 1);
    }
}

fn primary(out: &mut String, stream: &TokenStream<'_>, node: &Primary, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.get() {
        PrimaryRef::Literal(literal) => {
            let _ = writeln!(
                out,
                "{indent}Literal {} {:?}",
                literal.kind(),
                text(stream, literal.token())
            );
        }
        PrimaryRef::Identifier(idx) => {
            let _ = writeln!(out, "{indent}Identifier {}", text(stream, idx));
        }
        PrimaryRef::Parenthesized(inner) => {
            let _ = writeln!(out, "{indent}Parenthesized");
            ensure_sufficient_stack(|| additive(out, stream, inner.additive(), depth + 1));
        }
    }
}
