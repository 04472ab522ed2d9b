use std::io::{self, Write};

use rain_diagnostic::Diagnostic;
use rain_ir::SourceId;
use rain_lexer::lex;
use rain_lexer_core::SourceBuffer;

/// Print one line per token: kind, text, `line:column`.
pub fn lex_source<W: Write>(
    buffer: &SourceBuffer,
    source: SourceId,
    out: &mut W,
) -> io::Result<Vec<Diagnostic>> {
    let output = lex(buffer, source);
    for token in output.tokens.iter() {
        let kind = token.kind.to_string();
        let text = format!("{:?}", token.text);
        writeln!(out, "{kind:<16} {text:<12} {}", token.pos)?;
    }
    Ok(output
        .diagnostics
        .iter()
        .map(|d| d.error.to_diagnostic())
        .collect())
}
