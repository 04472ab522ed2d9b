use std::io::{self, Write};

use rain_diagnostic::Diagnostic;
use rain_ir::SourceId;
use rain_lexer::TokenStream;
use rain_lexer_core::SourceBuffer;
use rain_parse::parse_expression;

use super::render_expression;

/// Parse one expression and print its tree.
///
/// Lexical diagnostics are reported for every token the parser looked at.
pub fn parse_source<W: Write>(
    buffer: &SourceBuffer,
    source: SourceId,
    out: &mut W,
) -> io::Result<Vec<Diagnostic>> {
    let mut stream = TokenStream::new(buffer, source);
    let result = parse_expression(&mut stream);

    let mut diagnostics: Vec<Diagnostic> = stream
        .take_diagnostics()
        .iter()
        .map(|d| d.error.to_diagnostic())
        .collect();
    match result {
        Ok(expr) => out.write_all(render_expression(&stream, &expr).as_bytes())?,
        Err(error) => diagnostics.push(error.to_diagnostic()),
    }
    Ok(diagnostics)
}
