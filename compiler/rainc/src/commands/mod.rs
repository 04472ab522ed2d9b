//! Driver commands: `lex` and `parse`.

mod lex;
mod parse;
mod tree;

pub use lex::lex_source;
pub use parse::parse_source;
pub use tree::render_expression;

use std::io::{self, Write};

use rain_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use rain_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use rain_ir::SourceMap;
use rain_lexer_core::SourceBuffer;
use tracing::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Lex,
    Parse,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lex" => Some(Command::Lex),
            "parse" => Some(Command::Parse),
            _ => None,
        }
    }
}

/// Driver settings from the command line.
#[derive(Clone, Debug)]
pub struct Options {
    pub diagnostics: DiagnosticConfig,
    pub color: ColorMode,
    /// Whether stderr is a terminal, for [`ColorMode::Auto`].
    pub is_tty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            diagnostics: DiagnosticConfig::default(),
            color: ColorMode::Auto,
            is_tty: false,
        }
    }
}

/// Read a whole file as bytes.
///
/// Invalid UTF-8 is not an error here; the source buffer repairs it and
/// reports where.
pub fn read_file(path: &str) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Run `command` over `bytes`, writing results to `out` and diagnostics
/// to `err`. Returns whether any error was reported.
pub fn run<O: Write, E: Write>(
    command: Command,
    name: &str,
    bytes: &[u8],
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let mut sources = SourceMap::new();
    let source = sources.add(name);
    let buffer = SourceBuffer::new(bytes);
    debug!(?command, name, len = buffer.len(), "running");

    let diagnostics = match command {
        Command::Lex => lex_source(&buffer, source, out)?,
        Command::Parse => parse_source(&buffer, source, out)?,
    };
    let errors = report(diagnostics, options, name, buffer.as_str(), err)?;
    Ok(errors > 0)
}

/// Queue, sort and print diagnostics. Returns the number of errors.
fn report<E: Write>(
    diagnostics: Vec<Diagnostic>,
    options: &Options,
    name: &str,
    text: &str,
    err: &mut E,
) -> io::Result<usize> {
    let mut queue = DiagnosticQueue::with_config(options.diagnostics.clone());
    queue.extend(diagnostics);
    let errors = queue.error_count();
    let dropped = queue.dropped();

    let mut emitter = TerminalEmitter::with_color_mode(&mut *err, options.color, options.is_tty)
        .with_source(name, text);
    emitter.emit_all(&queue.flush());
    emitter.emit_summary(errors);
    emitter.flush();

    if dropped > 0 {
        writeln!(err, "note: {dropped} further errors not shown")?;
    }
    Ok(errors + dropped)
}
