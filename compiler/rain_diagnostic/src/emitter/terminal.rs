//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and
//! a caret snippet of the offending source line.

use std::io::{self, Write};

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source text the emitter quotes from.
#[derive(Clone, Copy, Debug)]
struct SourceText<'a> {
    name: &'a str,
    text: &'a str,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'a, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceText<'a>>,
}

impl<'a, W: Write> TerminalEmitter<'a, W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Quote lines from `text` (named `name` in the location line).
    #[must_use]
    pub fn with_source(mut self, name: &'a str, text: &'a str) -> Self {
        self.source = Some(SourceText { name, text });
        self
    }

    /// Recover the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_snippet(&mut self, diagnostic: &Diagnostic) {
        let Some(source) = self.source else {
            return;
        };
        let line_no = diagnostic.pos.line;
        let Some(line) = source
            .text
            .split('\n')
            .nth(line_no.saturating_sub(1) as usize)
        else {
            return;
        };
        let line = line.strip_suffix('\r').unwrap_or(line);

        let column = diagnostic.pos.column as usize;
        let lead = line.get(..column).map_or(column, |s| s.chars().count());
        let rest = line.get(column..).unwrap_or("");
        let width = rest
            .get(..(diagnostic.span.len() as usize).min(rest.len()))
            .map_or(1, |s| s.chars().count())
            .max(1);

        let gutter = line_no.to_string();
        let pad = " ".repeat(gutter.len());

        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {line}");
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat(lead));
        let carets = "^".repeat(width);
        self.write_colored(&carets, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let _ = write!(self.writer, "  --> ");
        match self.source {
            Some(source) => {
                let _ = writeln!(self.writer, "{}:{}", source.name, diagnostic.pos);
            }
            None => {
                let _ = writeln!(self.writer, "{}", diagnostic.pos);
            }
        }

        self.write_snippet(diagnostic);

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}
