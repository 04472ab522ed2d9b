//! Collects lexer and parser reports and hands them back in source order,
//! capped at the configured error limit.

use crate::Diagnostic;

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before further errors are dropped (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic whose code, position and message repeat an earlier one.
    pub dedupe: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            dedupe: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            dedupe: false,
        }
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.add(diagnostic);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Reports accepted since the last flush.
    error_count: usize,
    /// Errors refused because the limit was hit.
    dropped: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            self.dropped += 1;
            return false;
        }

        if self.config.dedupe && self.is_duplicate(&diag) {
            return false;
        }

        self.error_count += 1;
        self.diagnostics.push(diag);
        true
    }

    /// Add every diagnostic from an iterator, returning how many were kept.
    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) -> usize {
        let mut kept = 0;
        for diag in diags {
            if self.add(diag) {
                kept += 1;
            }
        }
        kept
    }

    fn is_duplicate(&self, diag: &Diagnostic) -> bool {
        self.diagnostics.iter().rev().any(|prev| {
            prev.code == diag.code && prev.pos == diag.pos && prev.message == diag.message
        })
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of errors refused after the limit was reached.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue. Reports at the same position keep insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| sort_key(&w[0]) <= sort_key(&w[1]));

        if !already_sorted {
            self.diagnostics.sort_by_key(sort_key);
        }

        self.error_count = 0;
        self.dropped = 0;
        std::mem::take(&mut self.diagnostics)
    }
}

fn sort_key(diag: &Diagnostic) -> (u32, u32, u32) {
    (diag.pos.source.raw(), diag.pos.line, diag.pos.column)
}

#[cfg(test)]
mod tests;
