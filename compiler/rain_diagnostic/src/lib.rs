//! Diagnostic system for the Rain front end.
//!
//! Every stage reports problems as [`Diagnostic`] values:
//! - Error codes for searchability (`E0xxx` lexer, `E1xxx` parser)
//! - A message saying what went wrong
//! - The [`Position`](rain_ir::Position) and byte span where it went wrong
//! - Optional notes
//!
//! Diagnostics are collected in a [`DiagnosticQueue`] and rendered by an
//! emitter.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
