//! Low-level source access for the Rain lexer.
//!
//! This crate knows nothing about tokens. It provides:
//! - [`SourceBuffer`]: an owned, sentinel-terminated copy of the input with
//!   encoding problems recorded as [`EncodingIssue`]s
//! - [`Cursor`]: a copyable scan position with bounded lookahead and slicing
//! - [`LineTracker`]: line/column counters advanced in lockstep with a cursor

mod cursor;
mod error;
mod line_tracker;
mod source_buffer;

pub use cursor::Cursor;
pub use error::CursorError;
pub use line_tracker::LineTracker;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
