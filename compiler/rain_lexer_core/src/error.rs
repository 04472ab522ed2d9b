use thiserror::Error;

/// Misuse of a [`Cursor`](crate::Cursor) that would read outside the source
/// or split a UTF-8 character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("slice start {start} is after slice end {end}")]
    SliceOutOfOrder { start: u32, end: u32 },
    #[error("slice end {end} is past the end of the source ({len} bytes)")]
    SliceOutOfBounds { end: u32, len: u32 },
    #[error("cannot rewind {by} bytes from offset {pos}")]
    RewindBeforeStart { pos: u32, by: u32 },
    #[error("slice {start}..{end} does not fall on character boundaries")]
    NotCharBoundary { start: u32, end: u32 },
}
