//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor walks the buffer byte by byte. End of input is the sentinel
//! (`0x00`) at or past the source length; an interior null byte has the same
//! value, so [`Cursor::is_eof`] compares positions as well.

use crate::CursorError;

/// Copyable scan position over a [`SourceBuffer`](crate::SourceBuffer).
///
/// Being [`Copy`] makes snapshots for backtracking free.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source + sentinel + padding.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// `buf[source_len]` must be the `0x00` sentinel.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Byte `offset` positions ahead, or the `0x00` sentinel past the end.
    ///
    /// Callers treat the sentinel as "no match", never as a literal byte.
    #[inline]
    pub fn peek(&self, offset: u32) -> u8 {
        let at = self.pos as usize + offset as usize;
        if at >= self.source_len as usize {
            return 0;
        }
        self.buf[at]
    }

    /// Move forward `n` bytes, stopping at the end of the source.
    #[inline]
    pub fn advance(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Move forward by one byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Move back `by` bytes. Fails (cursor unchanged) before offset 0.
    pub fn rewind(&mut self, by: u32) -> Result<(), CursorError> {
        match self.pos.checked_sub(by) {
            Some(pos) => {
                self.pos = pos;
                Ok(())
            }
            None => Err(CursorError::RewindBeforeStart { pos: self.pos, by }),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text between two offsets.
    pub fn slice(&self, start: u32, end: u32) -> Result<&'a str, CursorError> {
        if end < start {
            return Err(CursorError::SliceOutOfOrder { start, end });
        }
        if end > self.source_len {
            return Err(CursorError::SliceOutOfBounds {
                end,
                len: self.source_len,
            });
        }
        std::str::from_utf8(&self.buf[start as usize..end as usize])
            .map_err(|_| CursorError::NotCharBoundary { start, end })
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> Result<&'a str, CursorError> {
        self.slice(start, self.pos)
    }

    /// Raw bytes between `start` and the current position, clamped to the source.
    pub fn bytes_from(&self, start: u32) -> &'a [u8] {
        let start = start.min(self.pos) as usize;
        &self.buf[start..self.pos as usize]
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at end of input regardless of `pred(0)`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character (at least one byte).
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance(width);
    }

    /// Advance to the next `\n` (not consumed) or end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past the next `*/`. Returns `false` (cursor at end of input)
    /// when there is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn eat_past_block_comment_end(&mut self) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memmem::find(remaining, b"*/") {
            Some(offset) => {
                self.pos += offset as u32 + 2;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }
}
