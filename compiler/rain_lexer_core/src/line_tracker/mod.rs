//! Line and column counters.
//!
//! Lines start at 1, columns at 0 and count bytes. A `\n` moves to the next
//! line and resets the column; every other byte (including `\r` and the
//! bytes of multibyte characters) adds one column.

/// Line/column counters advanced in lockstep with a [`Cursor`](crate::Cursor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineTracker {
    line: u32,
    column: u32,
}

impl Default for LineTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LineTracker {
    pub const fn new() -> Self {
        LineTracker { line: 1, column: 0 }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Account for one consumed byte.
    #[inline]
    pub fn bump(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Account for a run of consumed bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "runs come from a buffer whose length fits in u32"
    )]
    pub fn advance_over(&mut self, bytes: &[u8]) {
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                self.line += memchr::memchr_iter(b'\n', bytes).count() as u32;
                self.column = (bytes.len() - last - 1) as u32;
            }
            None => self.column += bytes.len() as u32,
        }
    }
}
