//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content so
//! the scanner can detect end of input by looking at the current byte. The
//! allocation is rounded up to the next 64-byte boundary, which also gives
//! `peek` a run of zero padding to read from near the end.
//!
//! # Encoding Detection
//!
//! During construction the buffer records:
//! - UTF-8 BOM and UTF-16 BOMs
//! - Interior null bytes (indistinguishable from the sentinel by value alone)
//! - Invalid UTF-8 sequences, each replaced by U+FFFD so that every slice of
//!   the buffer is a valid `&str`
//!
//! Offsets in an [`EncodingIssue`] refer to the buffer contents, i.e. after
//! replacement.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// UTF-8 encoding of U+FFFD.
const REPLACEMENT: &[u8] = "\u{FFFD}".as_bytes();

/// Sentinel-terminated source buffer.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the buffer.
    pub pos: u32,
    /// Byte length of the offending sequence in the buffer.
    pub len: u32,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingIssueKind {
    /// `EF BB BF` at start.
    Utf8Bom,
    /// `FF FE` at start.
    Utf16LeBom,
    /// `FE FF` at start.
    Utf16BeBom,
    /// A `0x00` byte inside the content.
    InteriorNull,
    /// Bytes that are not valid UTF-8, now a single U+FFFD.
    InvalidUtf8,
}

impl EncodingIssueKind {
    pub fn message(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "source starts with a UTF-8 byte order mark",
            EncodingIssueKind::Utf16LeBom => "source looks like UTF-16 (little-endian)",
            EncodingIssueKind::Utf16BeBom => "source looks like UTF-16 (big-endian)",
            EncodingIssueKind::InteriorNull => "null byte in source",
            EncodingIssueKind::InvalidUtf8 => "invalid UTF-8 sequence",
        }
    }
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to that length.
    pub fn new(source: &[u8]) -> Self {
        let mut encoding_issues = Vec::new();
        detect_bom(source, &mut encoding_issues);

        let mut content = normalize_utf8(source, &mut encoding_issues);
        content.truncate(u32::MAX as usize);
        detect_interior_nulls(&content, &mut encoding_issues);
        encoding_issues.sort_by_key(|issue| issue.pos);

        let source_len = content.len();
        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        content.resize(padded_len, 0);

        SourceBuffer {
            buf: content,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// Convenience constructor for text that is already a `&str`.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes())
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source as text. Always valid: bad UTF-8 was replaced.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect byte order marks at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let (kind, len) = match source {
        [0xEF, 0xBB, 0xBF, ..] => (EncodingIssueKind::Utf8Bom, 3),
        [0xFF, 0xFE, ..] => (EncodingIssueKind::Utf16LeBom, 2),
        [0xFE, 0xFF, ..] => (EncodingIssueKind::Utf16BeBom, 2),
        _ => return,
    };
    issues.push(EncodingIssue { kind, pos: 0, len });
}

/// Copy `source`, replacing each maximal invalid UTF-8 run with U+FFFD.
fn normalize_utf8(source: &[u8], issues: &mut Vec<EncodingIssue>) -> Vec<u8> {
    let mut out = Vec::with_capacity(source.len() + CACHE_LINE);
    for chunk in source.utf8_chunks() {
        out.extend_from_slice(chunk.valid().as_bytes());
        if !chunk.invalid().is_empty() {
            if let Ok(pos) = u32::try_from(out.len()) {
                issues.push(EncodingIssue {
                    kind: EncodingIssueKind::InvalidUtf8,
                    pos,
                    len: REPLACEMENT.len() as u32,
                });
            }
            out.extend_from_slice(REPLACEMENT);
        }
    }
    out
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for absolute in memchr::memchr_iter(0, source) {
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
    }
}
