//! Scan position and line bookkeeping.

/// Driver-local scan state.
///
/// `offset` only moves forward. Each [`TokenStream`](crate::TokenStream)
/// owns its own cursor, so one configuration can drive any number of
/// concurrent scans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
    line: usize,
    line_start: usize,
}

impl Cursor {
    /// Cursor at offset 0, line 0.
    pub const fn new() -> Self {
        Self {
            offset: 0,
            line: 0,
            line_start: 0,
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Offset of the newline byte that opened the current line (0 on line 0).
    #[inline]
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.offset - self.line_start
    }

    /// Start a new line at the current offset, which holds a newline byte.
    #[inline]
    pub(crate) fn enter_line(&mut self) {
        self.line += 1;
        self.line_start = self.offset;
    }

    #[inline]
    pub(crate) fn bump(&mut self, len: usize) {
        debug_assert!(len > 0, "cursor must make progress");
        self.offset += len;
    }
}
