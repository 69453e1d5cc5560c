//! Emitted token records.

use std::fmt;

/// Zero-based line and column of a token's first byte.
///
/// `col` counts bytes from the most recent newline byte, so a newline
/// token itself sits at column 0 of the line it opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.col)
    }
}

/// A tagged, positioned slice of the source.
///
/// `text` borrows from the source buffer; tokens never copy input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src, K> {
    pub kind: K,
    pub text: &'src [u8],
    /// Byte offset of `text` in the source.
    pub start: usize,
    pub line: usize,
    pub col: usize,
}

impl<'src, K> Token<'src, K> {
    /// Length of the token in bytes. Zero only for end-of-input.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            col: self.col,
        }
    }

    /// `text` as UTF-8, or `None` if the token splits or contains invalid UTF-8.
    pub fn text_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.text).ok()
    }
}

/// `Kind > 'text', (line, col)`.
///
/// Printable ASCII (including `\` and `'`) is written as is; any other byte
/// is escaped (`\n`, `\t`, `\x1b`, ...).
impl<K: fmt::Display> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} > '{}', {}",
            self.kind,
            Printable(self.text),
            self.position()
        )
    }
}

struct Printable<'a>(&'a [u8]);

impl fmt::Display for Printable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.0 {
            if byte == b' ' || byte.is_ascii_graphic() {
                write!(f, "{}", char::from(byte))?;
            } else {
                write!(f, "{}", byte.escape_ascii())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
