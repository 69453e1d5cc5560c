//! Byte alphabet compression.
//!
//! Maps the bytes used by one pattern set onto a dense symbol range so the
//! flat table only needs `distinct_bytes + 1` slots per dimension.
//!
//! Symbol `0` is reserved for bytes that appear in no pattern. Symbols
//! `1..=len` are handed out in first-occurrence order, scanning lexemes in
//! declaration order, byte by byte.

/// Dense byte-to-symbol mapping for one pattern set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    /// `symbols[byte]` is the symbol for `byte`, or `0` if unused.
    /// `u16` because all 256 byte values may be in use.
    symbols: [u16; 256],
    /// Number of distinct bytes seen.
    len: u16,
}

impl Alphabet {
    /// Assign symbols to every byte of `lexemes`, in order of first occurrence.
    pub fn from_lexemes<I, L>(lexemes: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut symbols = [0u16; 256];
        let mut len = 0u16;
        for lexeme in lexemes {
            for &byte in lexeme.as_ref() {
                let slot = &mut symbols[usize::from(byte)];
                if *slot == 0 {
                    len += 1;
                    *slot = len;
                }
            }
        }
        Self { symbols, len }
    }

    /// Symbol for `byte`; `0` if no pattern uses it.
    #[inline]
    pub fn symbol(&self, byte: u8) -> u16 {
        self.symbols[usize::from(byte)]
    }

    /// Returns `true` if some pattern contains `byte`.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.symbol(byte) != 0
    }

    /// Number of distinct bytes in the alphabet.
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Returns `true` if no byte has been assigned a symbol.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots per table dimension: every symbol plus the unused symbol `0`.
    pub fn arity(&self) -> usize {
        self.len() + 1
    }
}
