//! Flattened trie table.
//!
//! Conceptually a `max_len`-dimensional array with `arity` slots per
//! dimension, where dimension `i` is indexed by the symbol of the `i`-th
//! byte of a lexeme. Unused trailing positions use symbol `0`, so a lexeme
//! shorter than `max_len` lands on the coordinate padded with zeros.
//!
//! The array is stored flat. A stride vector (`stride[0] = 1`,
//! `stride[i] = stride[i - 1] * arity`) turns a symbol sequence into an
//! offset: `sum(stride[i] * symbol[i])`. Because the offset of a prefix is
//! the running sum of the first terms, a single left-to-right pass visits
//! the cell of every prefix of the input in turn.
//!
//! ```text
//! lexemes ["-", "->", ">"]   alphabet { '-': 1, '>': 2 }   arity 3
//!
//! offset = symbol[0] * 1 + symbol[1] * 3
//!   "-"  -> 1        "->" -> 1 + 2*3 = 7        ">" -> 2
//! ```

use smallvec::SmallVec;

use crate::{Alphabet, PatternSetError};

/// Marks a cell that no lexeme maps to.
const NO_MATCH: u32 = u32::MAX;

/// Index of a pattern inside its [`PatternSet`](crate::PatternSet), in
/// declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternId(u32);

impl PatternId {
    /// Position of the pattern in declaration order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Precomputed lookup table mapping symbol sequences to pattern indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatTable {
    /// `arity^max_len` cells, each `NO_MATCH` or a pattern index.
    cells: Box<[u32]>,
    /// One entry per dimension; `stride.len() == max_len`.
    stride: SmallVec<[usize; 8]>,
}

impl FlatTable {
    /// Build the table for `lexemes` over `alphabet`.
    ///
    /// `alphabet` must have been computed from the same lexemes. When two
    /// lexemes have identical bytes, the first one keeps the cell.
    pub fn build<L: AsRef<[u8]>>(
        alphabet: &Alphabet,
        lexemes: &[L],
        cell_limit: usize,
    ) -> Result<Self, PatternSetError> {
        if lexemes.len() >= NO_MATCH as usize {
            return Err(PatternSetError::TooManyPatterns {
                count: lexemes.len(),
            });
        }
        if let Some(index) = lexemes.iter().position(|l| l.as_ref().is_empty()) {
            return Err(PatternSetError::EmptyLexeme { index });
        }

        let arity = alphabet.arity();
        let max_len = lexemes
            .iter()
            .map(|l| l.as_ref().len())
            .max()
            .unwrap_or(0);
        let too_large = PatternSetError::TableTooLarge {
            arity,
            max_len,
            limit: cell_limit,
        };
        let size = u32::try_from(max_len)
            .ok()
            .and_then(|depth| arity.checked_pow(depth))
            .filter(|&size| size <= cell_limit)
            .ok_or(too_large)?;

        let mut stride: SmallVec<[usize; 8]> = SmallVec::with_capacity(max_len);
        let mut step = 1usize;
        for _ in 0..max_len {
            stride.push(step);
            // Only the product after the last push can exceed `size`; it is unused.
            step = step.saturating_mul(arity);
        }

        let mut cells = vec![NO_MATCH; size].into_boxed_slice();
        for (index, lexeme) in (0u32..).zip(lexemes) {
            let offset: usize = lexeme
                .as_ref()
                .iter()
                .zip(&stride)
                .map(|(&byte, &s)| s * usize::from(alphabet.symbol(byte)))
                .sum();
            let cell = &mut cells[offset];
            if *cell == NO_MATCH {
                *cell = index;
            }
        }

        Ok(Self { cells, stride })
    }

    /// Longest lexeme that is a prefix of `input`.
    ///
    /// Scans at most `max_len` bytes. The scan stops at the first byte that
    /// belongs to no lexeme: no registered lexeme can contain it, so no
    /// longer match is possible past that point.
    #[inline]
    pub fn longest_match(&self, alphabet: &Alphabet, input: &[u8]) -> Option<PatternId> {
        let mut offset = 0usize;
        let mut found = None;
        for (&byte, &step) in input.iter().zip(&self.stride) {
            let symbol = alphabet.symbol(byte);
            if symbol == 0 {
                break;
            }
            offset += step * usize::from(symbol);
            let cell = self.cells[offset];
            if cell != NO_MATCH {
                found = Some(PatternId(cell));
            }
        }
        found
    }

    /// Pattern whose lexeme is exactly the single byte `byte`.
    #[inline]
    pub fn match_byte(&self, alphabet: &Alphabet, byte: u8) -> Option<PatternId> {
        match alphabet.symbol(byte) {
            0 => None,
            // stride[0] == 1
            symbol => self.cell(usize::from(symbol)),
        }
    }

    /// Pattern stored at a flat `offset`, if any.
    pub fn cell(&self, offset: usize) -> Option<PatternId> {
        self.cells
            .get(offset)
            .copied()
            .filter(|&cell| cell != NO_MATCH)
            .map(PatternId)
    }

    /// Stride vector, one entry per byte position.
    pub fn stride(&self) -> &[usize] {
        &self.stride
    }

    /// Length of the longest lexeme (table depth).
    pub fn max_len(&self) -> usize {
        self.stride.len()
    }

    /// Total number of cells (`arity^max_len`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: even the degenerate table has one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
