//! Tagged literal pattern sets.
//!
//! Couples an [`Alphabet`], a [`FlatTable`] and the ordered pattern list.
//! Built once, immutable afterwards, and freely shareable across threads.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Alphabet, FlatTable, PatternId, PatternSetError};

/// Default upper bound on flat table cells (16M cells, 64 MiB).
pub const DEFAULT_CELL_LIMIT: usize = 1 << 24;

/// A literal lexeme and the tag it resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern<T> {
    tag: T,
    lexeme: Box<[u8]>,
}

impl<T: Copy> Pattern<T> {
    pub fn new(tag: T, lexeme: impl AsRef<[u8]>) -> Self {
        Self {
            tag,
            lexeme: lexeme.as_ref().into(),
        }
    }

    #[inline]
    pub fn tag(&self) -> T {
        self.tag
    }

    #[inline]
    pub fn lexeme(&self) -> &[u8] {
        &self.lexeme
    }
}

/// Ordered set of tagged literal patterns with longest-prefix matching.
///
/// # Example
///
/// ```
/// use lexis_switch::PatternSet;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Op { Gt, Shr }
///
/// let ops = PatternSet::new([(Op::Gt, ">"), (Op::Shr, ">>")])?;
/// let id = ops.find(b">>=").expect("prefix is registered");
/// assert_eq!(ops.tag(id), Op::Shr);
/// assert_eq!(ops.lexeme(id), b">>");
/// # Ok::<(), lexis_switch::PatternSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PatternSet<T> {
    patterns: Box<[Pattern<T>]>,
    alphabet: Alphabet,
    table: FlatTable,
}

impl<T: Copy + Eq + fmt::Debug> PatternSet<T> {
    /// Build a pattern set from `(tag, lexeme)` pairs in declaration order.
    pub fn new<I, L>(patterns: I) -> Result<Self, PatternSetError>
    where
        I: IntoIterator<Item = (T, L)>,
        L: AsRef<[u8]>,
    {
        let mut builder = Self::builder();
        for (tag, lexeme) in patterns {
            builder = builder.pattern(tag, lexeme);
        }
        builder.build()
    }

    pub fn builder() -> PatternSetBuilder<T> {
        PatternSetBuilder {
            patterns: Vec::new(),
            cell_limit: DEFAULT_CELL_LIMIT,
        }
    }

    /// Longest registered lexeme that is a prefix of `input`.
    ///
    /// `None` means this set does not claim the start of `input`.
    #[inline]
    pub fn find(&self, input: &[u8]) -> Option<PatternId> {
        self.table.longest_match(&self.alphabet, input)
    }

    /// Pattern whose lexeme is exactly `byte`.
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<PatternId> {
        self.table.match_byte(&self.alphabet, byte)
    }

    /// Lexeme of a pattern returned by [`find`](Self::find).
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this set.
    #[inline]
    pub fn lexeme(&self, id: PatternId) -> &[u8] {
        self.patterns[id.index()].lexeme()
    }

    /// Tag of a pattern returned by [`find`](Self::find).
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this set.
    #[inline]
    pub fn tag(&self, id: PatternId) -> T {
        self.patterns[id.index()].tag()
    }

    pub fn get(&self, id: PatternId) -> Option<&Pattern<T>> {
        self.patterns.get(id.index())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Pattern<T>> + '_ {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Length of the longest lexeme.
    pub fn max_len(&self) -> usize {
        self.table.max_len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn table(&self) -> &FlatTable {
        &self.table
    }
}

/// Accumulates patterns for a [`PatternSet`].
#[derive(Clone, Debug)]
pub struct PatternSetBuilder<T> {
    patterns: Vec<Pattern<T>>,
    cell_limit: usize,
}

impl<T: Copy + Eq + fmt::Debug> PatternSetBuilder<T> {
    #[must_use]
    pub fn pattern(mut self, tag: T, lexeme: impl AsRef<[u8]>) -> Self {
        self.patterns.push(Pattern::new(tag, lexeme));
        self
    }

    /// Maximum number of flat table cells the set may allocate.
    #[must_use]
    pub fn cell_limit(mut self, cells: usize) -> Self {
        self.cell_limit = cells;
        self
    }

    /// Validate the patterns and precompute the lookup structures.
    ///
    /// A lexeme registered twice with the same tag is kept once (first
    /// position wins). Registered twice with different tags is an error.
    pub fn build(self) -> Result<PatternSet<T>, PatternSetError> {
        let mut seen: FxHashMap<&[u8], usize> = FxHashMap::default();
        let mut keep = Vec::with_capacity(self.patterns.len());
        for (index, pattern) in self.patterns.iter().enumerate() {
            if pattern.lexeme.is_empty() {
                return Err(PatternSetError::EmptyLexeme { index });
            }
            match seen.get(pattern.lexeme()) {
                Some(&first) => {
                    let first = &self.patterns[first];
                    if first.tag != pattern.tag {
                        return Err(PatternSetError::ConflictingTags {
                            lexeme: String::from_utf8_lossy(pattern.lexeme()).into_owned(),
                            first: format!("{:?}", first.tag),
                            second: format!("{:?}", pattern.tag),
                        });
                    }
                    tracing::debug!(
                        lexeme = %pattern.lexeme().escape_ascii(),
                        tag = ?pattern.tag,
                        "duplicate pattern ignored"
                    );
                }
                None => {
                    seen.insert(pattern.lexeme(), index);
                    keep.push(index);
                }
            }
        }

        let patterns: Box<[Pattern<T>]> = if keep.len() == self.patterns.len() {
            self.patterns.into_boxed_slice()
        } else {
            keep.iter().map(|&i| self.patterns[i].clone()).collect()
        };

        let lexemes: Vec<&[u8]> = patterns.iter().map(Pattern::lexeme).collect();
        let alphabet = Alphabet::from_lexemes(&lexemes);
        let table = FlatTable::build(&alphabet, &lexemes, self.cell_limit)?;
        tracing::debug!(
            patterns = patterns.len(),
            arity = alphabet.arity(),
            max_len = table.max_len(),
            cells = table.len(),
            "built pattern set"
        );

        Ok(PatternSet {
            patterns,
            alphabet,
            table,
        })
    }
}
