//! Construction-time errors for pattern sets.

use thiserror::Error;

/// Rejected pattern set configuration.
///
/// Every variant is detected while building; a built [`PatternSet`](crate::PatternSet)
/// never fails at match time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternSetError {
    /// A pattern with no bytes would match without consuming input.
    #[error("pattern #{index} has an empty lexeme")]
    EmptyLexeme { index: usize },

    /// The same byte sequence was registered under two different tags.
    #[error("lexeme {lexeme:?} registered as both {first} and {second}")]
    ConflictingTags {
        lexeme: String,
        first: String,
        second: String,
    },

    /// More patterns than a table cell can index.
    #[error("{count} patterns exceed the table's index range")]
    TooManyPatterns { count: usize },

    /// `arity^max_len` cells overflow or exceed the configured limit.
    #[error("flat table with arity {arity} and depth {max_len} exceeds the limit of {limit} cells")]
    TableTooLarge {
        arity: usize,
        max_len: usize,
        limit: usize,
    },
}
