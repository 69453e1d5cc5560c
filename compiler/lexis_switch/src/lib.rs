//! Literal pattern sets with longest-prefix matching.
//!
//! A [`PatternSet`] is built once from an ordered list of `(tag, lexeme)`
//! pairs and answers "which registered lexeme is the longest prefix of this
//! input?" in `O(max lexeme length)` with no allocation.
//!
//! # Architecture
//!
//! ```text
//! [(tag, bytes)...] --> Alphabet (byte -> dense symbol)
//!                   --> FlatTable (symbol sequence -> pattern index)
//!                   --> PatternSet (alphabet + table + patterns)
//! ```
//!
//! The trie over pattern bytes is stored as one flat array addressed by
//! strided multiplication instead of linked nodes. The table holds
//! `arity^max_len` cells, so this structure is meant for short lexemes
//! (punctuation, operators, whitespace), not identifiers or numbers.

mod alphabet;
mod error;
mod pattern_set;
mod table;

pub use alphabet::Alphabet;
pub use error::PatternSetError;
pub use pattern_set::{Pattern, PatternSet, PatternSetBuilder, DEFAULT_CELL_LIMIT};
pub use table::{FlatTable, PatternId};
