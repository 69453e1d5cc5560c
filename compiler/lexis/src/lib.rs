//! Configurable tokenizer for byte buffers.
//!
//! A [`LexerConfig`] bundles up to three literal [`PatternSet`]s
//! (whitespace, punctuation, operators) and two scan hooks (identifiers,
//! numbers). A [`Lexer`] walks the input once, left to right, trying the
//! categories in a fixed priority order and emitting one [`Token`] per
//! match:
//!
//! ```text
//! newline bookkeeping -> whitespace -> punctuation -> operators
//!                     -> identifier -> number -> unknown (1 byte)
//! ```
//!
//! Tokenization is total. Bytes no category claims become single-byte
//! tokens of the configured unknown kind, and the stream always ends with
//! exactly one empty end-of-input token. Token texts borrow from the
//! source and concatenate back to it byte for byte.
//!
//! ```
//! use lexis::presets::{self, DefaultTokenKind};
//! use lexis::Lexer;
//!
//! let config = presets::default_config()?;
//! let tokens = Lexer::new(&config).lex("a >> 1");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         DefaultTokenKind::Identifier,
//!         DefaultTokenKind::Whitespace,
//!         DefaultTokenKind::GreaterThanGreaterThan,
//!         DefaultTokenKind::Whitespace,
//!         DefaultTokenKind::Number,
//!         DefaultTokenKind::Eof,
//!     ]
//! );
//! # Ok::<(), lexis::PatternSetError>(())
//! ```

mod config;
mod cursor;
mod driver;
pub mod presets;
mod token;
pub mod utf8;

pub use config::{
    default_number_scan, digit_run_scan, is_ascii_digit, is_ascii_identifier_continue,
    is_ascii_identifier_start, single_byte, Categories, IdentifierRule, LexerConfig,
    LexerConfigBuilder, NumberRule, Predicate, RunScanner,
};
pub use cursor::Cursor;
pub use driver::{Lexer, TokenStream};
pub use lexis_switch::{Pattern, PatternId, PatternSet, PatternSetBuilder, PatternSetError};
pub use token::{Position, Token};
