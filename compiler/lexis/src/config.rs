//! Lexer configuration: which categories are active and how they match.
//!
//! Literal categories (whitespace, punctuation, operators) are
//! [`PatternSet`]s. Identifiers and numbers have unbounded length, so they
//! are recognized by hooks instead: plain `fn` pointers that receive the
//! remaining input with the current byte first. Hooks may look past the
//! first byte, e.g. to decode a multi-byte character with
//! [`utf8::decode`](crate::utf8::decode).

use std::fmt;

use bitflags::bitflags;
use lexis_switch::PatternSet;

/// Tests the byte at the start of the remaining input.
pub type Predicate = fn(&[u8]) -> bool;

/// Returns how many bytes at the start of the remaining input form a run.
pub type RunScanner = fn(&[u8]) -> usize;

bitflags! {
    /// Categories a configuration has enabled.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Categories: u8 {
        const WHITESPACE = 1 << 0;
        const PUNCTUATION = 1 << 1;
        const OPERATORS = 1 << 2;
        const IDENTIFIER = 1 << 3;
        const NUMBER = 1 << 4;
    }
}

/// Identifier hook: a start predicate, a greedy continuation predicate and
/// the width of one character.
///
/// The scan steps character by character: after a predicate accepts, the
/// identifier grows by `width` bytes (clamped to at least one byte and to
/// the remaining input). The start character is always part of the
/// identifier; `is_continue` is only consulted at the character boundaries
/// after it.
#[derive(Clone, Copy)]
pub struct IdentifierRule<K> {
    pub kind: K,
    pub is_start: Predicate,
    pub is_continue: Predicate,
    pub width: RunScanner,
}

impl<K> IdentifierRule<K> {
    /// ASCII identifiers: `[_$A-Za-z][_$A-Za-z0-9]*`.
    pub fn ascii(kind: K) -> Self {
        Self {
            kind,
            is_start: is_ascii_identifier_start,
            is_continue: is_ascii_identifier_continue,
            width: single_byte,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for IdentifierRule<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierRule")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Number hook: a trigger predicate and a run scanner measuring the literal.
///
/// A scan result of `0` defers the byte to the unknown fallback; results
/// past the end of input are clamped.
#[derive(Clone, Copy)]
pub struct NumberRule<K> {
    pub kind: K,
    pub is_digit: Predicate,
    pub scan: RunScanner,
}

impl<K> NumberRule<K> {
    /// ASCII digits, runs of digits and `.` ([`default_number_scan`]).
    pub fn decimal(kind: K) -> Self {
        Self {
            kind,
            is_digit: is_ascii_digit,
            scan: default_number_scan,
        }
    }

    /// ASCII digits, runs of digits only ([`digit_run_scan`]).
    pub fn integer(kind: K) -> Self {
        Self {
            kind,
            is_digit: is_ascii_digit,
            scan: digit_run_scan,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for NumberRule<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberRule")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Immutable lexer configuration.
///
/// Built once with [`LexerConfig::builder`] and shared read-only by every
/// [`Lexer`](crate::Lexer) that uses it.
#[derive(Clone, Debug)]
pub struct LexerConfig<K> {
    pub(crate) whitespace: Option<PatternSet<K>>,
    pub(crate) punctuation: Option<PatternSet<K>>,
    pub(crate) operators: Option<PatternSet<K>>,
    pub(crate) identifier: Option<IdentifierRule<K>>,
    pub(crate) number: Option<NumberRule<K>>,
    pub(crate) unknown: K,
    pub(crate) eof: K,
    categories: Categories,
}

impl<K: Copy> LexerConfig<K> {
    /// Start a configuration with no categories enabled.
    ///
    /// `unknown` tags bytes no category claims; `eof` tags the final
    /// empty token.
    pub fn builder(unknown: K, eof: K) -> LexerConfigBuilder<K> {
        LexerConfigBuilder {
            whitespace: None,
            punctuation: None,
            operators: None,
            identifier: None,
            number: None,
            unknown,
            eof,
        }
    }

    pub fn categories(&self) -> Categories {
        self.categories
    }

    pub fn whitespace(&self) -> Option<&PatternSet<K>> {
        self.whitespace.as_ref()
    }

    pub fn punctuation(&self) -> Option<&PatternSet<K>> {
        self.punctuation.as_ref()
    }

    pub fn operators(&self) -> Option<&PatternSet<K>> {
        self.operators.as_ref()
    }

    pub fn identifier(&self) -> Option<&IdentifierRule<K>> {
        self.identifier.as_ref()
    }

    pub fn number(&self) -> Option<&NumberRule<K>> {
        self.number.as_ref()
    }

    pub fn unknown_kind(&self) -> K {
        self.unknown
    }

    pub fn eof_kind(&self) -> K {
        self.eof
    }
}

/// Builder for [`LexerConfig`]. Categories left unset are skipped.
#[derive(Debug)]
pub struct LexerConfigBuilder<K> {
    whitespace: Option<PatternSet<K>>,
    punctuation: Option<PatternSet<K>>,
    operators: Option<PatternSet<K>>,
    identifier: Option<IdentifierRule<K>>,
    number: Option<NumberRule<K>>,
    unknown: K,
    eof: K,
}

impl<K: Copy> LexerConfigBuilder<K> {
    #[must_use]
    pub fn whitespace(mut self, set: PatternSet<K>) -> Self {
        self.whitespace = Some(set);
        self
    }

    #[must_use]
    pub fn punctuation(mut self, set: PatternSet<K>) -> Self {
        self.punctuation = Some(set);
        self
    }

    #[must_use]
    pub fn operators(mut self, set: PatternSet<K>) -> Self {
        self.operators = Some(set);
        self
    }

    #[must_use]
    pub fn identifier(mut self, rule: IdentifierRule<K>) -> Self {
        self.identifier = Some(rule);
        self
    }

    #[must_use]
    pub fn number(mut self, rule: NumberRule<K>) -> Self {
        self.number = Some(rule);
        self
    }

    pub fn build(self) -> LexerConfig<K> {
        let mut categories = Categories::empty();
        categories.set(Categories::WHITESPACE, self.whitespace.is_some());
        categories.set(Categories::PUNCTUATION, self.punctuation.is_some());
        categories.set(Categories::OPERATORS, self.operators.is_some());
        categories.set(Categories::IDENTIFIER, self.identifier.is_some());
        categories.set(Categories::NUMBER, self.number.is_some());
        LexerConfig {
            whitespace: self.whitespace,
            punctuation: self.punctuation,
            operators: self.operators,
            identifier: self.identifier,
            number: self.number,
            unknown: self.unknown,
            eof: self.eof,
            categories,
        }
    }
}

// ─── Stock hooks ────────────────────────────────────────────────

/// First byte is an ASCII digit `0`-`9`.
pub fn is_ascii_digit(input: &[u8]) -> bool {
    input.first().is_some_and(u8::is_ascii_digit)
}

/// Leading run of ASCII digits and `.`.
pub fn default_number_scan(input: &[u8]) -> usize {
    input
        .iter()
        .take_while(|&&b| b.is_ascii_digit() || b == b'.')
        .count()
}

/// Leading run of ASCII digits.
pub fn digit_run_scan(input: &[u8]) -> usize {
    input.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Character width for byte-oriented identifiers: always one byte.
pub fn single_byte(_input: &[u8]) -> usize {
    1
}

/// First byte is `_`, `$` or an ASCII letter.
pub fn is_ascii_identifier_start(input: &[u8]) -> bool {
    matches!(input.first(), Some(b'_' | b'$' | b'a'..=b'z' | b'A'..=b'Z'))
}

/// First byte starts an identifier or is an ASCII digit.
pub fn is_ascii_identifier_continue(input: &[u8]) -> bool {
    is_ascii_identifier_start(input) || is_ascii_digit(input)
}
