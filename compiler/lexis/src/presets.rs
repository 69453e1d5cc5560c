//! Stock configurations.
//!
//! - [`default_config`]: C-like punctuation, operators, ASCII identifiers
//!   and decimal numbers, tagged with [`DefaultTokenKind`].
//! - [`ansi_config`]: ANSI SGR escape strings such as `\x1b[1;31m`, tagged
//!   with [`AnsiTokenKind`].
//!
//! Each call builds a fresh configuration; build once and share it by
//! reference.

use std::fmt;

use crate::{utf8, IdentifierRule, LexerConfig, NumberRule, PatternSet, PatternSetError};

/// Token kinds of [`default_config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DefaultTokenKind {
    // Punctuation
    Comma,
    Colon,
    Semicolon,
    Dot,
    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,

    // Operators
    Equal,
    Plus,
    Minus,
    ForwardSlash,
    Star,
    LessThan,
    LessThanLessThan,
    GreaterThan,
    GreaterThanGreaterThan,
    ThinArrow,
    Tilde,
    And,
    AndAnd,
    Or,
    OrOr,
    Caret,
    Percentage,
    ExclamationMark,
    EqualEqual,
    NotEqual,
    QuestionMark,

    Identifier,
    Number,
    Whitespace,

    Unknown,
    Eof,
}

impl DefaultTokenKind {
    /// Variant name, as printed in token listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Comma => "Comma",
            Self::Colon => "Colon",
            Self::Semicolon => "Semicolon",
            Self::Dot => "Dot",
            Self::OpenParen => "OpenParen",
            Self::CloseParen => "CloseParen",
            Self::OpenSquare => "OpenSquare",
            Self::CloseSquare => "CloseSquare",
            Self::OpenCurly => "OpenCurly",
            Self::CloseCurly => "CloseCurly",
            Self::Equal => "Equal",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::ForwardSlash => "ForwardSlash",
            Self::Star => "Star",
            Self::LessThan => "LessThan",
            Self::LessThanLessThan => "LessThanLessThan",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanGreaterThan => "GreaterThanGreaterThan",
            Self::ThinArrow => "ThinArrow",
            Self::Tilde => "Tilde",
            Self::And => "And",
            Self::AndAnd => "AndAnd",
            Self::Or => "Or",
            Self::OrOr => "OrOr",
            Self::Caret => "Caret",
            Self::Percentage => "Percentage",
            Self::ExclamationMark => "ExclamationMark",
            Self::EqualEqual => "EqualEqual",
            Self::NotEqual => "NotEqual",
            Self::QuestionMark => "QuestionMark",
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::Whitespace => "Whitespace",
            Self::Unknown => "Unknown",
            Self::Eof => "Eof",
        }
    }
}

impl fmt::Display for DefaultTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// C-like tokens: punctuation, operators (`=` included, so `==` is matched
/// whole), whitespace, ASCII identifiers and decimal numbers.
pub fn default_config() -> Result<LexerConfig<DefaultTokenKind>, PatternSetError> {
    use DefaultTokenKind as K;

    let punctuation = PatternSet::new([
        (K::Comma, ","),
        (K::Colon, ":"),
        (K::Semicolon, ";"),
        (K::Dot, "."),
        (K::OpenParen, "("),
        (K::CloseParen, ")"),
        (K::OpenSquare, "["),
        (K::CloseSquare, "]"),
        (K::OpenCurly, "{"),
        (K::CloseCurly, "}"),
    ])?;

    let operators = PatternSet::new([
        (K::Equal, "="),
        (K::Plus, "+"),
        (K::Minus, "-"),
        (K::ForwardSlash, "/"),
        (K::Star, "*"),
        (K::GreaterThanGreaterThan, ">>"),
        (K::GreaterThan, ">"),
        (K::LessThan, "<"),
        (K::LessThanLessThan, "<<"),
        (K::ThinArrow, "->"),
        (K::Tilde, "~"),
        (K::And, "&"),
        (K::AndAnd, "&&"),
        (K::Or, "|"),
        (K::OrOr, "||"),
        (K::Caret, "^"),
        (K::Percentage, "%"),
        (K::ExclamationMark, "!"),
        (K::EqualEqual, "=="),
        (K::NotEqual, "!="),
        (K::QuestionMark, "?"),
    ])?;

    let whitespace = PatternSet::new([
        (K::Whitespace, " "),
        (K::Whitespace, "\t"),
        (K::Whitespace, "\n"),
        (K::Whitespace, "\r"),
    ])?;

    Ok(LexerConfig::builder(K::Unknown, K::Eof)
        .whitespace(whitespace)
        .punctuation(punctuation)
        .operators(operators)
        .identifier(IdentifierRule::ascii(K::Identifier))
        .number(NumberRule::decimal(K::Number))
        .build())
}

/// Token kinds of [`ansi_config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnsiTokenKind {
    EscapeSequence,
    Colon,
    SemiColon,
    EndCharacter,
    Number,
    Unknown,
    Eof,
}

impl AnsiTokenKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::EscapeSequence => "EscapeSequence",
            Self::Colon => "Colon",
            Self::SemiColon => "SemiColon",
            Self::EndCharacter => "EndCharacter",
            Self::Number => "Number",
            Self::Unknown => "Unknown",
            Self::Eof => "Eof",
        }
    }
}

impl fmt::Display for AnsiTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ANSI SGR sequences: control sequence introducers, parameters,
/// separators and the final `m`.
///
/// The introducer is accepted as the real `ESC [` bytes and in the
/// spellings found in source text and shell scripts: `\x1b[`, `\033[`
/// and `27[`.
pub fn ansi_config() -> Result<LexerConfig<AnsiTokenKind>, PatternSetError> {
    use AnsiTokenKind as K;

    let punctuation = PatternSet::new([
        (K::EscapeSequence, "\x1b["),
        (K::EscapeSequence, "\\x1b["),
        (K::EscapeSequence, "27["),
        (K::EscapeSequence, "\\033["),
        (K::Colon, ":"),
        (K::SemiColon, ";"),
        (K::EndCharacter, "m"),
    ])?;

    Ok(LexerConfig::builder(K::Unknown, K::Eof)
        .punctuation(punctuation)
        .number(NumberRule::integer(K::Number))
        .build())
}

// ─── Unicode identifier hooks ───────────────────────────────────

/// Identifier start for non-ASCII sources: `_`, `$` or any alphabetic
/// character, decoded as UTF-8.
pub fn unicode_identifier_start(input: &[u8]) -> bool {
    utf8::decode(input).is_some_and(|(c, _)| c == '_' || c == '$' || c.is_alphabetic())
}

/// Identifier continuation for non-ASCII sources: `_`, `$` or any
/// alphanumeric character. Malformed sequences end the identifier.
pub fn unicode_identifier_continue(input: &[u8]) -> bool {
    utf8::decode(input).is_some_and(|(c, _)| c == '_' || c == '$' || c.is_alphanumeric())
}

/// [`IdentifierRule`] built from the Unicode hooks.
pub fn unicode_identifier<K>(kind: K) -> IdentifierRule<K> {
    IdentifierRule {
        kind,
        is_start: unicode_identifier_start,
        is_continue: unicode_identifier_continue,
        width: utf8::char_width,
    }
}

#[cfg(test)]
mod tests;
