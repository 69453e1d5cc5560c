//! The scan loop.
//!
//! Each step looks at the remaining input and tries the configured
//! categories in a fixed order; the first one that claims the current
//! position produces the whole token:
//!
//! 1. newline bookkeeping (not a category: updates the line before matching)
//! 2. whitespace, 3. punctuation, 4. operators (longest literal match)
//! 5. identifier (start predicate, then greedy continuation)
//! 6. number (digit predicate, then run scanner)
//! 7. one byte of the unknown kind
//!
//! Every step consumes at least one byte, so a scan over `n` bytes yields
//! at most `n` tokens before the final end-of-input token.

use std::fmt;
use std::iter::FusedIterator;

use lexis_switch::PatternSet;

use crate::{Cursor, LexerConfig, Token};

/// Tokenizer bound to one configuration.
///
/// Cheap to copy; holds no scan state. Each call to [`tokens`](Self::tokens)
/// or [`lex`](Self::lex) starts a fresh [`Cursor`].
#[derive(Debug)]
pub struct Lexer<'cfg, K> {
    config: &'cfg LexerConfig<K>,
}

impl<K> Clone for Lexer<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Lexer<'_, K> {}

impl<'cfg, K: Copy + Eq + fmt::Debug> Lexer<'cfg, K> {
    pub fn new(config: &'cfg LexerConfig<K>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'cfg LexerConfig<K> {
        self.config
    }

    /// Lazily tokenize `source`.
    pub fn tokens<'src, S>(&self, source: &'src S) -> TokenStream<'cfg, 'src, K>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        TokenStream {
            config: self.config,
            source: source.as_ref(),
            cursor: Cursor::new(),
            finished: false,
        }
    }

    /// Tokenize all of `source`. The last token is always end-of-input.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.as_ref().len()))]
    pub fn lex<'src, S>(&self, source: &'src S) -> Vec<Token<'src, K>>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let tokens: Vec<_> = self.tokens(source).collect();
        tracing::debug!(count = tokens.len(), "tokenized");
        tokens
    }
}

/// Iterator over the tokens of one source buffer.
///
/// Yields exactly one end-of-input token last, then `None` forever.
#[derive(Clone, Debug)]
pub struct TokenStream<'cfg, 'src, K> {
    config: &'cfg LexerConfig<K>,
    source: &'src [u8],
    cursor: Cursor,
    finished: bool,
}

impl<'src, K: Copy + Eq + fmt::Debug> TokenStream<'_, 'src, K> {
    /// Current scan position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Unscanned input.
    pub fn remaining(&self) -> &'src [u8] {
        &self.source[self.cursor.offset()..]
    }

    fn next_token(&mut self) -> Token<'src, K> {
        let rest = self.remaining();
        if rest.first() == Some(&b'\n') {
            self.cursor.enter_line();
        }

        let (kind, len) = self.classify(rest);
        let token = Token {
            kind,
            text: &rest[..len],
            start: self.cursor.offset(),
            line: self.cursor.line(),
            col: self.cursor.col(),
        };
        tracing::trace!(
            kind = ?token.kind,
            start = token.start,
            len,
            "token"
        );
        self.cursor.bump(len);
        token
    }

    /// Pick the category claiming the start of `rest` (non-empty) and the
    /// number of bytes it consumes (at least one, at most `rest.len()`).
    fn classify(&self, rest: &[u8]) -> (K, usize) {
        let config = self.config;

        for set in [&config.whitespace, &config.punctuation, &config.operators] {
            if let Some(found) = set.as_ref().and_then(|set| literal(set, rest)) {
                return found;
            }
        }

        if let Some(rule) = &config.identifier {
            if (rule.is_start)(rest) {
                let step = |at: usize| (rule.width)(&rest[at..]).clamp(1, rest.len() - at);
                let mut len = step(0);
                while len < rest.len() && (rule.is_continue)(&rest[len..]) {
                    len += step(len);
                }
                return (rule.kind, len);
            }
        }

        if let Some(rule) = &config.number {
            if (rule.is_digit)(rest) {
                let len = (rule.scan)(rest).min(rest.len());
                if len > 0 {
                    return (rule.kind, len);
                }
            }
        }

        (config.unknown, 1)
    }
}

fn literal<K: Copy + Eq + fmt::Debug>(set: &PatternSet<K>, rest: &[u8]) -> Option<(K, usize)> {
    set.find(rest).map(|id| (set.tag(id), set.lexeme(id).len()))
}

impl<'src, K: Copy + Eq + fmt::Debug> Iterator for TokenStream<'_, 'src, K> {
    type Item = Token<'src, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.cursor.offset() < self.source.len() {
            return Some(self.next_token());
        }
        self.finished = true;
        Some(Token {
            kind: self.config.eof,
            text: &self.source[self.source.len()..],
            start: self.cursor.offset(),
            line: self.cursor.line(),
            col: self.cursor.col(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self.source.len() - self.cursor.offset();
        (usize::from(remaining > 0) + 1, Some(remaining + 1))
    }
}

impl<K: Copy + Eq + fmt::Debug> FusedIterator for TokenStream<'_, '_, K> {}
