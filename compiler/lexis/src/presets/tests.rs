use super::*;
use crate::{Categories, Lexer};
use pretty_assertions::assert_eq;

fn listing<K: Copy + Eq + fmt::Debug + fmt::Display>(
    config: &LexerConfig<K>,
    source: &[u8],
) -> Vec<String> {
    Lexer::new(config)
        .lex(source)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_kinds(source: &str) -> Vec<DefaultTokenKind> {
    let config = default_config().unwrap_or_else(|e| panic!("default config: {e}"));
    Lexer::new(&config).lex(source).iter().map(|t| t.kind).collect()
}

// === ANSI escape strings ===

#[test]
fn ansi_textual_escape_sequence() {
    let config = ansi_config().unwrap_or_else(|e| panic!("ansi config: {e}"));
    assert_eq!(
        listing(&config, br"\x1b[1;31m"),
        vec![
            r"EscapeSequence > '\x1b[', (0, 0)",
            "Number > '1', (0, 5)",
            "SemiColon > ';', (0, 6)",
            "Number > '31', (0, 7)",
            "EndCharacter > 'm', (0, 9)",
            "Eof > '', (0, 10)",
        ]
    );
}

#[test]
fn ansi_raw_escape_byte() {
    use AnsiTokenKind as K;
    let config = ansi_config().unwrap_or_else(|e| panic!("ansi config: {e}"));
    let tokens = Lexer::new(&config).lex("\x1b[1;31m");
    let got: Vec<(K, Option<&str>)> = tokens.iter().map(|t| (t.kind, t.text_str())).collect();
    let expected = vec![
        (K::EscapeSequence, Some("\x1b[")),
        (K::Number, Some("1")),
        (K::SemiColon, Some(";")),
        (K::Number, Some("31")),
        (K::EndCharacter, Some("m")),
        (K::Eof, Some("")),
    ];
    assert_eq!(got, expected);
}

#[test]
fn ansi_alternative_introducers() {
    use AnsiTokenKind as K;
    let config = ansi_config().unwrap_or_else(|e| panic!("ansi config: {e}"));
    for source in [r"\033[0m", "27[0m"] {
        let kinds: Vec<K> = Lexer::new(&config).lex(source).iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![K::EscapeSequence, K::Number, K::EndCharacter, K::Eof],
            "{source}"
        );
    }
}

#[test]
fn ansi_numbers_stop_at_dots() {
    use AnsiTokenKind as K;
    let config = ansi_config().unwrap_or_else(|e| panic!("ansi config: {e}"));
    let kinds: Vec<K> = Lexer::new(&config).lex("1.5").iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![K::Number, K::Unknown, K::Number, K::Eof]);
}

#[test]
fn ansi_config_enables_only_punctuation_and_numbers() {
    let config = ansi_config().unwrap_or_else(|e| panic!("ansi config: {e}"));
    assert_eq!(
        config.categories(),
        Categories::PUNCTUATION | Categories::NUMBER
    );
}

// === Default configuration ===

#[test]
fn default_config_lexes_a_function() {
    let config = default_config().unwrap_or_else(|e| panic!("default config: {e}"));
    let source = "int main() {\n    int c = b * a + 4;\n}";
    let listing: Vec<String> = listing(&config, source.as_bytes())
        .into_iter()
        .filter(|line| !line.starts_with("Whitespace > ' '"))
        .collect();
    assert_eq!(
        listing,
        vec![
            "Identifier > 'int', (0, 0)",
            "Identifier > 'main', (0, 4)",
            "OpenParen > '(', (0, 8)",
            "CloseParen > ')', (0, 9)",
            "OpenCurly > '{', (0, 11)",
            r"Whitespace > '\n', (1, 0)",
            "Identifier > 'int', (1, 5)",
            "Identifier > 'c', (1, 9)",
            "Equal > '=', (1, 11)",
            "Identifier > 'b', (1, 13)",
            "Star > '*', (1, 15)",
            "Identifier > 'a', (1, 17)",
            "Plus > '+', (1, 19)",
            "Number > '4', (1, 21)",
            "Semicolon > ';', (1, 22)",
            r"Whitespace > '\n', (2, 0)",
            "CloseCurly > '}', (2, 1)",
            "Eof > '', (2, 2)",
        ]
    );
}

#[test]
fn default_config_prefers_compound_operators() {
    use DefaultTokenKind as K;
    assert_eq!(
        default_kinds("a==b!=c->d"),
        vec![
            K::Identifier,
            K::EqualEqual,
            K::Identifier,
            K::NotEqual,
            K::Identifier,
            K::ThinArrow,
            K::Identifier,
            K::Eof,
        ]
    );
    assert_eq!(
        default_kinds("<<<&&&||"),
        vec![
            K::LessThanLessThan,
            K::LessThan,
            K::AndAnd,
            K::And,
            K::OrOr,
            K::Eof,
        ]
    );
}

#[test]
fn default_config_punctuation_spellings() {
    use DefaultTokenKind as K;
    assert_eq!(
        default_kinds(",:;.[]"),
        vec![
            K::Comma,
            K::Colon,
            K::Semicolon,
            K::Dot,
            K::OpenSquare,
            K::CloseSquare,
            K::Eof,
        ]
    );
}

#[test]
fn default_config_numbers_and_identifiers() {
    use DefaultTokenKind as K;
    // A leading dot is punctuation; dots inside a number belong to it.
    assert_eq!(
        default_kinds("x1 3.5 .5 $y_2"),
        vec![
            K::Identifier,
            K::Whitespace,
            K::Number,
            K::Whitespace,
            K::Dot,
            K::Number,
            K::Whitespace,
            K::Identifier,
            K::Eof,
        ]
    );
}

#[test]
fn default_config_flags_unknown_bytes() {
    use DefaultTokenKind as K;
    assert_eq!(
        default_kinds("a @ \"b\""),
        vec![
            K::Identifier,
            K::Whitespace,
            K::Unknown,
            K::Whitespace,
            K::Unknown,
            K::Identifier,
            K::Unknown,
            K::Eof,
        ]
    );
}

#[test]
fn kind_names_match_variants() {
    assert_eq!(DefaultTokenKind::GreaterThan.to_string(), "GreaterThan");
    assert_eq!(
        DefaultTokenKind::GreaterThanGreaterThan.to_string(),
        "GreaterThanGreaterThan"
    );
    assert_eq!(DefaultTokenKind::CloseSquare.name(), "CloseSquare");
    assert_eq!(AnsiTokenKind::SemiColon.to_string(), "SemiColon");
}

// === Unicode identifiers ===

#[test]
fn unicode_identifiers_span_multibyte_characters() {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum K {
        Ident,
        Space,
        Unknown,
        Eof,
    }
    let spaces =
        PatternSet::new([(K::Space, " ")]).unwrap_or_else(|e| panic!("space set: {e}"));
    let config = LexerConfig::builder(K::Unknown, K::Eof)
        .whitespace(spaces)
        .identifier(unicode_identifier(K::Ident))
        .build();
    let tokens = Lexer::new(&config).lex("größe ñ1 €");
    let got: Vec<(K, Option<&str>)> = tokens.iter().map(|t| (t.kind, t.text_str())).collect();
    assert_eq!(
        got,
        vec![
            (K::Ident, Some("größe")),
            (K::Space, Some(" ")),
            (K::Ident, Some("ñ1")),
            (K::Space, Some(" ")),
            (K::Unknown, None),
            (K::Unknown, None),
            (K::Unknown, None),
            (K::Eof, Some("")),
        ]
    );
}

#[test]
fn stray_continuation_bytes_end_unicode_identifiers() {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum K {
        Ident,
        Unknown,
        Eof,
    }
    let config = LexerConfig::builder(K::Unknown, K::Eof)
        .identifier(unicode_identifier(K::Ident))
        .build();
    let tokens = Lexer::new(&config).lex(&b"a\x80\xBF\x80b"[..]);
    let got: Vec<(K, Vec<u8>)> = tokens.iter().map(|t| (t.kind, t.text.to_vec())).collect();
    let expected = vec![
        (K::Ident, b"a".to_vec()),
        (K::Unknown, vec![0x80]),
        (K::Unknown, vec![0xBF]),
        (K::Unknown, vec![0x80]),
        (K::Ident, b"b".to_vec()),
        (K::Eof, Vec::new()),
    ];
    assert_eq!(got, expected);
    assert!(tokens
        .iter()
        .filter(|t| t.kind == K::Ident)
        .all(|t| t.text_str().is_some()));
}

#[test]
fn truncated_sequence_ends_unicode_identifier() {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum K {
        Ident,
        Unknown,
        Eof,
    }
    let config = LexerConfig::builder(K::Unknown, K::Eof)
        .identifier(unicode_identifier(K::Ident))
        .build();
    // "é" is C3 A9; a lone C3 before "x" is malformed.
    let kinds: Vec<K> = Lexer::new(&config)
        .lex(&b"ab\xC3x"[..])
        .iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds, vec![K::Ident, K::Unknown, K::Ident, K::Eof]);
}

#[test]
fn unicode_predicates() {
    assert!(unicode_identifier_start("é".as_bytes()));
    assert!(unicode_identifier_start(b"_"));
    assert!(!unicode_identifier_start(b"1"));
    assert!(!unicode_identifier_start(&[0xFF]));
    assert!(unicode_identifier_continue(b"1"));
    assert!(unicode_identifier_continue("é".as_bytes()));
    assert!(!unicode_identifier_continue(&[0xA9]));
    assert!(!unicode_identifier_continue(b"-"));
}
