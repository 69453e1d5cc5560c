use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Word,
    Eof,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Word => "Word",
            Kind::Eof => "Eof",
        })
    }
}

fn token(kind: Kind, text: &[u8], start: usize, line: usize, col: usize) -> Token<'_, Kind> {
    Token {
        kind,
        text,
        start,
        line,
        col,
    }
}

#[test]
fn span_accessors() {
    let tok = token(Kind::Word, b"hello", 4, 1, 2);
    assert_eq!(tok.len(), 5);
    assert!(!tok.is_empty());
    assert_eq!(tok.end(), 9);
    assert_eq!(tok.position(), Position { line: 1, col: 2 });
}

#[test]
fn end_of_input_is_empty() {
    let tok = token(Kind::Eof, b"", 10, 0, 10);
    assert!(tok.is_empty());
    assert_eq!(tok.end(), 10);
}

#[test]
fn text_str_requires_utf8() {
    assert_eq!(token(Kind::Word, b"abc", 0, 0, 0).text_str(), Some("abc"));
    assert_eq!(token(Kind::Word, &[0xF0, 0x9F], 0, 0, 0).text_str(), None);
}

#[test]
fn display_matches_listing_format() {
    assert_eq!(
        token(Kind::Word, b"main", 0, 3, 8).to_string(),
        "Word > 'main', (3, 8)"
    );
    assert_eq!(token(Kind::Eof, b"", 9, 0, 9).to_string(), "Eof > '', (0, 9)");
}

#[test]
fn display_escapes_control_bytes() {
    assert_eq!(
        token(Kind::Word, b"\x1b[", 0, 0, 0).to_string(),
        "Word > '\\x1b[', (0, 0)"
    );
    assert_eq!(
        token(Kind::Word, b"\n", 0, 1, 0).to_string(),
        "Word > '\\n', (1, 0)"
    );
    assert_eq!(
        token(Kind::Word, &[b'\t', 0xFF], 0, 0, 0).to_string(),
        "Word > '\\t\\xff', (0, 0)"
    );
}

#[test]
fn display_keeps_printable_ascii_verbatim() {
    assert_eq!(
        token(Kind::Word, br"\x1b[", 0, 0, 0).to_string(),
        r"Word > '\x1b[', (0, 0)"
    );
    assert_eq!(
        token(Kind::Word, b"'a b'", 0, 0, 0).to_string(),
        "Word > ''a b'', (0, 0)"
    );
}
