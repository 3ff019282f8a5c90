//! Candidate matchers.
//!
//! Each matcher looks at the input starting at a copy of the driver's cursor and
//! either commits to a match, returning the token (if any) and the cursor just past
//! the lexeme, or reports no match by returning `None`. Matchers never report errors;
//! the driver decides what a position nobody accepts means.

use super::cursor::Cursor;
use super::token::{keyword_kind, Token, TokenKind, KEYWORDS, SYMBOLS};

/// 成功時は（トークン、新しいカーソル）。空白の消費ではトークンが `None` になる
pub type MatchResult = Option<(Option<Token>, Cursor)>;

/// A stateless recognizer for one token category
pub type Matcher = fn(&str, Cursor) -> MatchResult;

/// Matchers in priority order. The driver restarts from the top after every success.
pub(crate) const MATCHERS: [(&str, Matcher); 5] = [
    ("keyword", match_keyword),
    ("symbol", match_symbol),
    ("numeric", match_numeric),
    ("string", match_string),
    ("identifier", match_identifier),
];

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'$' || byte == b'_'
}

/// Match one of [`KEYWORDS`], ignoring ASCII case. The first keyword in list order wins.
pub fn match_keyword(source: &str, ic: Cursor) -> MatchResult {
    let rest = &source.as_bytes()[ic.pointer..];

    let keyword = KEYWORDS.iter().copied().find(|keyword| {
        let len = keyword.len();
        rest.len() >= len && rest[..len].eq_ignore_ascii_case(keyword.as_bytes())
    })?;

    let mut cur = ic;
    cur.advance_by(keyword.len());
    Some((Some(Token::new(keyword, keyword_kind(keyword), ic.loc)), cur))
}

/// Consume one whitespace byte, or match one of [`SYMBOLS`].
pub fn match_symbol(source: &str, ic: Cursor) -> MatchResult {
    let byte = ic.peek(source)?;

    if matches!(byte, b'\n' | b'\t' | b' ') {
        let mut cur = ic;
        cur.advance(byte);
        return Some((None, cur));
    }

    let rest = &source.as_bytes()[ic.pointer..];
    let symbol = SYMBOLS
        .iter()
        .copied()
        .find(|symbol| rest.starts_with(symbol.as_bytes()))?;

    let mut cur = ic;
    cur.advance_by(symbol.len());
    Some((Some(Token::new(symbol, TokenKind::Symbol, ic.loc)), cur))
}

/// Match a maximal run of ASCII digits. A `.` or exponent marker ends the run.
pub fn match_numeric(source: &str, ic: Cursor) -> MatchResult {
    let mut cur = ic;
    while cur.peek(source).is_some_and(|b| b.is_ascii_digit()) {
        cur.advance_by(1);
    }

    if cur.pointer == ic.pointer {
        return None;
    }

    let value = &source[ic.pointer..cur.pointer];
    Some((Some(Token::new(value, TokenKind::Numeric, ic.loc)), cur))
}

/// Match text enclosed in `delimiter`, where a doubled delimiter stands for itself.
///
/// Returns `None` when the run is never closed.
pub fn match_delimited(source: &str, ic: Cursor, delimiter: u8) -> MatchResult {
    if ic.peek(source) != Some(delimiter) {
        return None;
    }

    let mut cur = ic;
    cur.advance(delimiter);

    let mut value = String::new();
    let mut run_start = cur.pointer;

    while let Some(byte) = cur.peek(source) {
        if byte != delimiter {
            cur.advance(byte);
            continue;
        }

        value.push_str(&source[run_start..cur.pointer]);
        cur.advance(byte);

        if cur.peek(source) == Some(delimiter) {
            // 二重の区切り文字は区切り文字そのもの
            value.push(char::from(delimiter));
            cur.advance(delimiter);
            run_start = cur.pointer;
            continue;
        }

        return Some((Some(Token::new(value, TokenKind::String, ic.loc)), cur));
    }

    None
}

/// `'`-delimited string literal
pub fn match_string(source: &str, ic: Cursor) -> MatchResult {
    match_delimited(source, ic, b'\'')
}

/// Quoted (`"`) or bare identifier. Bare identifiers are folded to lower case.
pub fn match_identifier(source: &str, ic: Cursor) -> MatchResult {
    if let Some(quoted) = match_delimited(source, ic, b'"') {
        return Some(quoted);
    }

    if !ic.peek(source).is_some_and(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let mut cur = ic;
    while cur.peek(source).is_some_and(is_identifier_byte) {
        cur.advance_by(1);
    }

    let value = source[ic.pointer..cur.pointer].to_ascii_lowercase();
    Some((Some(Token::new(value, TokenKind::Identifier, ic.loc)), cur))
}
