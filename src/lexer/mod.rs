//! Lexical analysis module for weakdb.
//!
//! This module turns one SQL-like command into an ordered list of [`Token`]s.
//! Five independent matchers (keyword, symbol, numeric, string, identifier) are
//! tried in a fixed priority order at the current [`Cursor`]; the first one that
//! succeeds wins, its cursor is committed and the scan restarts from the top.
//! Whitespace is consumed by the symbol matcher and never produces a token.

mod cursor;
mod matchers;
mod token;

pub use cursor::{Cursor, Location};
pub use matchers::{
    match_delimited, match_identifier, match_keyword, match_numeric, match_string, match_symbol,
    MatchResult, Matcher,
};
pub use token::{Token, TokenKind, KEYWORDS, SYMBOLS};

use crate::ast::Span;
use crate::error::LexerError;
use matchers::MATCHERS;

/// Tokenize a whole command.
///
/// Fails on the first position no matcher accepts. A quote that is never closed is
/// reported as [`LexerError::UnterminatedLiteral`] at the opening quote.
pub fn lex(source: &str) -> Result<Vec<Token>, LexerError> {
    let mut tokens = Vec::new();
    let mut cursor = Cursor::new();

    'scan: while !cursor.is_at_end(source) {
        for (name, matcher) in MATCHERS {
            let Some((token, next)) = matcher(source, cursor) else {
                continue;
            };

            // 進まない成功はドライバーを無限ループさせる
            if next.pointer <= cursor.pointer {
                log::warn!("{} matcher succeeded without consuming input at {}", name, cursor.loc);
                continue;
            }

            cursor = next;
            if let Some(token) = token {
                log::trace!("{} matcher produced {}", name, token);
                tokens.push(token);
            }
            continue 'scan;
        }

        return Err(unmatched(source, cursor));
    }

    log::debug!("lexed {} tokens from {} bytes", tokens.len(), source.len());
    Ok(tokens)
}

fn unmatched(source: &str, cursor: Cursor) -> LexerError {
    let found = source[cursor.pointer..].chars().next().unwrap_or('\0');

    match found {
        '\'' | '"' => LexerError::UnterminatedLiteral {
            delimiter: found,
            location: cursor.loc,
            span: Span::new(cursor.pointer, source.len()),
        },
        _ => LexerError::UnrecognizedByte {
            found,
            location: cursor.loc,
            span: Span::new(cursor.pointer, cursor.pointer + found.len_utf8()),
        },
    }
}

/// デバッグ用：トークン列を1行1トークンで出力
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `lex --json` の出力形式
pub fn tokens_to_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tok(value: &str, kind: TokenKind, line: usize, col: usize) -> Token {
        Token::new(value, kind, Location::new(line, col))
    }

    #[test]
    fn test_select_identifier() {
        assert_eq!(
            lex("select a").unwrap(),
            vec![
                tok("select", TokenKind::Keyword, 0, 0),
                tok("a", TokenKind::Identifier, 0, 7),
            ]
        );
    }

    #[test]
    fn test_select_numeric() {
        assert_eq!(
            lex("select 1").unwrap(),
            vec![
                tok("select", TokenKind::Keyword, 0, 0),
                tok("1", TokenKind::Numeric, 0, 7),
            ]
        );
    }

    #[test]
    fn test_string_concat() {
        assert_eq!(
            lex("select 'foo' || 'bar';").unwrap(),
            vec![
                tok("select", TokenKind::Keyword, 0, 0),
                tok("foo", TokenKind::String, 0, 7),
                tok("||", TokenKind::Symbol, 0, 13),
                tok("bar", TokenKind::String, 0, 16),
                tok(";", TokenKind::Symbol, 0, 21),
            ]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex(" \t\n ").unwrap().is_empty());
    }

    #[test]
    fn test_newline_moves_location() {
        let tokens = lex("select\n  a").unwrap();
        assert_eq!(tokens[1].loc, Location::new(1, 2));
    }

    #[test]
    fn test_decimal_leaves_dot_unrecognized() {
        let err = lex("123.145").unwrap_err();
        assert!(matches!(
            err,
            LexerError::UnrecognizedByte { found: '.', location, .. } if location == Location::new(0, 3)
        ));
    }

    #[test]
    fn test_unterminated_string_points_at_quote() {
        let err = lex("select 'foo").unwrap_err();
        match err {
            LexerError::UnterminatedLiteral {
                delimiter,
                location,
                span,
            } => {
                assert_eq!(delimiter, '\'');
                assert_eq!(location, Location::new(0, 7));
                assert_eq!(span, Span::new(7, 11));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_quoted_identifier() {
        let err = lex("select \"foo").unwrap_err();
        assert!(matches!(
            err,
            LexerError::UnterminatedLiteral { delimiter: '"', .. }
        ));
    }

    #[test]
    fn test_non_ascii_is_unrecognized() {
        let err = lex("select é").unwrap_err();
        match err {
            LexerError::UnrecognizedByte { found, span, .. } => {
                assert_eq!(found, 'é');
                assert_eq!(span, Span::new(7, 9));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_tokens_to_json() {
        let tokens = lex("select 'It''s'").unwrap();
        let json: serde_json::Value = serde_json::from_str(&tokens_to_json(&tokens).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {"value": "select", "kind": "Keyword", "loc": {"line": 0, "col": 0}},
                {"value": "It's", "kind": "String", "loc": {"line": 0, "col": 7}}
            ])
        );

        let back: Vec<Token> = serde_json::from_value(json).unwrap();
        assert_eq!(back, tokens);
    }

    #[test]
    fn test_format_tokens() {
        let tokens = lex("select 1").unwrap();
        assert_eq!(
            format_tokens(&tokens),
            "Keyword(\"select\")@0:0\nNumeric(\"1\")@0:7"
        );
    }
}
