//! パーサーモジュール
//!
//! このモジュールはトークン列を [`Ast`](crate::ast::Ast) に変換します。
//! 現時点では文を `;` で区切り、先頭のキーワードで種類を判定するだけです。
//!
//! ```text
//! select a from t;      -> Select
//! create table u (...)  -> CreateTable
//! ```

mod parser_impl;

pub use parser_impl::Parser;

use crate::ast::Ast;
use crate::error::{ParserError, WeakResult};
use crate::lexer;

pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;

/// Lex and classify one command.
pub fn parse(source: &str) -> WeakResult<Ast> {
    let tokens = lexer::lex(source)?;
    let mut parser = Parser::new(source, tokens);
    Ok(parser.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Span, StatementKind};
    use crate::error::{LexerError, WeakError};
    use crate::lexer::Location;

    fn kinds(source: &str) -> Vec<StatementKind> {
        parse(source)
            .unwrap()
            .statements
            .into_iter()
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn test_single_select() {
        assert_eq!(kinds("select a from t;"), vec![StatementKind::Select]);
    }

    #[test]
    fn test_statement_without_semicolon() {
        assert_eq!(kinds("SELECT 1"), vec![StatementKind::Select]);
    }

    #[test]
    fn test_create_table() {
        assert_eq!(
            kinds("CREATE TABLE u (id INT, name TEXT)"),
            vec![StatementKind::CreateTable]
        );
    }

    #[test]
    fn test_multiple_statements() {
        assert_eq!(
            kinds("create table t (a int); select a from t;;"),
            vec![StatementKind::CreateTable, StatementKind::Select]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(kinds("").is_empty());
        assert!(kinds(" ; ;").is_empty());
    }

    #[test]
    fn test_unsupported_statement() {
        let err = parse("insert into t values (1)").unwrap_err();
        match err {
            WeakError::Parser(ParserError::UnexpectedToken {
                found,
                location,
                span,
                ..
            }) => {
                assert_eq!(found, "keyword insert");
                assert_eq!(location, Location::new(0, 0));
                assert_eq!(span, Span::new(0, 6));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_without_table() {
        let err = parse("create index i on t").unwrap_err();
        assert!(matches!(
            err,
            WeakError::Parser(ParserError::UnexpectedToken { ref expected, .. }) if expected == "keyword table"
        ));
    }

    #[test]
    fn test_create_at_end_of_input() {
        let err = parse("select 1; create").unwrap_err();
        match err {
            WeakError::Parser(ParserError::UnexpectedEnd { location, span, .. }) => {
                assert_eq!(location, Location::new(0, 10));
                assert_eq!(span, Span::new(16, 16));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lex_errors_propagate() {
        let err = parse("select 'foo").unwrap_err();
        assert!(matches!(
            err,
            WeakError::Lexer(LexerError::UnterminatedLiteral { .. })
        ));
    }

    #[test]
    fn test_error_span_covers_doubled_quotes() {
        let err = parse("'a''b' x").unwrap_err();
        assert_eq!(err.span(), Some(Span::new(0, 6)));

        let err = parse("select 1; \"x\"\"y\" z").unwrap_err();
        assert_eq!(err.span(), Some(Span::new(10, 16)));
    }

    #[test]
    fn test_error_span_on_second_line() {
        let err = parse("select 1;\n  drop t").unwrap_err();
        assert_eq!(err.span(), Some(Span::new(12, 16)));
    }
}
