//! メインパーサー構造とユーティリティ

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::{match_delimited, Cursor, Location, Token, TokenKind};

use super::{ParseError, ParseResult};

/// weakdbパーサー
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    current: usize,
    /// 各行の先頭のバイト位置（スパン計算用）
    line_starts: Vec<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            tokens,
            current: 0,
            line_starts,
        }
    }

    /// すべての文を解析
    pub fn parse(&mut self) -> ParseResult<Ast> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            // 空の文は読み飛ばす
            if self.match_symbol(";") {
                continue;
            }
            statements.push(self.parse_statement()?);
            self.skip_to_statement_end();
        }

        log::debug!("parsed {} statements", statements.len());
        Ok(Ast { statements })
    }

    /// 先頭のキーワードから文の種類を判定
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.match_keyword("select") {
            return Ok(Statement::new(StatementKind::Select));
        }

        if self.match_keyword("create") {
            self.expect_keyword("table")?;
            return Ok(Statement::new(StatementKind::CreateTable));
        }

        Err(self.unexpected("select or create"))
    }

    // ==================== ユーティリティメソッド ====================

    fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn skip_to_statement_end(&mut self) {
        while let Some(token) = self.current_token() {
            if token.is_symbol(";") {
                break;
            }
            self.advance();
        }
    }

    fn match_keyword(&mut self, keyword: &str) -> bool {
        if self.current_token().is_some_and(|t| t.is_keyword(keyword)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_symbol(&mut self, symbol: &str) -> bool {
        if self.current_token().is_some_and(|t| t.is_symbol(symbol)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.match_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("keyword {}", keyword)))
        }
    }

    /// 予期しないトークン（または入力の終了）エラーを作成
    fn unexpected(&self, expected: &str) -> ParseError {
        match self.current_token() {
            Some(token) => ParserError::UnexpectedToken {
                expected: expected.to_string(),
                found: describe(token),
                location: token.loc,
                span: self.span_of(token),
            },
            None => {
                let location = self
                    .tokens
                    .last()
                    .map(|t| t.loc)
                    .unwrap_or_else(Location::default);
                ParserError::UnexpectedEnd {
                    expected: expected.to_string(),
                    location,
                    span: Span::new(self.source.len(), self.source.len()),
                }
            }
        }
    }

    fn span_of(&self, token: &Token) -> Span {
        let line_start = self.line_starts.get(token.loc.line).copied().unwrap_or(0);
        let start = line_start + token.loc.col;
        let end = match token.kind {
            // 引用符付きの値は二重引用符が畳まれているので、元の字句を読み直す
            TokenKind::String => self.delimited_end(start, token.loc),
            _ => None,
        }
        .unwrap_or(start + token.value.len());
        Span::new(start, end.min(self.source.len()))
    }

    fn delimited_end(&self, start: usize, loc: Location) -> Option<usize> {
        let delimiter = *self.source.as_bytes().get(start)?;
        let cursor = Cursor {
            pointer: start,
            loc,
        };
        match_delimited(self.source, cursor, delimiter).map(|(_, end)| end.pointer)
    }
}

fn describe(token: &Token) -> String {
    let kind = match token.kind {
        TokenKind::Keyword | TokenKind::Boolean | TokenKind::Null => "keyword",
        TokenKind::Symbol => "symbol",
        TokenKind::Numeric => "number",
        TokenKind::String => "string",
        TokenKind::Identifier => "identifier",
    };
    format!("{} {}", kind, token.value)
}
