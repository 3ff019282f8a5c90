//! トークン定義

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cursor::Location;

/// 予約語（順序に意味がある：先にマッチしたものが勝つ）
pub static KEYWORDS: &[&str] = &[
    "select",
    "from",
    "as",
    "table",
    "create",
    "drop",
    "insert",
    "into",
    "values",
    "int",
    "text",
    "boolean",
    "where",
    "and",
    "or",
    "true",
    "false",
    "unique",
    "index",
    "on",
    "primary key",
    "null",
];

/// 記号（前方一致が重なるものは長い方を先に置く）
pub static SYMBOLS: &[&str] = &[
    "<=", "<>", ">=", "!=", "||", "=", "<", ">", "+", ",", "(", ")", ";", "*",
];

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Numeric,
    Symbol,
    Keyword,
    Boolean,
    Null,
    String,
    Identifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Numeric => "Numeric",
            TokenKind::Symbol => "Symbol",
            TokenKind::Keyword => "Keyword",
            TokenKind::Boolean => "Boolean",
            TokenKind::Null => "Null",
            TokenKind::String => "String",
            TokenKind::Identifier => "Identifier",
        };
        f.write_str(name)
    }
}

/// A classified lexeme and the location of its first byte
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub loc: Location,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, loc: Location) -> Self {
        Self {
            value: value.into(),
            kind,
            loc,
        }
    }

    /// キーワード（真偽値・NULLを含む）かどうか
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(
            self.kind,
            TokenKind::Keyword | TokenKind::Boolean | TokenKind::Null
        ) && self.value == keyword
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.value == symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.value, self.loc)
    }
}

/// Kind reported for a matched keyword.
pub(crate) fn keyword_kind(keyword: &str) -> TokenKind {
    match keyword {
        "true" | "false" => TokenKind::Boolean,
        "null" => TokenKind::Null,
        _ => TokenKind::Keyword,
    }
}
