//! Abstract Syntax Tree (AST) definitions for weakdb.
//!
//! Statements only record what kind of command they are. Column lists,
//! predicates and values are not represented yet.

use serde::{Deserialize, Serialize};

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// 先頭からの距離 `base` だけずらしたスパン
    pub fn offset(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            end: self.end + base,
        }
    }
}

/// Root node: every statement of one command, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ast {
    pub statements: Vec<Statement>,
}

/// 文の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    Select,
    CreateTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
}

impl Statement {
    pub fn new(kind: StatementKind) -> Self {
        Self { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_offset() {
        assert_eq!(Span::new(2, 5).offset(10), Span::new(12, 15));
    }

    #[test]
    fn test_ast_serializes_kinds() {
        let ast = Ast {
            statements: vec![
                Statement::new(StatementKind::Select),
                Statement::new(StatementKind::CreateTable),
            ],
        };
        let json = serde_json::to_string(&ast).unwrap();
        assert_eq!(
            json,
            r#"{"statements":[{"kind":"Select"},{"kind":"CreateTable"}]}"#
        );
    }
}
