//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、weakdb全体で使用される統一的なエラー型と
//! エラー報告システムを提供します。

use crate::ast::Span;
use crate::lexer::Location;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// weakdbの統一エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeakError {
    /// レキサーエラー
    #[error("lexical error: {0}")]
    Lexer(#[from] LexerError),

    /// パーサーエラー
    #[error("syntax error: {0}")]
    Parser(#[from] ParserError),

    /// ファイルI/Oエラー
    #[error("i/o error: {0}")]
    Io(String),

    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("unrecognized character {found:?} at {location}")]
    UnrecognizedByte {
        found: char,
        location: Location,
        span: Span,
    },

    #[error("unterminated {delimiter}-delimited literal starting at {location}")]
    UnterminatedLiteral {
        delimiter: char,
        location: Location,
        span: Span,
    },
}

/// パーサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("expected {expected}, found {found} at {location}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: Location,
        span: Span,
    },

    #[error("expected {expected} after {location}, found end of input")]
    UnexpectedEnd {
        expected: String,
        location: Location,
        span: Span,
    },
}

impl LexerError {
    pub fn location(&self) -> Location {
        match self {
            LexerError::UnrecognizedByte { location, .. }
            | LexerError::UnterminatedLiteral { location, .. } => *location,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexerError::UnrecognizedByte { span, .. }
            | LexerError::UnterminatedLiteral { span, .. } => *span,
        }
    }

    fn span_mut(&mut self) -> &mut Span {
        match self {
            LexerError::UnrecognizedByte { span, .. }
            | LexerError::UnterminatedLiteral { span, .. } => span,
        }
    }
}

impl ParserError {
    pub fn location(&self) -> Location {
        match self {
            ParserError::UnexpectedToken { location, .. }
            | ParserError::UnexpectedEnd { location, .. } => *location,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. } | ParserError::UnexpectedEnd { span, .. } => {
                *span
            }
        }
    }

    fn span_mut(&mut self) -> &mut Span {
        match self {
            ParserError::UnexpectedToken { span, .. } | ParserError::UnexpectedEnd { span, .. } => {
                span
            }
        }
    }
}

impl WeakError {
    /// エラー位置のバイト範囲（位置を持たないエラーは `None`）
    pub fn span(&self) -> Option<Span> {
        match self {
            WeakError::Lexer(e) => Some(e.span()),
            WeakError::Parser(e) => Some(e.span()),
            WeakError::Io(_) | WeakError::Other(_) => None,
        }
    }

    /// Shift the byte span by `base`, for errors found in one line of a larger text.
    pub fn offset(mut self, base: usize) -> Self {
        let span = match &mut self {
            WeakError::Lexer(e) => Some(e.span_mut()),
            WeakError::Parser(e) => Some(e.span_mut()),
            WeakError::Io(_) | WeakError::Other(_) => None,
        };
        if let Some(span) = span {
            *span = span.offset(base);
        }
        self
    }
}

impl From<std::io::Error> for WeakError {
    fn from(e: std::io::Error) -> Self {
        WeakError::Io(e.to_string())
    }
}

/// エラー情報とソースコードの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: WeakError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: WeakError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            WeakError::Lexer(e) => match e {
                LexerError::UnrecognizedByte { found, span, .. } => (
                    format!("unrecognized character {:?}", found),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("no token starts with this character")],
                ),
                LexerError::UnterminatedLiteral {
                    delimiter, span, ..
                } => (
                    "unterminated literal".to_string(),
                    vec![Label::primary(self.file_id, span.start..span.start + 1)
                        .with_message(format!("this {} is never closed", delimiter))],
                ),
            },
            WeakError::Parser(e) => match e {
                ParserError::UnexpectedToken {
                    expected,
                    found,
                    span,
                    ..
                } => (
                    format!("expected {}, found {}", expected, found),
                    vec![Label::primary(self.file_id, span.start..span.end)],
                ),
                ParserError::UnexpectedEnd { expected, span, .. } => (
                    format!("unexpected end of input: expected {}", expected),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("statement ends here")],
                ),
            },
            WeakError::Io(message) => (format!("i/o error: {}", message), vec![]),
            WeakError::Other(message) => (message.clone(), vec![]),
        };

        Diagnostic::error()
            .with_message(message)
            .with_labels(labels)
    }
}

/// 複数のエラーを蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: WeakError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    /// エラーがあるかどうか
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// エラーの数
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// すべてのエラーを取得
    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }
}

/// Result型のエイリアス
pub type WeakResult<T> = Result<T, WeakError>;
