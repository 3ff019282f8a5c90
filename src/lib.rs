//! weakdb Library
//!
//! This library provides the lexical front end of the weakdb query processor:
//! a hand-written SQL-like lexer, a statement classifier and the per-line
//! session used by the command-line shell.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod session;

// Re-export commonly used types
pub use ast::{Ast, Statement, StatementKind};
pub use error::{ErrorCollector, LexerError, ParserError, WeakError, WeakResult};
pub use lexer::{lex, Location, Token, TokenKind};
pub use parser::parse;
pub use session::Session;
