//! Per-line command processing shared by the REPL and the `check` subcommand.

use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::{self, termcolor::WriteColor};
use std::fs;
use std::path::Path;

use crate::ast::Ast;
use crate::error::{ErrorCollector, WeakResult};
use crate::lexer::{self, Token};
use crate::parser::Parser;

/// Result of processing one command
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub tokens: Vec<Token>,
    pub ast: Ast,
}

/// 対話セッションの状態
#[derive(Debug, Default)]
pub struct Session {
    commands: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1行分のコマンドを字句解析・構文解析する
    pub fn process_line(&mut self, line: &str) -> WeakResult<Outcome> {
        self.commands += 1;
        let line = strip_line_ending(line);
        log::debug!("command #{}: {:?}", self.commands, line);

        let tokens = lexer::lex(line)?;
        let ast = Parser::new(line, tokens.clone()).parse()?;
        Ok(Outcome { tokens, ast })
    }

    /// Number of commands processed so far, failed ones included.
    pub fn commands(&self) -> usize {
        self.commands
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Outcome of checking a multi-line command file
#[derive(Debug)]
pub struct CheckSummary {
    pub name: String,
    pub source: String,
    pub asts: Vec<Ast>,
    pub errors: ErrorCollector,
}

impl CheckSummary {
    /// Number of non-blank, non-comment lines that were checked.
    pub fn checked(&self) -> usize {
        self.asts.len() + self.errors.error_count()
    }

    /// `check --dump-ast` の出力形式
    pub fn asts_to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.asts)
    }

    /// Render every collected error as a diagnostic.
    pub fn emit(&self, writer: &mut dyn WriteColor) -> Result<(), codespan_reporting::files::Error> {
        let mut files = SimpleFiles::new();
        let file_id = files.add(self.name.clone(), self.source.clone());
        let config = term::Config::default();

        for error in self.errors.errors() {
            let mut diagnostic = error.to_diagnostic();
            for label in &mut diagnostic.labels {
                label.file_id = file_id;
            }
            term::emit(writer, &config, &files, &diagnostic)?;
        }
        Ok(())
    }
}

/// Check every line of `source` as one command.
///
/// Blank lines and lines starting with `--` are skipped. Error spans are rebased so
/// they point into `source` rather than into the line.
pub fn check_source(name: &str, source: &str) -> CheckSummary {
    let mut session = Session::new();
    let mut asts = Vec::new();
    let mut errors = ErrorCollector::new();

    let mut line_start = 0;
    for line in source.split_inclusive('\n') {
        let base = line_start;
        line_start += line.len();

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }

        match session.process_line(line) {
            Ok(outcome) => asts.push(outcome.ast),
            Err(e) => {
                log::debug!("{}: {}", name, e);
                errors.add_error(e.offset(base), 0);
            }
        }
    }

    CheckSummary {
        name: name.to_string(),
        source: source.to_string(),
        asts,
        errors,
    }
}

/// Read `path` and check it with [`check_source`].
pub fn check_file(path: &Path) -> WeakResult<CheckSummary> {
    let source = fs::read_to_string(path)?;
    Ok(check_source(&path.display().to_string(), &source))
}
