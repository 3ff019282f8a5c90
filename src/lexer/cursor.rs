//! ソース位置の追跡

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based line/column position inside the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// 次に調べるバイトの位置
///
/// マッチャーにはコピーが渡されるので、失敗した試行がドライバーの位置を壊すことはない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub pointer: usize,
    pub loc: Location,
}

impl Cursor {
    /// 入力の先頭を指すカーソル
    pub fn new() -> Self {
        Self::default()
    }

    /// Step over one consumed byte.
    pub fn advance(&mut self, byte: u8) {
        self.pointer += 1;
        if byte == b'\n' {
            self.loc.line += 1;
            self.loc.col = 0;
        } else {
            self.loc.col += 1;
        }
    }

    /// Step over a run of bytes that contains no newline.
    pub(crate) fn advance_by(&mut self, len: usize) {
        self.pointer += len;
        self.loc.col += len;
    }

    pub(crate) fn is_at_end(&self, source: &str) -> bool {
        self.pointer >= source.len()
    }

    pub(crate) fn peek(&self, source: &str) -> Option<u8> {
        source.as_bytes().get(self.pointer).copied()
    }
}
