use std::fmt;

/// Source location for error reporting. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// No more input.
    EndOfInput,
    /// Comment line (`# ...`), including its line break.
    Comment,
    /// Run of whitespace inside a line.
    Whitespace,
    /// `\n`, `\r` or `\r\n`.
    LineBreak,
    /// Bare or double-quoted word.
    Word { quoted: bool },
}

/// A single token with its kind, decoded text, and start position.
///
/// `text` is empty for everything but words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub(crate) const fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            text: String::new(),
            position,
        }
    }

    pub(crate) const fn word(text: String, quoted: bool, position: Position) -> Self {
        Self {
            kind: TokenKind::Word { quoted },
            text,
            position,
        }
    }

    /// Returns `true` for a word token.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Word { .. })
    }
}
