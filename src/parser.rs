use std::fmt;
use std::io::{BufRead, BufReader, Read};

use crate::lexer::{LexError, LexErrorKind, Lexer};
use crate::token::{Position, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug)]
pub enum ParseErrorKind {
    /// The tokenizer failed.
    Lex(LexErrorKind),
    /// A bare word that cannot appear in a flag file (`-`).
    InvalidToken { token: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(kind) => write!(f, "{kind}"),
            Self::InvalidToken { token } => write!(f, "invalid token \"{token}\""),
        }
    }
}

impl std::error::Error for ParseErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(kind) => kind.source(),
            Self::InvalidToken { .. } => None,
        }
    }
}

/// Error produced while turning a flag file into flag arguments.
///
/// `file` names the source when one is known and is `None` for
/// anonymous streams.
#[derive(Debug, thiserror::Error)]
#[error(
    "flagfile: parsing error{} (line {}, column {}): {kind}",
    in_file(file.as_deref()),
    position.line,
    position.column
)]
pub struct ParseError {
    #[source]
    pub kind: ParseErrorKind,
    pub position: Position,
    pub file: Option<String>,
}

impl ParseError {
    /// Attach a source name to the error.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        Self {
            kind: ParseErrorKind::Lex(err.kind),
            position: err.position,
            file: None,
        }
    }
}

fn in_file(file: Option<&str>) -> String {
    file.map_or_else(String::new, |name| format!(" in {name}"))
}

/// Parse a flag file from `reader` into flag arguments.
///
/// Each element of the result has the form `-name`, `-name=` or
/// `-name=value`, ready for a command-line flag parser.
///
/// # Errors
///
/// Returns `ParseError` on read failures, malformed quoted words, or
/// a bare `-` token.
pub fn parse<R: Read>(reader: R) -> Result<Vec<String>, ParseError> {
    Parser::new(BufReader::new(reader)).parse()
}

/// Like [`parse`], but tags any error with the source name `file`.
pub fn parse_named<R: Read>(reader: R, file: &str) -> Result<Vec<String>, ParseError> {
    parse(reader).map_err(|e| e.with_file(file))
}

struct Parser<R> {
    lexer: Lexer<R>,
    args: Vec<String>,
    at_line_start: bool,
    first_value_word: bool,
    pending_whitespace: bool,
}

impl<R: BufRead> Parser<R> {
    const fn new(reader: R) -> Self {
        Self {
            lexer: Lexer::new(reader),
            args: Vec::new(),
            at_line_start: true,
            first_value_word: true,
            pending_whitespace: false,
        }
    }

    fn parse(mut self) -> Result<Vec<String>, ParseError> {
        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::EndOfInput => return Ok(self.args),
                TokenKind::Comment => {}
                TokenKind::Whitespace => self.pending_whitespace = true,
                TokenKind::LineBreak => self.at_line_start = true,
                TokenKind::Word { quoted } => self.push_word(token, quoted)?,
            }
        }
    }

    fn push_word(&mut self, token: Token, quoted: bool) -> Result<(), ParseError> {
        if !quoted && token.text == "-" {
            return Err(ParseError {
                kind: ParseErrorKind::InvalidToken { token: token.text },
                position: token.position,
                file: None,
            });
        }

        match self.args.last_mut() {
            Some(arg) if !self.at_line_start => {
                if self.first_value_word {
                    arg.push('=');
                    self.first_value_word = false;
                } else if self.pending_whitespace {
                    arg.push(' ');
                }
                arg.push_str(&token.text);
            }
            _ => {
                tracing::trace!(name = %token.text, line = token.position.line, "flag");
                self.args.push(format!("-{}", token.text));
                self.at_line_start = false;
                self.first_value_word = true;
            }
        }

        self.pending_whitespace = false;
        Ok(())
    }
}
