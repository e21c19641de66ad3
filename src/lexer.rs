use std::fmt;
use std::io::{self, BufRead};

use crate::cursor::Cursor;
use crate::token::{Position, Token, TokenKind};
use crate::unescape;

/// Classifies a lexer error.
#[derive(Debug)]
pub enum LexErrorKind {
    /// The underlying reader failed.
    Read(io::Error),
    /// Input ended inside a quoted word.
    UnexpectedEof,
    /// Quoted word contains an escape sequence that cannot be decoded.
    InvalidEscape(String),
    /// Byte escapes in a quoted word do not form valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "read error: {e}"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::InvalidEscape(seq) => {
                write!(f, "invalid escape sequence \"{seq}\" in quoted word")
            }
            Self::InvalidUtf8 => {
                write!(f, "quoted word does not decode to valid UTF-8")
            }
        }
    }
}

impl std::error::Error for LexErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            _ => None,
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    #[source]
    pub kind: LexErrorKind,
    pub position: Position,
}

/// Tokenize a flag file source string into a sequence of tokens.
///
/// The returned list always ends with a single
/// [`TokenKind::EndOfInput`] token.
///
/// # Errors
///
/// Returns `LexError` on unterminated or undecodable quoted words.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input.as_bytes());
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Streaming tokenizer over any buffered reader.
///
/// Tokens are produced on demand by [`Lexer::next_token`]; once the
/// input is exhausted every further call yields
/// [`TokenKind::EndOfInput`].
pub struct Lexer<R> {
    cursor: Cursor<R>,
}

impl<R: BufRead> Lexer<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            cursor: Cursor::new(reader),
        }
    }

    /// Position of the next unread character.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let position = self.cursor.position();
        let Some(ch) = self.peek()? else {
            return Ok(Token::new(TokenKind::EndOfInput, position));
        };

        match ch {
            '#' if self.cursor.at_line_start() => {
                self.skip_comment()?;
                Ok(Token::new(TokenKind::Comment, position))
            }
            '\r' | '\n' => {
                self.read_line_break()?;
                Ok(Token::new(TokenKind::LineBreak, position))
            }
            '"' => {
                let text = self.read_quoted_word()?;
                Ok(Token::word(text, true, position))
            }
            c if c.is_whitespace() => {
                while self.peek()?.is_some_and(is_inline_space) {
                    self.advance()?;
                }
                Ok(Token::new(TokenKind::Whitespace, position))
            }
            _ => {
                let text = self.read_word()?;
                Ok(Token::word(text, false, position))
            }
        }
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            position: self.cursor.position(),
        }
    }

    fn peek(&mut self) -> Result<Option<char>, LexError> {
        self.cursor
            .peek()
            .map_err(|e| self.error(LexErrorKind::Read(e)))
    }

    fn advance(&mut self) -> Result<Option<char>, LexError> {
        self.cursor
            .advance()
            .map_err(|e| self.error(LexErrorKind::Read(e)))
    }

    /// Consumes `\n`, `\r` or `\r\n` as a single line break.
    fn read_line_break(&mut self) -> Result<(), LexError> {
        if self.advance()? == Some('\r') {
            self.cursor
                .advance_if('\n')
                .map_err(|e| self.error(LexErrorKind::Read(e)))?;
        }
        self.cursor.break_line();
        Ok(())
    }

    fn skip_comment(&mut self) -> Result<(), LexError> {
        while let Some(ch) = self.peek()? {
            if ch == '\r' || ch == '\n' {
                return self.read_line_break();
            }
            self.advance()?;
        }
        Ok(())
    }

    fn read_word(&mut self) -> Result<String, LexError> {
        let mut text = String::new();
        while let Some(ch) = self.peek()? {
            if ch.is_whitespace() || ch == '"' {
                break;
            }
            text.push(ch);
            self.advance()?;
        }
        Ok(text)
    }

    fn read_quoted_word(&mut self) -> Result<String, LexError> {
        let mut literal = String::new();
        self.take_char(&mut literal)?; // opening quote

        loop {
            match self.take_char(&mut literal)? {
                '"' => break,
                // `\"` is an escaped quote; any other backslash is left
                // for the decoder along with the character after it
                '\\' if self.peek()? == Some('"') => {
                    self.take_char(&mut literal)?;
                }
                _ => {}
            }
        }

        unescape::unquote(&literal).map_err(|kind| self.error(kind))
    }

    /// Consumes one character of a quoted word into `literal`,
    /// keeping line accounting for embedded line breaks.
    fn take_char(&mut self, literal: &mut String) -> Result<char, LexError> {
        let Some(ch) = self.advance()? else {
            return Err(self.error(LexErrorKind::UnexpectedEof));
        };
        literal.push(ch);
        match ch {
            '\r' => {
                if self.peek()? == Some('\n') {
                    self.advance()?;
                    literal.push('\n');
                }
                self.cursor.break_line();
            }
            '\n' => self.cursor.break_line(),
            _ => {}
        }
        Ok(ch)
    }
}

fn is_inline_space(ch: char) -> bool {
    ch.is_whitespace() && ch != '\r' && ch != '\n'
}
