//! Peekable character cursor over a buffered byte stream.
//!
//! Decodes UTF-8 one character at a time and keeps the line/column
//! bookkeeping, so the lexer only deals in characters and never in
//! bytes or read retries.

use std::io::{self, BufRead};

use crate::token::Position;

const BOM: char = '\u{FEFF}';

pub(crate) struct Cursor<R> {
    reader: R,
    peeked: Option<char>,
    started: bool,
    line: usize,
    col: usize,
}

impl<R: BufRead> Cursor<R> {
    pub(crate) const fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            started: false,
            line: 1,
            col: 0,
        }
    }

    /// Position of the next character to be consumed.
    pub(crate) const fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.col + 1,
        }
    }

    /// Nothing has been consumed on the current line yet.
    pub(crate) const fn at_line_start(&self) -> bool {
        self.col == 0
    }

    /// Returns the next character without consuming it.
    pub(crate) fn peek(&mut self) -> io::Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.decode()?;
        }
        Ok(self.peeked)
    }

    /// Consumes the next character, counting it as one column.
    pub(crate) fn advance(&mut self) -> io::Result<Option<char>> {
        let ch = match self.peeked.take() {
            Some(ch) => Some(ch),
            None => self.decode()?,
        };
        if ch.is_some() {
            self.col += 1;
        }
        Ok(ch)
    }

    /// Consumes `expected` if it is the next character.
    pub(crate) fn advance_if(&mut self, expected: char) -> io::Result<bool> {
        if self.peek()? == Some(expected) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Records a consumed line break.
    pub(crate) const fn break_line(&mut self) {
        self.line += 1;
        self.col = 0;
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let ch = self.decode_char()?;
        if self.started {
            return Ok(ch);
        }
        self.started = true;
        // A leading byte-order mark is not part of the text.
        if ch == Some(BOM) {
            return self.decode_char();
        }
        Ok(ch)
    }

    fn decode_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.peek_byte()? else {
            return Ok(None);
        };
        self.reader.consume(1);

        let width = utf8_width(lead);
        if width == 0 {
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(b) if b & 0xC0 == 0x80 => {
                    *slot = b;
                    self.reader.consume(1);
                }
                // The offending byte starts the next character.
                _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        let ch = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(ch))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.reader.fill_buf()?.first().copied())
    }

    /// Returns `false` once the reader is exhausted.
    fn fill(&mut self) -> io::Result<bool> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(!buf.is_empty()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

const fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
