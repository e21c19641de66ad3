//! Flag file lexer, parser, and formatter.
//!
//! A flag file is a human-editable way to hand command-line flags to a
//! program. Each line names a flag and, optionally, its value:
//!
//! ```text
//! # Enable video output
//! enable-video
//!
//! # List of administrative users
//! user tim cooper
//! user dave
//!
//! # Initial size
//! size 3
//!
//! # Message for new users
//! message "hello\tworld"
//! ```
//!
//! Parsing produces `-name[=value]` arguments that any command-line
//! flag parser accepts.
//!
//! # Quick start
//!
//! ## Parse flag file text
//!
//! ```
//! let input = "enable-video\nuser tim cooper\nuser dave\nsize 3\n";
//! let args = flagfile::parse_str(input).unwrap();
//! assert_eq!(args, ["-enable-video", "-user=tim cooper", "-user=dave", "-size=3"]);
//! ```
//!
//! ## Prepend flag files to the command line
//!
//! ```no_run
//! // program name, then flags from the files, then the real arguments
//! let args = flagfile::init(&["/etc/myapp.flags", "myapp.flags"]);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

mod cursor;
pub mod files;
pub mod flag;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;
mod unescape;

use std::io;

pub use files::{expand_args, init, load, parse_file};
pub use flag::Flag;
pub use formatter::{format, format_flags};
pub use lexer::{LexError, LexErrorKind, Lexer, tokenize};
pub use parser::{ParseError, ParseErrorKind, parse, parse_named};
pub use token::{Position, Token, TokenKind};

/// Unified error type covering file access and parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The flag file could not be parsed.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// The flag file could not be opened.
    #[error("flagfile: cannot open {path}: {source}")]
    Open { path: String, source: io::Error },
}

impl Error {
    /// The error is a flag file that does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Tokenize and assemble flag file text in one step.
pub fn parse_str(input: &str) -> Result<Vec<String>, ParseError> {
    parse(input.as_bytes())
}
