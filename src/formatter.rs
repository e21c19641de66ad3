//! Pretty-printer that serializes flag arguments back into canonical
//! flag file text.
//!
//! One flag per line: the name, then a single space and the value if
//! there is one. Parsing the output yields the same arguments.

use std::fmt::Write as _;

use crate::flag::Flag;

/// Format flag arguments (`-name[=value]`) as a flag file.
///
/// Names and values are written bare where that reads back
/// unchanged, and quoted with escapes otherwise.
///
/// ```
/// let out = flagfile::format(&["-user=tim cooper", "-verbose"]);
/// assert_eq!(out, "user \"tim cooper\"\nverbose\n");
/// ```
#[must_use]
pub fn format<S: AsRef<str>>(args: &[S]) -> String {
    let mut out = String::new();
    for arg in args {
        format_flag(&mut out, &Flag::from_arg(arg.as_ref()));
    }
    out
}

/// Format already-split flags as a flag file.
#[must_use]
pub fn format_flags(flags: &[Flag]) -> String {
    let mut out = String::new();
    for flag in flags {
        format_flag(&mut out, flag);
    }
    out
}

fn format_flag(out: &mut String, flag: &Flag) {
    format_word(out, &flag.name);
    if let Some(value) = &flag.value {
        out.push(' ');
        format_word(out, value);
    }
    out.push('\n');
}

fn format_word(out: &mut String, word: &str) {
    if !needs_quotes(word) {
        out.push_str(word);
        return;
    }

    out.push('"');
    for ch in word.chars() {
        match ch {
            // a `\` before the closing quote would read back as `\"`
            '\\' => out.push_str("\\x5c"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = u32::from(c);
                let _ = write!(out, "\\u{code:04x}");
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn needs_quotes(word: &str) -> bool {
    word.is_empty()
        || word == "-"
        || word.starts_with('#')
        || word.chars().any(|c| c.is_whitespace() || c == '"' || c.is_control())
}
