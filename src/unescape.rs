//! Decoding of quoted-word literals.

use std::str::Chars;

use crate::lexer::LexErrorKind;

/// Decode a quoted literal, surrounding quotes included.
///
/// Recognised escapes: `\a \b \f \n \r \t \v \\ \"`, `\xHH` and
/// `\NNN` (octal) bytes, `\uHHHH` and `\UHHHHHHHH` code points.
/// Byte escapes are assembled as raw bytes, so `"\xc3\xa9"` decodes
/// to `é`; the final result must be valid UTF-8.
pub(crate) fn unquote(literal: &str) -> Result<String, LexErrorKind> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);

    let mut out = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            push_char(&mut out, ch);
            continue;
        }

        let Some(esc) = chars.next() else {
            return Err(invalid("\\"));
        };
        match esc {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0C),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0B),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            'x' => {
                let value = read_digits(&mut chars, 2, 16, esc)?;
                out.push(byte(value, &format!("\\x{value:02x}"))?);
            }
            '0'..='7' => {
                let mut digits = String::from(esc);
                digits.extend(chars.by_ref().take(2));
                if digits.len() != 3 || !digits.chars().all(|c| c.is_digit(8)) {
                    return Err(invalid(&format!("\\{digits}")));
                }
                let sequence = format!("\\{digits}");
                let value = u32::from_str_radix(&digits, 8).map_err(|_| invalid(&sequence))?;
                out.push(byte(value, &sequence)?);
            }
            'u' | 'U' => {
                let len = if esc == 'u' { 4 } else { 8 };
                let value = read_digits(&mut chars, len, 16, esc)?;
                let ch = char::from_u32(value)
                    .ok_or_else(|| invalid(&format!("\\{esc}{value:0len$x}")))?;
                push_char(&mut out, ch);
            }
            other => return Err(invalid(&format!("\\{other}"))),
        }
    }

    String::from_utf8(out).map_err(|_| LexErrorKind::InvalidUtf8)
}

fn read_digits(
    chars: &mut Chars<'_>,
    len: usize,
    radix: u32,
    esc: char,
) -> Result<u32, LexErrorKind> {
    let digits: String = chars.by_ref().take(len).collect();
    if digits.chars().count() != len || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid(&format!("\\{esc}{digits}")));
    }
    u32::from_str_radix(&digits, radix).map_err(|_| invalid(&format!("\\{esc}{digits}")))
}

fn byte(value: u32, sequence: &str) -> Result<u8, LexErrorKind> {
    u8::try_from(value).map_err(|_| invalid(sequence))
}

fn push_char(out: &mut Vec<u8>, ch: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

fn invalid(sequence: &str) -> LexErrorKind {
    LexErrorKind::InvalidEscape(sequence.to_string())
}
