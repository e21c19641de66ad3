#![allow(dead_code)]

use flagfile::{format, parse_str};

/// Parse `input`, panicking with the error message on failure.
pub fn flags(input: &str) -> Vec<String> {
    parse_str(input).unwrap_or_else(|e| panic!("parse failed: {e}\n--- input ---\n{input}"))
}

/// Helper: format flag arguments, parse them back, assert equality.
pub fn assert_args_roundtrip<S: AsRef<str>>(original: &[S]) {
    let formatted = format(original);
    let parsed = parse_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });
    let expected: Vec<&str> = original.iter().map(AsRef::as_ref).collect();
    assert_eq!(
        parsed, expected,
        "round-trip mismatch\n--- formatted ---\n{formatted}"
    );
}
