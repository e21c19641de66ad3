//! End-to-end tests: whole flag files in, argument lists out.

mod common;

use common::flags;

const EXAMPLE: &str = "\
# Enable video output
enable-video

# Enable audio output
#enable-audio

# List of administrative users
user tim cooper
user dave

# Initial size
size 3

# Message for new users
message hello\"\\t\"world
";

#[test]
fn e2e_minimal_example() {
    let input = "enable-video\nuser tim cooper\nuser dave\nsize 3\n";
    assert_eq!(
        flags(input),
        ["-enable-video", "-user=tim cooper", "-user=dave", "-size=3"]
    );
}

#[test]
fn e2e_commented_example() {
    assert_eq!(
        flags(EXAMPLE),
        [
            "-enable-video",
            "-user=tim cooper",
            "-user=dave",
            "-size=3",
            "-message=hello\tworld",
        ]
    );
}

#[test]
fn e2e_crlf_file_matches_lf_file() {
    let crlf = EXAMPLE.replace('\n', "\r\n");
    assert_eq!(flags(&crlf), flags(EXAMPLE));
}

#[test]
fn e2e_cr_only_file_matches_lf_file() {
    let cr = EXAMPLE.replace('\n', "\r");
    assert_eq!(flags(&cr), flags(EXAMPLE));
}

#[test]
fn e2e_arguments_split_into_flags() {
    let args = flags(EXAMPLE);
    let users: Vec<_> = args
        .iter()
        .map(|a| flagfile::Flag::from_arg(a))
        .filter(|f| f.name == "user")
        .filter_map(|f| f.value)
        .collect();
    assert_eq!(users, ["tim cooper", "dave"]);
}

#[test]
fn e2e_format_then_parse() {
    let formatted = flagfile::format(&flags(EXAMPLE));
    assert_eq!(flags(&formatted), flags(EXAMPLE));
    assert!(formatted.contains("message \"hello\\tworld\"\n"));
}
