//! CLI tool to validate, expand, and format flag files.

use std::fs;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: flagfile <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  validate  Check if flag file(s) parse");
        eprintln!("  args      Print the flag arguments, one per line");
        eprintln!("  fmt       Format flag file(s) and print to stdout");
        eprintln!("  check     Check if flag file(s) are formatted");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  flagfile validate app.flags");
        eprintln!("  flagfile args app.flags");
        eprintln!("  flagfile fmt app.flags");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "validate" | "args" | "fmt" | "check") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let flags = match flagfile::parse_file(path) {
            Ok(flags) => flags,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "validate" => eprintln!("{path}: valid ({} flag(s))", flags.len()),
            "args" => {
                for flag in &flags {
                    println!("{flag}");
                }
            }
            "fmt" => print!("{}", flagfile::format(&flags)),
            _ => {
                let content = match fs::read(path) {
                    Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                    Err(e) => {
                        eprintln!("{path}: {e}");
                        had_error = true;
                        continue;
                    }
                };
                if flagfile::format(&flags) == content {
                    eprintln!("{path}: formatted");
                } else {
                    eprintln!("{path}: not formatted");
                    had_error = true;
                }
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
