//! Reading flag files from disk and splicing them into argument lists.
//!
//! Everything that touches the filesystem or the process lives here;
//! the lexer and parser only ever see a reader.

use std::ffi::OsString;
use std::fs::File;
use std::path::Path;

use crate::Error;
use crate::parser::parse_named;

/// Parse the flag file at `path`.
///
/// Parse errors carry the path as their source name.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| Error::Open {
        path: name.clone(),
        source,
    })?;
    let args = parse_named(file, &name)?;
    tracing::debug!(path = %name, flags = args.len(), "parsed flag file");
    Ok(args)
}

/// Parse each file in order and concatenate the results.
///
/// Files that do not exist are skipped; any other failure stops the
/// whole load.
pub fn load<P: AsRef<Path>>(names: &[P]) -> Result<Vec<String>, Error> {
    let mut args = Vec::new();
    for name in names {
        match parse_file(name) {
            Ok(parsed) => args.extend(parsed),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %name.as_ref().display(), "flag file not found, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(args)
}

/// Insert the flags from `names` right after the program name in
/// `args`, ahead of the arguments given on the command line.
///
/// ```no_run
/// let args = flagfile::expand_args(&["app.flags"], std::env::args()).unwrap();
/// ```
pub fn expand_args<P, T, I>(names: &[P], args: I) -> Result<Vec<T>, Error>
where
    P: AsRef<Path>,
    T: From<String>,
    I: IntoIterator<Item = T>,
{
    let loaded = load(names)?;
    let mut args = args.into_iter();
    let mut out = Vec::new();
    out.extend(args.next());
    out.extend(loaded.into_iter().map(T::from));
    out.extend(args);
    Ok(out)
}

/// Process entry point: expand this process's arguments with the
/// flags from `names`.
///
/// On any error other than a missing file, prints the error to
/// stderr and exits with status 2. The returned vector starts with
/// the program name and can be handed to a command-line parser.
pub fn init<P: AsRef<Path>>(names: &[P]) -> Vec<OsString> {
    match expand_args(names, std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
