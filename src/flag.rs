//! Structured view of a single flag argument.

use std::fmt;

/// One `-name[=value]` argument split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flag {
    pub name: String,
    pub value: Option<String>,
}

impl Flag {
    /// Create a flag without a value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Set the flag's value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Split a flag argument at its first `=`.
    ///
    /// A single leading `-` is stripped. Text without one is taken as
    /// the name as-is, so this never fails.
    ///
    /// ```
    /// use flagfile::Flag;
    ///
    /// let flag = Flag::from_arg("-user=tim cooper");
    /// assert_eq!(flag.name, "user");
    /// assert_eq!(flag.value.as_deref(), Some("tim cooper"));
    /// ```
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        let body = arg.strip_prefix('-').unwrap_or(arg);
        match body.split_once('=') {
            Some((name, value)) => Self::new(name).value(value),
            None => Self::new(body),
        }
    }

    /// Render as a command-line argument.
    #[must_use]
    pub fn to_arg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_equals() {
        let flag = Flag::from_arg("-define=a=b");
        assert_eq!(flag, Flag::new("define").value("a=b"));
        assert_eq!(flag.to_arg(), "-define=a=b");
    }

    #[test]
    fn empty_value_is_kept() {
        let flag = Flag::from_arg("-name=");
        assert_eq!(flag.value.as_deref(), Some(""));
        assert_eq!(flag.to_arg(), "-name=");
    }

    #[test]
    fn no_value() {
        assert_eq!(Flag::from_arg("-verbose"), Flag::new("verbose"));
        assert_eq!(Flag::from_arg("plain"), Flag::new("plain"));
    }
}
