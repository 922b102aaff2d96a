//! crates/logging/src/indent.rs
//! The indentation stack, flattened into the prefix printed before each line.

use std::fmt;

use crate::error::LoggerError;

/// Token appended to the prefix for each nesting level.
pub const INDENT_TOKEN: &str = "* ";

/// Stack of indentation tokens stored as the rendered prefix string.
///
/// The length of the prefix is always a multiple of [`INDENT_TOKEN`]'s
/// length; [`pop`](Self::pop) refuses to go below an empty prefix.
///
/// # Examples
///
/// ```
/// use logging::IndentPrefix;
///
/// let mut prefix = IndentPrefix::new();
/// prefix.push();
/// prefix.push();
/// assert_eq!(prefix.as_str(), "* * ");
/// assert_eq!(prefix.depth(), 2);
///
/// prefix.pop()?;
/// assert_eq!(prefix.as_str(), "* ");
/// # Ok::<(), logging::LoggerError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IndentPrefix {
    text: String,
}

impl IndentPrefix {
    /// Creates an empty prefix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Appends one indentation token.
    pub fn push(&mut self) {
        self.text.push_str(INDENT_TOKEN);
    }

    /// Removes one indentation token.
    pub fn pop(&mut self) -> Result<(), LoggerError> {
        if self.text.is_empty() {
            return Err(LoggerError::IndentUnderflow);
        }
        self.text.truncate(self.text.len() - INDENT_TOKEN.len());
        Ok(())
    }

    /// Returns the rendered prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of tokens currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.text.len() / INDENT_TOKEN.len()
    }

    /// Reports whether no token is on the stack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Drops every token.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl fmt::Display for IndentPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for IndentPrefix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
