//! crates/logging/src/logger.rs
//! Explicit logger context over an arbitrary writer.

use std::fmt;
use std::io::{self, Write};

use crate::error::{LoggerError, UNDERFLOW_MESSAGE};
use crate::indent::IndentPrefix;
use crate::line_mode::LineMode;
use crate::scope::ScopeGuard;
use crate::stream::Stream;

/// Marker written before every [`attention`](Logger::attention) message.
pub const ATTENTION_PREFIX: &str = "***ATTENTION*** ";

/// Writes `prefix`, the formatted message and, depending on `line_mode`, a newline.
pub(crate) fn render<W>(
    writer: &mut W,
    prefix: &str,
    args: fmt::Arguments<'_>,
    line_mode: LineMode,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writer.write_all(prefix.as_bytes())?;
    writer.write_fmt(args)?;
    if line_mode.append_newline() {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Indentation-aware trace logger bound to its own writer.
///
/// `Logger` carries the same contract as the process-wide functions at the
/// crate root ([`enable`](crate::enable), [`indent`](crate::indent()),
/// [`println`](crate::println), ...) but keeps its state in the instance, so
/// tests and embedders can run independent loggers side by side.
///
/// A new logger starts disabled with an empty prefix. While disabled,
/// [`print`](Self::print), [`println`](Self::println) and writes through
/// [`cout`](Self::cout) produce nothing and [`indent`](Self::indent) /
/// [`undent`](Self::undent) leave the prefix untouched.
/// [`attention`](Self::attention) always writes.
///
/// # Examples
///
/// ```
/// use logging::Logger;
///
/// let mut logger = Logger::new(Vec::new());
/// logger.println(format_args!("hidden"))?;
///
/// logger.enable();
/// logger.println(format_args!("value={}", 42))?;
/// logger.indent();
/// logger.println(format_args!("value={}", 42))?;
/// logger.undent();
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "value=42\n* value=42\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Logger<W> {
    writer: W,
    enabled: bool,
    prefix: IndentPrefix,
}

impl<W> Logger<W> {
    /// Creates a disabled logger writing to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            enabled: false,
            prefix: IndentPrefix::new(),
        }
    }

    /// Creates an enabled logger writing to `writer`.
    #[must_use]
    pub const fn enabled_with(writer: W) -> Self {
        Self {
            writer,
            enabled: true,
            prefix: IndentPrefix::new(),
        }
    }

    /// Turns output on.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Turns output off. [`attention`](Self::attention) is unaffected.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Reports whether output is on.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pushes one nesting level. No-op while disabled.
    pub fn indent(&mut self) {
        if self.enabled {
            self.prefix.push();
        }
    }

    /// Pops one nesting level. No-op while disabled.
    ///
    /// # Panics
    ///
    /// Panics when enabled and the prefix is already empty: an unmatched
    /// `undent` is a programming error in the caller.
    pub fn undent(&mut self) {
        if self.try_undent().is_err() {
            panic!("{UNDERFLOW_MESSAGE}");
        }
    }

    /// Checked form of [`undent`](Self::undent).
    pub fn try_undent(&mut self) -> Result<(), LoggerError> {
        if self.enabled {
            self.prefix.pop()
        } else {
            Ok(())
        }
    }

    /// Current indent prefix.
    #[must_use]
    pub const fn prefix(&self) -> &IndentPrefix {
        &self.prefix
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.prefix.depth()
    }

    /// Indents now and undents when the returned guard is dropped.
    pub fn scope(&mut self) -> ScopeGuard<'_, W> {
        ScopeGuard::new(self)
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the logger and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Writes the prefix and the formatted message, without a newline.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.emit(args, LineMode::WithoutNewline)
    }

    /// Writes the prefix, the formatted message and a newline.
    pub fn println(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.emit(args, LineMode::WithNewline)
    }

    /// Writes [`ATTENTION_PREFIX`], the formatted message and a newline,
    /// whether or not the logger is enabled. The indent prefix is not used.
    pub fn attention(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        render(&mut self.writer, ATTENTION_PREFIX, args, LineMode::WithNewline)
    }

    /// Returns a stream seeded with the indent prefix, or a null stream while disabled.
    pub fn cout(&mut self) -> io::Result<Stream<&mut W>> {
        if self.enabled {
            Stream::seeded(&mut self.writer, self.prefix.as_str())
        } else {
            Ok(Stream::null())
        }
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn emit(&mut self, args: fmt::Arguments<'_>, line_mode: LineMode) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        render(&mut self.writer, self.prefix.as_str(), args, line_mode)
    }
}
