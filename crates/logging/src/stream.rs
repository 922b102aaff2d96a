//! crates/logging/src/stream.rs
//! Stream handle returned by [`cout`](crate::cout) and [`Logger::cout`](crate::Logger::cout).

use std::io::{self, Write};

/// Writable handle that either reaches the logger's output or discards everything.
///
/// When logging is enabled the handle wraps the output writer and has already
/// received the current indent prefix. When logging is disabled it wraps
/// [`io::Sink`], so callers can write unconditionally without branching on
/// [`enabled`](crate::enabled) at every call site. The choice is fixed when the
/// handle is created.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use logging::Logger;
///
/// let mut logger = Logger::enabled_with(Vec::new());
/// logger.indent();
/// writeln!(logger.cout()?, "func decl: {}", "main")?;
///
/// logger.disable();
/// writeln!(logger.cout()?, "dropped")?;
///
/// assert_eq!(logger.into_inner(), b"* func decl: main\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub enum Stream<W> {
    /// Writes reach the wrapped writer.
    Active(W),
    /// Writes are accepted and discarded.
    Null(io::Sink),
}

impl<W: Write> Stream<W> {
    /// Wraps `writer` after writing `prefix` into it.
    pub(crate) fn seeded(mut writer: W, prefix: &str) -> io::Result<Self> {
        writer.write_all(prefix.as_bytes())?;
        Ok(Self::Active(writer))
    }
}

impl<W> Stream<W> {
    /// Returns a handle bound to the null sink.
    #[must_use]
    pub fn null() -> Self {
        Self::Null(io::sink())
    }

    /// Reports whether writes through this handle are discarded.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }
}

impl<W: Write> Write for Stream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Active(writer) => writer.write(buf),
            Self::Null(sink) => sink.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Active(writer) => writer.write_all(buf),
            Self::Null(sink) => sink.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Active(writer) => writer.flush(),
            Self::Null(sink) => sink.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_stream_starts_with_prefix() {
        let mut buffer = Vec::new();
        {
            let mut stream = Stream::seeded(&mut buffer, "* * ").expect("seed succeeds");
            assert!(!stream.is_null());
            write!(stream, "value={}", 7).expect("write succeeds");
        }
        assert_eq!(buffer, b"* * value=7".to_vec());
    }

    #[test]
    fn null_stream_accepts_and_discards() {
        let mut stream: Stream<Vec<u8>> = Stream::null();
        assert!(stream.is_null());
        writeln!(stream, "ignored {}", 1).expect("null sink never fails");
        stream.flush().expect("flush succeeds");
    }

    #[test]
    fn empty_prefix_seeds_nothing() {
        let stream = Stream::seeded(Vec::new(), "").expect("seed succeeds");
        match stream {
            Stream::Active(buffer) => assert!(buffer.is_empty()),
            Stream::Null(_) => panic!("expected active stream"),
        }
    }
}
