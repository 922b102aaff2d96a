//! crates/logging/src/global.rs
//! Process-wide logger state and the free-function API built on it.
//!
//! The enabled flag is shared by every thread so a single `enable()` at
//! startup turns tracing on everywhere. The indent prefix is thread-local:
//! nesting follows the call stack of the thread that emits the trace.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::UNDERFLOW_MESSAGE;
use crate::indent::IndentPrefix;
use crate::line_mode::LineMode;
use crate::logger::{ATTENTION_PREFIX, render};
use crate::stream::Stream;

static ENABLED: AtomicBool = AtomicBool::new(false);

thread_local! {
    static INDENT: RefCell<IndentPrefix> = const { RefCell::new(IndentPrefix::new()) };
}

/// Turns trace output on for the whole process.
pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Turns trace output off for the whole process. [`attention`] is unaffected.
pub fn disable() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Reports whether trace output is on.
pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Pushes one nesting level on the current thread. No-op while disabled.
pub fn indent() {
    if enabled() {
        INDENT.with(|prefix| prefix.borrow_mut().push());
    }
}

/// Pops one nesting level on the current thread. No-op while disabled.
///
/// # Panics
///
/// Panics when enabled and the current thread's prefix is empty.
pub fn undent() {
    if enabled() && INDENT.with(|prefix| prefix.borrow_mut().pop()).is_err() {
        panic!("{UNDERFLOW_MESSAGE}");
    }
}

/// Returns a copy of the current thread's indent prefix.
pub fn indent_prefix() -> String {
    INDENT.with(|prefix| prefix.borrow().as_str().to_owned())
}

/// Current nesting depth on this thread.
pub fn depth() -> usize {
    INDENT.with(|prefix| prefix.borrow().depth())
}

/// Writes the indent prefix and the formatted message to standard output,
/// without a trailing newline. Nothing is written while disabled.
///
/// Prefer the [`log_print!`](crate::log_print) macro.
pub fn print(args: fmt::Arguments<'_>) {
    emit(args, LineMode::WithoutNewline);
}

/// Writes the indent prefix, the formatted message and a newline to standard
/// output. Nothing is written while disabled.
///
/// Prefer the [`log_println!`](crate::log_println) macro.
pub fn println(args: fmt::Arguments<'_>) {
    emit(args, LineMode::WithNewline);
}

/// Writes `***ATTENTION*** `, the formatted message and a newline to standard
/// output regardless of the enabled state.
///
/// Prefer the [`log_attention!`](crate::log_attention) macro.
pub fn attention(args: fmt::Arguments<'_>) {
    let mut stdout = io::stdout().lock();
    let _ = render(&mut stdout, ATTENTION_PREFIX, args, LineMode::WithNewline);
}

/// Returns a stream bound to standard output and already seeded with the
/// indent prefix, or a null stream while disabled.
///
/// ```
/// use std::io::Write;
///
/// logging::disable();
/// let mut stream = logging::cout();
/// assert!(stream.is_null());
/// writeln!(stream, "never shown").unwrap();
/// ```
pub fn cout() -> Stream<io::Stdout> {
    if !enabled() {
        return Stream::null();
    }
    let seeded = INDENT.with(|prefix| Stream::seeded(io::stdout(), prefix.borrow().as_str()));
    // A failed seed behaves like printf: the prefix is lost, the stream stays usable.
    seeded.unwrap_or_else(|_| Stream::Active(io::stdout()))
}

fn emit(args: fmt::Arguments<'_>, line_mode: LineMode) {
    if !enabled() {
        return;
    }
    // Arguments are formatted lazily and may open scopes themselves, so the
    // prefix borrow must end before rendering starts.
    let prefix = indent_prefix();
    let mut stdout = io::stdout().lock();
    let _ = render(&mut stdout, &prefix, args, line_mode);
    if line_mode.append_newline() {
        let _ = stdout.flush();
    }
}
