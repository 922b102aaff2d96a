#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the console trace logger used by the generator: nested,
//! indentation-scoped diagnostic lines on standard output behind a single
//! process-wide on/off switch, plus an always-on attention alert.
//!
//! # Design
//!
//! - The process-wide API ([`enable`], [`indent()`], [`println`], [`cout`],
//!   [`attention`], ...) keeps an atomic enabled flag shared by all threads
//!   and a thread-local [`IndentPrefix`], so nesting follows each thread's
//!   call stack.
//! - [`Logger`] carries the same contract over an arbitrary
//!   [`std::io::Write`] implementor for tests and embedders.
//! - Formatting goes through [`std::fmt::Arguments`]; the [`log_print!`],
//!   [`log_println!`] and [`log_attention!`] macros wrap `format_args!`.
//! - [`scope()`] / [`log_scope!`] and [`Logger::scope`] return guards that
//!   undent on drop.
//!
//! # Invariants
//!
//! - The indent prefix grows by [`INDENT_TOKEN`] (`"* "`) per level and its
//!   length is always a multiple of two.
//! - While disabled, `print`, `println` and `cout` produce no output and
//!   `indent`/`undent` do not touch the prefix.
//! - `attention` always writes, regardless of the enabled state.
//!
//! # Errors
//!
//! Undenting an empty prefix while enabled is a programming error and panics.
//! [`Logger::try_undent`] and [`IndentPrefix::pop`] report it as
//! [`LoggerError::IndentUnderflow`] instead. [`Logger`] output methods return
//! [`std::io::Error`] values from the underlying writer; the process-wide
//! functions ignore standard output write failures.
//!
//! # Examples
//!
//! ```
//! use logging::Logger;
//!
//! let mut logger = Logger::enabled_with(Vec::new());
//! logger.println(format_args!("DtoDefineFunc({})", "main"))?;
//! {
//!     let mut body = logger.scope();
//!     body.println(format_args!("giving argument '{}' storage", "argc"))?;
//! }
//! logger.attention(format_args!("some unknown argument: {}", "x"))?;
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "DtoDefineFunc(main)\n* giving argument 'argc' storage\n***ATTENTION*** some unknown argument: x\n"
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

mod config;
mod error;
mod global;
mod indent;
mod line_mode;
mod logger;
mod macros;
mod scope;
mod stream;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use global::{
    attention, cout, depth, disable, enable, enabled, indent, indent_prefix, print, println,
    undent,
};
pub use indent::{INDENT_TOKEN, IndentPrefix};
pub use logger::{ATTENTION_PREFIX, Logger};
pub use scope::{LogScope, ScopeGuard, scope};
pub use stream::Stream;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{Console, IndentLayer, TraceTarget, init_tracing, try_init_tracing};
