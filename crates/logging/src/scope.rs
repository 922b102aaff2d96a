//! crates/logging/src/scope.rs
//! RAII guards that keep `indent`/`undent` balanced.

use std::ops::{Deref, DerefMut};

use crate::global;
use crate::logger::Logger;

/// Guard for the process-wide logger: indents on creation, undents on drop.
///
/// The guard only undents if its creation actually indented, so a scope
/// opened while logging was disabled never pops a level it did not push.
/// Created by [`scope()`] or the [`log_scope!`](crate::log_scope) macro.
///
/// ```
/// logging::enable();
/// {
///     let _scope = logging::scope();
///     assert_eq!(logging::indent_prefix(), "* ");
/// }
/// assert_eq!(logging::indent_prefix(), "");
/// ```
#[must_use = "dropping the scope immediately undents"]
#[derive(Debug)]
pub struct LogScope {
    pushed: bool,
}

/// Opens a nesting level on the process-wide logger for the guard's lifetime.
pub fn scope() -> LogScope {
    let pushed = global::enabled();
    global::indent();
    LogScope { pushed }
}

impl LogScope {
    /// Reports whether this scope added a nesting level.
    #[must_use]
    pub const fn is_indented(&self) -> bool {
        self.pushed
    }
}

impl Drop for LogScope {
    fn drop(&mut self) {
        if self.pushed {
            global::undent();
        }
    }
}

/// Guard returned by [`Logger::scope`].
///
/// Dereferences to the logger so traces can be written through the guard
/// while the extra nesting level is active.
#[must_use = "dropping the guard immediately undents"]
pub struct ScopeGuard<'a, W> {
    logger: &'a mut Logger<W>,
    pushed: bool,
}

impl<'a, W> ScopeGuard<'a, W> {
    pub(crate) fn new(logger: &'a mut Logger<W>) -> Self {
        let pushed = logger.is_enabled();
        logger.indent();
        Self { logger, pushed }
    }
}

impl<W> Deref for ScopeGuard<'_, W> {
    type Target = Logger<W>;

    fn deref(&self) -> &Self::Target {
        self.logger
    }
}

impl<W> DerefMut for ScopeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.logger
    }
}

impl<W> Drop for ScopeGuard<'_, W> {
    fn drop(&mut self) {
        if self.pushed {
            self.logger.undent();
        }
    }
}
