//! crates/logging/src/macros.rs
//! Formatting macros over the process-wide logger.
//!
//! Arguments are checked by `format_args!`, so mismatched placeholders are
//! compile errors rather than undefined output.

/// Writes an indented trace fragment without a trailing newline.
///
/// # Example
/// ```
/// logging::log_print!("isMember = this is: {}\n", "Foo");
/// ```
#[macro_export]
macro_rules! log_print {
    ($($arg:tt)*) => {
        $crate::print(::core::format_args!($($arg)*))
    };
}

/// Writes an indented trace line.
///
/// # Example
/// ```
/// logging::log_println!("resolve({})", "main");
/// ```
#[macro_export]
macro_rules! log_println {
    ($($arg:tt)*) => {
        $crate::println(::core::format_args!($($arg)*))
    };
}

/// Writes an `***ATTENTION*** ` line, even while tracing is disabled.
///
/// # Example
/// ```ignore
/// log_attention!("some unknown argument: {}", name);
/// ```
#[macro_export]
macro_rules! log_attention {
    ($($arg:tt)*) => {
        $crate::attention(::core::format_args!($($arg)*))
    };
}

/// Indents the process-wide logger until the end of the enclosing block.
///
/// # Example
/// ```
/// logging::enable();
/// fn declare(name: &str) {
///     logging::log_println!("declare({})", name);
///     logging::log_scope!();
///     logging::log_println!("body");
/// }
/// declare("main");
/// assert_eq!(logging::depth(), 0);
/// ```
#[macro_export]
macro_rules! log_scope {
    () => {
        let _log_scope = $crate::scope();
    };
}
