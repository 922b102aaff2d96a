//! crates/logging/src/error.rs
//! Error type shared by the indent stack and configuration parsing.

use thiserror::Error;

/// Panic message used when an `undent` would pop past an empty prefix.
pub(crate) const UNDERFLOW_MESSAGE: &str =
    "undent called with an empty indent prefix; every indent() needs exactly one matching undent()";

/// Errors reported by the checked logger operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LoggerError {
    /// An undent was requested while the indent prefix was already empty.
    #[error("indent prefix underflow: undent without a matching indent")]
    IndentUnderflow,
    /// A logging toggle could not be parsed.
    #[error("invalid logging toggle '{0}'; expected on/off, true/false, yes/no or 1/0")]
    InvalidToggle(String),
}
