//! Integration tests for the process-wide logger while tracing is enabled.
//!
//! Every test in this binary only ever enables the logger, so the shared flag
//! stays consistent while tests run in parallel. Each test runs on its own
//! thread and therefore starts from an empty indent prefix.

use std::fmt;

use logging::{depth, enable, enabled, indent, indent_prefix, log_println, log_scope, scope, undent};

// ============================================================================
// Balanced Nesting
// ============================================================================

/// Verifies each unmatched indent adds exactly one two-character token.
#[test]
fn each_indent_adds_two_characters() {
    enable();
    assert!(enabled());

    for level in 1..=6 {
        indent();
        assert_eq!(indent_prefix().len(), level * 2);
    }
    assert_eq!(indent_prefix(), "* * * * * * ");

    for _ in 0..6 {
        undent();
    }
    assert_eq!(indent_prefix(), "");
}

/// Verifies a matched pair restores the prefix that was active before it.
#[test]
fn matched_pairs_restore_prior_prefix() {
    enable();
    indent();
    let before = indent_prefix();

    indent();
    indent();
    undent();
    indent();
    undent();
    undent();

    assert_eq!(indent_prefix(), before);
    undent();
    assert_eq!(depth(), 0);
}

// ============================================================================
// Scope Guards
// ============================================================================

fn declare(levels: usize) -> usize {
    log_scope!();
    if levels == 0 {
        depth()
    } else {
        declare(levels - 1)
    }
}

/// Verifies `log_scope!` keeps recursion balanced.
#[test]
fn log_scope_balances_recursive_calls() {
    enable();
    assert_eq!(declare(3), 4);
    assert_eq!(depth(), 0);
}

/// Verifies a scope guard undents even when the scope unwinds.
#[test]
fn scope_undents_during_unwind() {
    enable();
    let result = std::panic::catch_unwind(|| {
        let _scope = scope();
        assert_eq!(depth(), 1);
        panic!("generator error");
    });
    assert!(result.is_err());
    assert_eq!(depth(), 0);
}

/// A declaration whose name is resolved while it is being formatted.
struct Lazy(&'static str);

impl fmt::Display for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        log_scope!();
        assert_eq!(depth(), 2);
        f.write_str(self.0)
    }
}

/// Verifies arguments that open a scope while being formatted do not
/// conflict with the prefix being rendered.
#[test]
fn arguments_may_trace_while_formatting() {
    enable();
    indent();
    log_println!("resolve({})", Lazy("main"));
    undent();
    assert_eq!(depth(), 0);
}

// ============================================================================
// Fail-fast Underflow
// ============================================================================

/// Verifies an unmatched undent is fatal instead of silently underflowing.
#[test]
#[should_panic(expected = "undent called with an empty indent prefix")]
fn unmatched_undent_panics() {
    enable();
    indent();
    undent();
    undent();
}

/// Verifies the panic leaves the thread's prefix empty rather than corrupted.
#[test]
fn underflow_does_not_corrupt_prefix() {
    enable();
    let result = std::panic::catch_unwind(undent);
    assert!(result.is_err());
    assert_eq!(indent_prefix(), "");
}
