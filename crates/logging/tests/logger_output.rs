//! Integration tests for the rendered output of an instance [`Logger`].
//!
//! These tests capture output in a `Vec<u8>` and check the exact bytes for
//! prefixes, newlines, the null stream, and attention alerts.

use std::io::Write;

use logging::{Logger, LoggerConfig, LoggerError};

fn render(logger: Logger<Vec<u8>>) -> String {
    String::from_utf8(logger.into_inner()).expect("output is UTF-8")
}

// ============================================================================
// Enabled Output
// ============================================================================

/// Verifies the exact bytes for an unindented and an indented line.
#[test]
fn println_renders_prefix_and_newline() {
    let mut logger = Logger::enabled_with(Vec::new());
    logger.println(format_args!("value={}", 42)).unwrap();
    logger.indent();
    logger.println(format_args!("value={}", 42)).unwrap();

    assert_eq!(render(logger), "value=42\n* value=42\n");
}

/// Verifies print keeps the caller in control of line breaks.
#[test]
fn print_embeds_caller_newlines() {
    let mut logger = Logger::enabled_with(Vec::new());
    logger.indent();
    logger
        .print(format_args!("isMember = this is: {}\n", "Foo"))
        .unwrap();

    assert_eq!(render(logger), "* isMember = this is: Foo\n");
}

/// Verifies formatting of several argument types.
#[test]
fn formatting_is_type_checked() {
    let mut logger = Logger::enabled_with(Vec::new());
    logger
        .println(format_args!("{} {:.2} {:>4} {:?}", 7_i64, 1.5_f64, "ab", 'c'))
        .unwrap();

    assert_eq!(render(logger), "7 1.50   ab 'c'\n");
}

/// Verifies nested scopes through the instance guard.
#[test]
fn nested_scopes_render_as_a_tree() {
    let mut logger = Logger::enabled_with(Vec::new());
    logger.println(format_args!("DtoResolveFunction(main)")).unwrap();
    {
        let mut resolve = logger.scope();
        resolve.println(format_args!("DtoDeclareFunction(main)")).unwrap();
        {
            let mut declare = resolve.scope();
            declare.println(format_args!("in param")).unwrap();
        }
    }
    logger.println(format_args!("done")).unwrap();

    assert_eq!(
        render(logger),
        "DtoResolveFunction(main)\n* DtoDeclareFunction(main)\n* * in param\ndone\n"
    );
}

// ============================================================================
// Stream Handle
// ============================================================================

/// Verifies cout output interleaves correctly with println output.
#[test]
fn cout_and_println_share_the_prefix() {
    let mut logger = Logger::enabled_with(Vec::new());
    logger.indent();
    writeln!(logger.cout().unwrap(), "returning through pointer parameter: {}", "i8*").unwrap();
    logger.println(format_args!("after")).unwrap();

    assert_eq!(
        render(logger),
        "* returning through pointer parameter: i8*\n* after\n"
    );
}

/// Verifies the stream captures the enabled state when it is created.
#[test]
fn cout_state_is_fixed_at_creation() {
    let mut logger = Logger::new(Vec::new());
    let stream = logger.cout().unwrap();
    assert!(stream.is_null());

    logger.enable();
    let stream = logger.cout().unwrap();
    assert!(!stream.is_null());
}

// ============================================================================
// Disabled Output and Attention
// ============================================================================

/// Verifies nothing but attention reaches the writer while disabled.
#[test]
fn only_attention_survives_disable() {
    let mut logger = Logger::enabled_with(Vec::new());
    logger.disable();

    logger.print(format_args!("a")).unwrap();
    logger.println(format_args!("b")).unwrap();
    writeln!(logger.cout().unwrap(), "c").unwrap();
    logger.attention(format_args!("disk full")).unwrap();

    assert_eq!(render(logger), "***ATTENTION*** disk full\n");
}

/// Verifies attention output is identical in both states.
#[test]
fn attention_is_unconditional() {
    for config in [LoggerConfig::enabled(), LoggerConfig::disabled()] {
        let mut logger = config.build(Vec::new());
        logger.attention(format_args!("disk full")).unwrap();
        assert_eq!(render(logger), "***ATTENTION*** disk full\n");
    }
}

// ============================================================================
// Round Trip and Underflow
// ============================================================================

/// Verifies enable, N indents, N undents, disable returns to the initial state.
#[test]
fn nested_round_trip_returns_to_initial_state() {
    for n in [0_usize, 1, 3, 16] {
        let mut logger = Logger::new(Vec::<u8>::new());
        logger.enable();
        for _ in 0..n {
            logger.indent();
        }
        assert_eq!(logger.depth(), n);
        for _ in 0..n {
            logger.undent();
        }
        logger.disable();

        assert!(!logger.is_enabled());
        assert!(logger.prefix().is_empty());
    }
}

/// Verifies the checked undent reports the underflow.
#[test]
fn try_undent_reports_underflow() {
    let mut logger = Logger::enabled_with(Vec::<u8>::new());
    logger.indent();
    assert_eq!(logger.try_undent(), Ok(()));
    assert_eq!(logger.try_undent(), Err(LoggerError::IndentUnderflow));
}

/// Verifies the unchecked undent is fatal.
#[test]
#[should_panic(expected = "undent called with an empty indent prefix")]
fn undent_underflow_panics() {
    let mut logger = Logger::enabled_with(Vec::<u8>::new());
    logger.undent();
}
