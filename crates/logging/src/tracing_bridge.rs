//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the indented console logger.
//!
//! [`IndentLayer`] lets code instrumented with standard tracing macros and
//! spans produce the same nested trace as direct `log_println!` /
//! `log_scope!` calls:
//!
//! - entering a span prints its name and opens a nesting level,
//! - exiting the span closes that level,
//! - event messages go to [`println`](crate::println), gated by the toggle,
//! - `ERROR` events go to [`attention`](crate::attention) and always print.
//!
//! The layer renders through a [`TraceTarget`]; [`IndentLayer::with_target`]
//! points it at a shared [`Logger`] instead of standard output.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::enable();
//! logging::init_tracing();
//!
//! let span = tracing::info_span!("DtoDefineFunc");
//! let _entered = span.enter();
//! tracing::debug!("doing function body");
//! ```

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::span::Id;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::Logger;
use crate::global;

/// Where [`IndentLayer`] renders spans and events.
///
/// [`Console`] is the process-wide logger on standard output. A shared
/// [`Logger`] behind `Arc<Mutex<_>>` renders into its own writer instead.
pub trait TraceTarget: Send + Sync + 'static {
    /// Whether trace output is currently on for this target.
    fn is_enabled(&self) -> bool;
    /// Opens one nesting level.
    fn indent(&self);
    /// Closes one nesting level.
    fn undent(&self);
    /// Renders a prefixed line, gated by the toggle.
    fn println(&self, args: fmt::Arguments<'_>);
    /// Renders an attention line regardless of the toggle.
    fn attention(&self, args: fmt::Arguments<'_>);
}

/// The process-wide logger on standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console;

impl TraceTarget for Console {
    fn is_enabled(&self) -> bool {
        global::enabled()
    }

    fn indent(&self) {
        global::indent();
    }

    fn undent(&self) {
        global::undent();
    }

    fn println(&self, args: fmt::Arguments<'_>) {
        global::println(args);
    }

    fn attention(&self, args: fmt::Arguments<'_>) {
        global::attention(args);
    }
}

// Write failures are dropped, matching the process-wide API.
impl<W> TraceTarget for Arc<Mutex<Logger<W>>>
where
    W: Write + Send + 'static,
{
    fn is_enabled(&self) -> bool {
        self.lock().unwrap_or_else(PoisonError::into_inner).is_enabled()
    }

    fn indent(&self) {
        self.lock().unwrap_or_else(PoisonError::into_inner).indent();
    }

    fn undent(&self) {
        self.lock().unwrap_or_else(PoisonError::into_inner).undent();
    }

    fn println(&self, args: fmt::Arguments<'_>) {
        let _ = self.lock().unwrap_or_else(PoisonError::into_inner).println(args);
    }

    fn attention(&self, args: fmt::Arguments<'_>) {
        let _ = self
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .attention(args);
    }
}

/// Span extension counting how many nesting levels a span's enters pushed.
struct Indented(usize);

/// A tracing layer that renders events and spans through a [`TraceTarget`],
/// the process-wide logger by default.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndentLayer<T = Console> {
    target: T,
}

impl IndentLayer {
    /// Create a layer over the process-wide logger.
    #[must_use]
    pub const fn new() -> Self {
        Self { target: Console }
    }
}

impl<T: TraceTarget> IndentLayer<T> {
    /// Create a layer over `target`.
    #[must_use]
    pub const fn with_target(target: T) -> Self {
        Self { target }
    }
}

impl<S, T> Layer<S> for IndentLayer<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    T: TraceTarget,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        if *event.metadata().level() == Level::ERROR {
            self.target.attention(format_args!("{message}"));
        } else {
            self.target.println(format_args!("{message}"));
        }
    }

    fn on_enter(&self, id: &Id, ctx: Context<'_, S>) {
        if !self.target.is_enabled() {
            return;
        }
        let Some(span) = ctx.span(id) else {
            return;
        };

        self.target.println(format_args!("{}", span.name()));
        self.target.indent();

        let mut extensions = span.extensions_mut();
        if let Some(indented) = extensions.get_mut::<Indented>() {
            indented.0 += 1;
        } else {
            extensions.insert(Indented(1));
        }
    }

    fn on_exit(&self, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        let mut extensions = span.extensions_mut();
        let remaining = extensions.get_mut::<Indented>().map(|indented| {
            indented.0 -= 1;
            indented.0
        });
        let pushed = match remaining {
            Some(0) => extensions.remove::<Indented>().is_some(),
            Some(_) => true,
            None => false,
        };
        drop(extensions);

        if pushed {
            self.target.undent();
        }
    }
}

/// Visitor to extract the message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs [`IndentLayer`] as the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(IndentLayer::new()).init();
}

/// Installs [`IndentLayer`] as the global tracing subscriber, reporting
/// failure instead of panicking when one is already set.
pub fn try_init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(IndentLayer::new())
        .try_init()
}
