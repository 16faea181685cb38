//! Failure-message formatting for the attest check layer.
//!
//! Check call sites hand over an optional message template and a
//! positional argument list; this crate turns them into the text of the
//! failure about to be reported. Templates may freely mix SLF4J-style
//! `{}` tokens with printf-style specifiers (`%s`, `%d`, `%f`, `%%`, …)
//! in the same string.
//!
//! The engine is a strict pipeline of pure stages:
//!
//! 1. [`translate`] rewrites `{}` tokens into `%s`, honoring
//!    backslash-escape and percent-collision rules;
//! 2. [`pad`] fills argument deficits with `null` markers (surpluses
//!    are kept and ignored);
//! 3. [`render_safe`] substitutes, converting any internal fault into
//!    diagnostic text instead of propagating it;
//! 4. [`compose_fallback`] produces the deterministic dump-all-arguments
//!    message when no template was supplied at all.
//!
//! # Never fails
//!
//! Everything here runs on the failure path: a fault of the formatter's
//! own would mask the failure it is describing. Every public function is
//! total: no panics, no error returns. Identical inputs always yield
//! identical output, and all state is call-local, so concurrent use
//! needs no coordination.

mod error;
mod fallback;
mod pad;
mod render;
mod specifier;
mod translate;

pub use fallback::compose_fallback;
pub use pad::pad;
pub use render::render_safe;
pub use specifier::count_specifiers;
pub use translate::translate;

// Re-export the argument value type for callers' convenience
pub use attest_value::Value;

/// Prefix used by [`MessageFormatter::rehearse`] so smoke-test output is
/// recognizable as such.
const REHEARSAL_PREFIX: &str = "Testing of formatting: ";

/// Render a failure message from an optional template and its arguments.
///
/// With no template the fallback composer takes over; otherwise the
/// template flows through translation and safe rendering. Total
/// function: always returns a usable, human-readable string.
pub fn render(template: Option<&str>, args: &[Value]) -> String {
    match template {
        None => compose_fallback(args),
        Some(raw) => {
            let translated = translate(raw);
            render_safe(&translated, args)
        }
    }
}

/// Configuration for a [`MessageFormatter`].
///
/// `always_format` is the "render even when the check passes" debug
/// toggle: an init-once value threaded in at construction, not mutable
/// global state. Off by default.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FormatterConfig {
    /// Render messages for passing checks too (template smoke-testing).
    pub always_format: bool,
}

/// A formatter with explicit configuration.
///
/// [`render`](MessageFormatter::render) behaves exactly like the free
/// function; [`rehearse`](MessageFormatter::rehearse) additionally lets
/// call sites exercise their templates on the success path when the
/// toggle is on.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageFormatter {
    config: FormatterConfig,
}

impl MessageFormatter {
    /// Create a formatter with the given configuration.
    pub fn new(config: FormatterConfig) -> Self {
        MessageFormatter { config }
    }

    /// Render a failure message. Identical to the free [`render`].
    pub fn render(&self, template: Option<&str>, args: &[Value]) -> String {
        render(template, args)
    }

    /// Exercise a template although the check passed.
    ///
    /// Returns `None` unless `always_format` is on. The rendered text is
    /// prefixed so it cannot be mistaken for a real failure message. As
    /// fault-proof as [`render`]: a broken template yields its
    /// diagnostic text rather than an error.
    pub fn rehearse(&self, template: Option<&str>, args: &[Value]) -> Option<String> {
        if !self.config.always_format {
            return None;
        }
        let message = match template {
            Some(raw) => {
                let prefixed = format!("{REHEARSAL_PREFIX}{raw}");
                render(Some(&prefixed), args)
            }
            None => render(None, args),
        };
        Some(message)
    }
}
