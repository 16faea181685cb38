//! SLF4J-placeholder translation.
//!
//! Rewrites `{}` tokens into `%s` so that only printf-style specifiers
//! remain for the rendering stage. Escape handling is per occurrence,
//! driven by the tail of the literal segment directly before it:
//!
//! | input   | output  | meaning                                        |
//! |---------|---------|------------------------------------------------|
//! | `{}`    | `%s`    | a placeholder                                  |
//! | `\{}`   | `{}`    | an escaped placeholder, kept literal           |
//! | `\\{}`  | `\%s`   | an escaped backslash, then a real placeholder  |
//! | `%{}`   | `%%%s`  | adjacent percent doubled so it stays literal   |
//!
//! Every character outside a `{}` occurrence and its escape/percent
//! context passes through verbatim. Templates with no `{}` substring are
//! returned borrowed, unchanged.

use std::borrow::Cow;
use std::sync::OnceLock;

use memchr::memmem::Finder;

/// The placeholder token.
const PLACEHOLDER: &str = "{}";

// Global singleton for the placeholder matcher
static PLACEHOLDER_FINDER: OnceLock<Finder<'static>> = OnceLock::new();

/// Get the shared placeholder matcher (lazily initialized).
///
/// Built once per process; immutable and safe to share across threads
/// thereafter.
fn placeholder_finder() -> &'static Finder<'static> {
    PLACEHOLDER_FINDER.get_or_init(|| Finder::new(PLACEHOLDER))
}

/// Translate every live `{}` token in `raw` into `%s`.
///
/// Total function: any input produces an output, and an input without
/// placeholders comes back as an identical borrow (including `""`).
pub fn translate(raw: &str) -> Cow<'_, str> {
    let finder = placeholder_finder();
    let Some(first) = finder.find(raw.as_bytes()) else {
        return Cow::Borrowed(raw);
    };

    let mut out = String::with_capacity(raw.len() + 8);
    let mut rest = raw;
    let mut at = first;
    loop {
        emit_segment(&mut out, &rest[..at]);
        rest = &rest[at + PLACEHOLDER.len()..];
        match finder.find(rest.as_bytes()) {
            Some(next) => at = next,
            None => break,
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Emit one literal segment plus the replacement for the `{}` that
/// followed it, resolving the escape context from the segment's tail.
///
/// Resolution order matters: two trailing backslashes beat one, and the
/// percent rule applies only on the conversion path.
fn emit_segment(out: &mut String, segment: &str) {
    if segment.ends_with("\\\\") {
        // Escaped backslash: collapse the pair, convert the placeholder.
        out.push_str(&segment[..segment.len() - 1]);
        out.push_str("%s");
    } else if segment.ends_with('\\') {
        // Escaped placeholder: drop the marker, keep the braces literal.
        out.push_str(&segment[..segment.len() - 1]);
        out.push_str(PLACEHOLDER);
    } else if segment.ends_with('%') {
        // Double the adjacent percent so the renderer reads it as literal.
        out.push_str(segment);
        out.push_str("%%s");
    } else {
        out.push_str(segment);
        out.push_str("%s");
    }
}
