//! Fail-safe specifier substitution.
//!
//! The renderer runs on the failure path: it builds the text of an error
//! about to be raised, so a fault of its own would mask the original
//! failure. Every internal fault is therefore converted into descriptive
//! text embedded in the returned string. `render_safe` is total; from
//! the caller's point of view, rendering always succeeds.

use std::fmt::Write as _;

use attest_value::Value;

use crate::error::RenderError;
use crate::pad::pad;
use crate::specifier::{Segment, Segments, Spec};

/// Substitute `args` into a translated template.
///
/// Pads the argument sequence first (specifier deficits are filled with
/// `null` markers, surpluses are ignored), then substitutes left to
/// right. On any fault the diagnostic text for the fault is returned
/// instead of the formatted message.
pub fn render_safe(translated: &str, args: &[Value]) -> String {
    let padded = pad(translated, args);
    match try_render(translated, padded.as_ref()) {
        Ok(message) => message,
        Err(err) => {
            tracing::debug!("message formatting failed ({err}); returning diagnostic text");
            describe_failure(&err, translated, args)
        }
    }
}

/// The fallible substitution loop.
///
/// `args` must already be padded; a `MissingArgument` here means the
/// counter and the parser disagreed about the template.
fn try_render(translated: &str, args: &[Value]) -> Result<String, RenderError> {
    let mut out = String::with_capacity(translated.len() + 16);
    let mut next_arg = 0usize;
    for segment in Segments::new(translated) {
        match segment? {
            Segment::Literal(text) => out.push_str(text),
            Segment::LiteralPercent => out.push('%'),
            Segment::Newline => out.push('\n'),
            Segment::Conversion(spec) => {
                let index = next_arg;
                next_arg += 1;
                let value = args
                    .get(index)
                    .ok_or(RenderError::MissingArgument { index })?;
                let text = convert(&spec, value, index)?;
                emit_padded(&mut out, &text, &spec);
            }
        }
    }
    Ok(out)
}

/// Convert one value under one specifier.
///
/// An absent value renders as `null` under every conversion except `%b`,
/// which follows the boolean convention (absent is `false`, any present
/// non-boolean is `true`).
fn convert(spec: &Spec, value: &Value, index: usize) -> Result<String, RenderError> {
    let mismatch = || RenderError::Conversion {
        conversion: spec.conversion,
        found: value.kind(),
        index,
    };

    if value.is_null() {
        return Ok(if spec.conversion == 'b' {
            "false".to_owned()
        } else {
            "null".to_owned()
        });
    }

    let mut text = match spec.conversion {
        's' => value.to_string(),
        'b' => match value {
            Value::Bool(b) => b.to_string(),
            _ => "true".to_owned(),
        },
        'd' => match value {
            Value::Int(n) => n.to_string(),
            _ => return Err(mismatch()),
        },
        'x' => match value {
            Value::Int(n) => format!("{n:x}"),
            _ => return Err(mismatch()),
        },
        'X' => match value {
            Value::Int(n) => format!("{n:X}"),
            _ => return Err(mismatch()),
        },
        'o' => match value {
            Value::Int(n) => format!("{n:o}"),
            _ => return Err(mismatch()),
        },
        'f' => match value {
            Value::Float(x) => {
                let places = spec.precision.unwrap_or(6);
                format!("{x:.places$}")
            }
            _ => return Err(mismatch()),
        },
        'e' => match value {
            Value::Float(x) => match spec.precision {
                Some(places) => format!("{x:.places$e}"),
                None => format!("{x:e}"),
            },
            _ => return Err(mismatch()),
        },
        'E' => match value {
            Value::Float(x) => match spec.precision {
                Some(places) => format!("{x:.places$E}"),
                None => format!("{x:E}"),
            },
            _ => return Err(mismatch()),
        },
        'g' => match value {
            Value::Float(x) => x.to_string(),
            _ => return Err(mismatch()),
        },
        'c' => match value {
            Value::Char(c) => c.to_string(),
            _ => return Err(mismatch()),
        },
        other => return Err(RenderError::UnknownConversion { conversion: other }),
    };

    if spec.conversion == 's' {
        if let Some(limit) = spec.precision {
            if let Some((at, _)) = text.char_indices().nth(limit) {
                text.truncate(at);
            }
        }
    }

    if spec.plus_sign
        && matches!(spec.conversion, 'd' | 'f' | 'e' | 'E' | 'g')
        && !text.starts_with('-')
    {
        text.insert(0, '+');
    }

    Ok(text)
}

/// Write `text` into `out`, honoring field width and justification.
fn emit_padded(out: &mut String, text: &str, spec: &Spec) {
    let width = spec.width.unwrap_or(0);
    let len = text.chars().count();
    if len >= width {
        out.push_str(text);
    } else if spec.left_justify {
        out.push_str(text);
        for _ in len..width {
            out.push(' ');
        }
    } else if spec.zero_pad {
        // Zero fill goes between the sign and the digits.
        let (sign, body) = if let Some(rest) = text.strip_prefix('-') {
            ("-", rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            ("+", rest)
        } else {
            ("", text)
        };
        out.push_str(sign);
        for _ in len..width {
            out.push('0');
        }
        out.push_str(body);
    } else {
        for _ in len..width {
            out.push(' ');
        }
        out.push_str(text);
    }
}

/// Build the diagnostic returned in place of a failed rendering.
///
/// Lists, in order: the fault category, the exact translated (trimmed)
/// template, the fault itself, then every *supplied* argument on its own
/// line, 0-indexed, in original order.
fn describe_failure(err: &RenderError, translated: &str, supplied: &[Value]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Error '{}' occurred during message formatting.",
        err.category()
    );
    let _ = writeln!(out, "Format string: '{}'", translated.trim());
    let _ = writeln!(out, "Error: {err}");
    for (index, argument) in supplied.iter().enumerate() {
        let _ = writeln!(out, "Argument {index}: '{argument}'");
    }
    out
}

#[cfg(test)]
mod tests;
