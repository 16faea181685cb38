//! Printf-style specifier counting and parsing.
//!
//! A *live* specifier is any `%` that is not immediately followed by
//! another `%`; the pair `%%` is a literal percent and contributes
//! nothing to the count. Counting decides how many arguments the padder
//! must provide; parsing drives the renderer's substitution loop.
//!
//! Grammar accepted by the parser:
//!
//! ```text
//! specifier  := '%' flag* width? ('.' precision)? conversion
//! flag       := '-' | '0' | '+'
//! conversion := 's' 'b' 'd' 'x' 'X' 'o' 'f' 'e' 'E' 'g' 'c'
//! ```
//!
//! `%%` and `%n` are handled before the grammar applies. Anything else is
//! a fault for the renderer to degrade on, never a panic.

use crate::error::RenderError;

/// Upper bound on parsed width/precision. Degenerate templates asking
/// for gigabyte paddings are clamped instead of exhausting memory.
const MAX_PAD: usize = 1 << 20;

/// Count the live specifiers in a translated template.
pub fn count_specifiers(translated: &str) -> usize {
    let bytes = translated.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while let Some(at) = memchr::memchr(b'%', &bytes[i..]) {
        let pos = i + at;
        if bytes.get(pos + 1) == Some(&b'%') {
            i = pos + 2;
        } else {
            count += 1;
            i = pos + 1;
        }
    }
    count
}

/// One parsed conversion specifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Spec {
    /// `-` flag: pad on the right instead of the left.
    pub(crate) left_justify: bool,
    /// `0` flag: fill with zeros after any sign.
    pub(crate) zero_pad: bool,
    /// `+` flag: force a sign on non-negative numbers.
    pub(crate) plus_sign: bool,
    /// Minimum field width.
    pub(crate) width: Option<usize>,
    /// Precision (string truncation or decimal places).
    pub(crate) precision: Option<usize>,
    /// Conversion character.
    pub(crate) conversion: char,
}

/// A piece of a translated template, as consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Segment<'a> {
    /// A run of literal text (contains no `%`).
    Literal(&'a str),
    /// A `%%` pair: one literal percent.
    LiteralPercent,
    /// A `%n`: one newline, consuming no argument.
    Newline,
    /// A conversion specifier, consuming the next argument.
    Conversion(Spec),
}

/// Iterator over the segments of a translated template.
///
/// Yields at most one `Err`, then fuses.
pub(crate) struct Segments<'a> {
    rest: &'a str,
    failed: bool,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(translated: &'a str) -> Self {
        Segments {
            rest: translated,
            failed: false,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, RenderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        if bytes[0] != b'%' {
            let end = memchr::memchr(b'%', bytes).unwrap_or(bytes.len());
            let (literal, rest) = self.rest.split_at(end);
            self.rest = rest;
            return Some(Ok(Segment::Literal(literal)));
        }

        let after = &self.rest[1..];
        match after.as_bytes().first() {
            None => {
                self.failed = true;
                Some(Err(RenderError::Truncated))
            }
            Some(b'%') => {
                self.rest = &after[1..];
                Some(Ok(Segment::LiteralPercent))
            }
            Some(b'n') => {
                self.rest = &after[1..];
                Some(Ok(Segment::Newline))
            }
            Some(_) => match parse_spec(after) {
                Ok((spec, consumed)) => {
                    self.rest = &after[consumed..];
                    Some(Ok(Segment::Conversion(spec)))
                }
                Err(err) => {
                    self.failed = true;
                    Some(Err(err))
                }
            },
        }
    }
}

/// Parse one specifier body (everything after the `%`).
///
/// Returns the spec and the number of bytes consumed.
fn parse_spec(body: &str) -> Result<(Spec, usize), RenderError> {
    let bytes = body.as_bytes();
    let mut left_justify = false;
    let mut zero_pad = false;
    let mut plus_sign = false;
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        match b {
            b'-' => left_justify = true,
            b'0' => zero_pad = true,
            b'+' => plus_sign = true,
            _ => break,
        }
        i += 1;
    }

    let width = parse_number(bytes, &mut i);

    let precision = if bytes.get(i) == Some(&b'.') {
        i += 1;
        Some(parse_number(bytes, &mut i).unwrap_or(0))
    } else {
        None
    };

    let Some(conversion) = body[i..].chars().next() else {
        return Err(RenderError::Truncated);
    };
    if !matches!(
        conversion,
        's' | 'b' | 'd' | 'x' | 'X' | 'o' | 'f' | 'e' | 'E' | 'g' | 'c'
    ) {
        return Err(RenderError::UnknownConversion { conversion });
    }
    if precision.is_some() && matches!(conversion, 'd' | 'x' | 'X' | 'o' | 'c' | 'b') {
        return Err(RenderError::Precision { conversion });
    }

    let spec = Spec {
        left_justify,
        zero_pad,
        plus_sign,
        width,
        precision,
        conversion,
    };
    Ok((spec, i + conversion.len_utf8()))
}

/// Parse a run of ASCII digits at `*i`, clamped to [`MAX_PAD`].
fn parse_number(bytes: &[u8], i: &mut usize) -> Option<usize> {
    let start = *i;
    let mut value = 0usize;
    while let Some(&b) = bytes.get(*i) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(b - b'0'));
        *i += 1;
    }
    (*i > start).then_some(value.min(MAX_PAD))
}
