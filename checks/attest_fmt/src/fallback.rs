//! Last-ditch message composition when no template was supplied.

use std::fmt::Write as _;

use attest_value::Value;

/// Compose the dump-all-arguments message used when the template is
/// absent.
///
/// Produces exactly
/// `The format string was (null). The passed N arguments are: 'a0' 'a1' …`
/// with each argument single-quoted in its display form (`null` for
/// absent values) and single-space separated. With zero arguments the
/// trailing `": "` is kept as-is.
///
/// Pure concatenation: this path never enters the specifier engine and
/// therefore cannot fail on a type mismatch.
pub fn compose_fallback(args: &[Value]) -> String {
    let mut out = format!(
        "The format string was (null). The passed {} arguments are: ",
        args.len()
    );
    let mut separate = false;
    for argument in args {
        if separate {
            out.push(' ');
        }
        let _ = write!(out, "'{argument}'");
        separate = true;
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn zero_arguments_keeps_trailing_space() {
        assert_eq!(
            compose_fallback(&[]),
            "The format string was (null). The passed 0 arguments are: "
        );
    }

    #[test]
    fn arguments_are_quoted_and_space_separated() {
        let args = [Value::string("A"), Value::string("B")];
        assert_eq!(
            compose_fallback(&args),
            "The format string was (null). The passed 2 arguments are: 'A' 'B'"
        );
    }

    #[test]
    fn null_argument_renders_as_null_text() {
        let args = [Value::Null, Value::Int(7)];
        assert_eq!(
            compose_fallback(&args),
            "The format string was (null). The passed 2 arguments are: 'null' '7'"
        );
    }

    #[test]
    fn five_arguments() {
        let args: Vec<Value> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|s| Value::string(*s))
            .collect();
        assert_eq!(
            compose_fallback(&args),
            "The format string was (null). The passed 5 arguments are: 'A' 'B' 'C' 'D' 'E'"
        );
    }
}
