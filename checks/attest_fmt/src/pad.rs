//! Argument-count reconciliation.

use std::borrow::Cow;

use attest_value::Value;

use crate::specifier::count_specifiers;

/// Reconcile an argument sequence with the translated template.
///
/// When the template has no more specifiers than there are arguments the
/// sequence is returned borrowed, untouched; surplus arguments are kept
/// and later ignored by the renderer. When specifiers outnumber
/// arguments, a new sequence of exactly specifier-count length is built:
/// the supplied arguments in their original order, then [`Value::Null`]
/// markers, which render as the text `null`.
///
/// Padding only ever adds; it never removes or reorders.
pub fn pad<'a>(translated: &str, args: &'a [Value]) -> Cow<'a, [Value]> {
    let needed = count_specifiers(translated);
    if needed <= args.len() {
        return Cow::Borrowed(args);
    }
    let mut padded = Vec::with_capacity(needed);
    padded.extend_from_slice(args);
    padded.resize(needed, Value::Null);
    Cow::Owned(padded)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn enough_arguments_borrows_unchanged() {
        let args = [Value::Int(1), Value::Int(2)];
        let padded = pad("%s and %s", &args);
        assert!(matches!(padded, Cow::Borrowed(_)));
        assert_eq!(padded.as_ref(), &args);
    }

    #[test]
    fn surplus_arguments_are_retained() {
        let args = [Value::Int(1), Value::Int(2), Value::Int(3)];
        let padded = pad("only %s here", &args);
        assert_eq!(padded.len(), 3);
    }

    #[test]
    fn deficit_is_filled_with_null_markers() {
        let args = [Value::string("A")];
        let padded = pad("%s %s %s", &args);
        assert_eq!(
            padded.as_ref(),
            &[Value::string("A"), Value::Null, Value::Null]
        );
    }

    #[test]
    fn no_specifiers_no_padding() {
        let padded = pad("plain text", &[]);
        assert!(padded.is_empty());
    }

    #[test]
    fn literal_percent_pairs_need_no_arguments() {
        let padded = pad("100%% sure", &[]);
        assert!(padded.is_empty());
    }
}
