use pretty_assertions::assert_eq;

use super::*;

// === Plain substitution ===

#[test]
fn literal_text_passes_through() {
    assert_eq!(render_safe("nothing to do", &[]), "nothing to do");
    assert_eq!(render_safe("", &[]), "");
}

#[test]
fn string_conversion_accepts_anything() {
    assert_eq!(render_safe("%s", &[Value::Int(2_147_483_647)]), "2147483647");
    assert_eq!(render_safe("%s", &[Value::string("text")]), "text");
    assert_eq!(render_safe("%s", &[Value::Bool(false)]), "false");
    assert_eq!(render_safe("%s", &[Value::Char('x')]), "x");
}

#[test]
fn null_renders_as_null_text() {
    assert_eq!(render_safe("%s", &[Value::Null]), "null");
    assert_eq!(render_safe("%d", &[Value::Null]), "null");
    assert_eq!(render_safe("%2d", &[Value::Null]), "null");
}

#[test]
fn deficit_is_padded_with_null() {
    assert_eq!(
        render_safe("two: %s and %s", &[Value::Int(1)]),
        "two: 1 and null"
    );
}

#[test]
fn surplus_arguments_are_ignored() {
    let args = [Value::Int(1), Value::Int(2), Value::Int(3)];
    assert_eq!(render_safe("only %s", &args), "only 1");
}

#[test]
fn literal_percent_and_newline() {
    assert_eq!(render_safe("100%% done", &[]), "100% done");
    assert_eq!(render_safe("a%nb", &[]), "a\nb");
}

// === Numeric conversions ===

#[test]
fn decimal_conversion() {
    assert_eq!(render_safe("%d", &[Value::Int(-42)]), "-42");
}

#[test]
fn hex_octal_conversions() {
    assert_eq!(render_safe("%x", &[Value::Int(255)]), "ff");
    assert_eq!(render_safe("%X", &[Value::Int(255)]), "FF");
    assert_eq!(render_safe("%o", &[Value::Int(8)]), "10");
}

#[test]
fn float_conversion_defaults_to_six_places() {
    assert_eq!(render_safe("%f", &[Value::Float(0.5)]), "0.500000");
}

#[test]
fn float_precision() {
    assert_eq!(render_safe("%.2f", &[Value::Float(2.675)]), "2.67");
    assert_eq!(render_safe("%.0f", &[Value::Float(2.5)]), "2");
}

#[test]
fn boolean_conversion_convention() {
    assert_eq!(render_safe("%b", &[Value::Bool(true)]), "true");
    assert_eq!(render_safe("%b", &[Value::Null]), "false");
    assert_eq!(render_safe("%b", &[Value::Int(0)]), "true");
}

#[test]
fn char_conversion() {
    assert_eq!(render_safe("%c", &[Value::Char('7')]), "7");
}

// === Width, flags, precision ===

#[test]
fn width_pads_left_by_default() {
    assert_eq!(render_safe("%5d", &[Value::Int(42)]), "   42");
}

#[test]
fn minus_flag_pads_right() {
    assert_eq!(render_safe("%-5d!", &[Value::Int(42)]), "42   !");
}

#[test]
fn zero_flag_fills_after_the_sign() {
    assert_eq!(render_safe("%05d", &[Value::Int(42)]), "00042");
    assert_eq!(render_safe("%05d", &[Value::Int(-42)]), "-0042");
}

#[test]
fn plus_flag_signs_non_negative_numbers() {
    assert_eq!(render_safe("%+d", &[Value::Int(42)]), "+42");
    assert_eq!(render_safe("%+d", &[Value::Int(-42)]), "-42");
}

#[test]
fn string_precision_truncates() {
    assert_eq!(render_safe("%.3s", &[Value::string("abcdef")]), "abc");
    assert_eq!(render_safe("%.9s", &[Value::string("abc")]), "abc");
}

#[test]
fn width_smaller_than_text_is_a_no_op() {
    assert_eq!(render_safe("%2d", &[Value::Int(2_147_483_647)]), "2147483647");
}

// === Degradation ===

#[test]
fn type_mismatch_degrades_to_diagnostic() {
    let out = render_safe("one bad placeholders: %d", &[Value::string("WTF")]);
    assert!(out.starts_with("Error 'conversion mismatch' occurred during message formatting."));
    assert!(out.contains("Format string: 'one bad placeholders: %d'"));
    assert!(out.contains("Argument 0: 'WTF'"));
}

#[test]
fn float_for_decimal_is_a_mismatch() {
    let out = render_safe("%d", &[Value::Float(1.5)]);
    assert!(out.starts_with("Error 'conversion mismatch'"));
}

#[test]
fn unknown_conversion_degrades() {
    let out = render_safe("%q", &[Value::Int(1)]);
    assert!(out.starts_with("Error 'unknown conversion'"));
    assert!(out.contains("Error: unknown conversion `%q`"));
}

#[test]
fn trailing_percent_degrades() {
    let out = render_safe("100%", &[]);
    assert!(out.starts_with("Error 'truncated specifier'"));
}

#[test]
fn precision_on_decimal_degrades() {
    let out = render_safe("%.2d", &[Value::Int(3)]);
    assert!(out.starts_with("Error 'invalid precision'"));
}

#[test]
fn diagnostic_lists_supplied_arguments_in_order() {
    let args = [Value::Int(1), Value::Null, Value::string("last")];
    let out = render_safe("%d %q", &args);
    assert!(out.contains("Argument 0: '1'\n"));
    assert!(out.contains("Argument 1: 'null'\n"));
    assert!(out.contains("Argument 2: 'last'\n"));
}

#[test]
fn diagnostic_trims_the_template() {
    let out = render_safe("  %q  ", &[]);
    assert!(out.contains("Format string: '%q'"));
}

// === Purity ===

#[test]
fn identical_inputs_render_identically() {
    let args = [Value::Int(9), Value::string("x")];
    assert_eq!(
        render_safe("%d then %s", &args),
        render_safe("%d then %s", &args)
    );
}
