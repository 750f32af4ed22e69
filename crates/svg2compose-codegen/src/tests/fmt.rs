use crate::fmt::*;

#[test]
fn floats_print_kotlin_style() {
    assert_eq!(fmt_float(24.0), "24f");
    assert_eq!(fmt_float(1.5), "1.5f");
    assert_eq!(fmt_float(-3.5), "-3.5f");
    assert_eq!(fmt_float(15.09), "15.09f");
    assert_eq!(fmt_float(0.1 + 0.2), "0.3f");
    assert_eq!(fmt_float(1.234_567_89), "1.234568f");
}

#[test]
fn floats_never_print_negative_zero_or_noise() {
    assert_eq!(fmt_float(-0.0), "0f");
    assert_eq!(fmt_float(-1e-9), "0f");
    assert_eq!(fmt_float(2.000_000_000_1), "2f");
    assert_eq!(fmt_float(f64::NAN), "0f");
    assert_eq!(fmt_float(f64::INFINITY), "0f");
}

#[test]
fn sizes_are_dp() {
    assert_eq!(fmt_dp(24.0), "24f.dp");
    assert_eq!(fmt_dp(17.5), "17.5f.dp");
}

#[test]
fn alpha_fraction_has_at_most_three_decimals() {
    assert_eq!(fmt_alpha_fraction(128), "0.502f");
    assert_eq!(fmt_alpha_fraction(51), "0.2f");
    assert_eq!(fmt_alpha_fraction(255), "1f");
    assert_eq!(fmt_alpha_fraction(0), "0f");
}

#[test]
fn kotlin_strings_are_escaped() {
    assert_eq!(escape_kotlin_string(r#"a"b"#), r#"a\"b"#);
    assert_eq!(escape_kotlin_string("$icon"), "\\$icon");
    assert_eq!(escape_kotlin_string("plain"), "plain");
}
