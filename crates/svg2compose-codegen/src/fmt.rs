//! Kotlin literal formatting.

/// Formats `v` as a Kotlin `Float` literal: `24f`, `1.5f`, `-0.25f`.
///
/// Values are rounded to 6 fractional digits and printed in shortest round-trip form. Non-finite
/// values and `-0` print as `0f`.
pub fn fmt_float(v: f64) -> String {
    format!("{}f", FloatValue(v))
}

/// `fmt_float` with a `.dp` suffix, for builder sizes.
pub fn fmt_dp(v: f64) -> String {
    format!("{}.dp", fmt_float(v))
}

#[derive(Debug, Clone, Copy)]
struct FloatValue(f64);

impl std::fmt::Display for FloatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        if !v.is_finite() {
            return f.write_str("0");
        }

        let mut v = (v * 1e6).round() / 1e6;
        let nearest = v.round();
        if (v - nearest).abs() < 1e-9 {
            v = nearest;
        }
        if v == -0.0 {
            v = 0.0;
        }

        write!(f, "{v}")
    }
}

/// An 8-bit alpha as a fraction with at most 3 decimals (`128` is `0.502f`).
pub fn fmt_alpha_fraction(alpha: u8) -> String {
    let k = (f64::from(alpha) / 255.0 * 1000.0).round() as i64;
    let mut out = format!("{}.{:03}", k / 1000, k % 1000);
    trim_trailing_zeros_and_dot(&mut out);
    out.push('f');
    out
}

fn trim_trailing_zeros_and_dot(out: &mut String) {
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
}

/// Kotlin string literal contents: escapes `\`, `"` and `$`.
pub fn escape_kotlin_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}
