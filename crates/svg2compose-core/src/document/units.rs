use regex::Regex;
use std::sync::OnceLock;

pub(crate) const DEFAULT_SIZE: f64 = 24.0;

/// Longest first, so `rem` is not mistaken for `em`.
const UNIT_SUFFIXES: &[&str] = &[
    "rem", "dip", "px", "pt", "pc", "mm", "cm", "in", "dp", "sp", "em",
];

/// Parses an SVG length, ignoring the unit. Percentages have no absolute value and yield `None`.
pub(crate) fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.ends_with('%') {
        return None;
    }
    let number = UNIT_SUFFIXES
        .iter()
        .find_map(|unit| value.strip_suffix(unit))
        .unwrap_or(value)
        .trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Root `width` / `height`: positive lengths only, otherwise the 24-unit default.
pub(crate) fn parse_dimension(value: Option<&str>) -> f64 {
    value
        .and_then(parse_length)
        .filter(|v| *v > 0.0)
        .unwrap_or(DEFAULT_SIZE)
}

fn view_box_separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,]+").expect("valid regex"))
}

/// Width and height of `viewBox="min-x min-y width height"`, when well formed and positive.
pub(crate) fn parse_view_box(value: &str) -> Option<(f64, f64)> {
    let parts: Vec<f64> = view_box_separator_regex()
        .split(value.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [_, _, w, h] if *w > 0.0 && *h > 0.0 => Some((*w, *h)),
        _ => None,
    }
}

/// Opacity as a fraction or percentage, clamped to `[0, 1]`.
pub(crate) fn parse_opacity(value: &str) -> Option<f64> {
    let value = value.trim();
    let v = match value.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
        None => value.parse::<f64>().ok()?,
    };
    v.is_finite().then(|| v.clamp(0.0, 1.0))
}

/// The id inside `url(#id)`, tolerating quotes and a trailing fallback paint.
pub(crate) fn url_reference(value: &str) -> Option<&str> {
    let inner = value.trim().strip_prefix("url(")?;
    let end = inner.find(')')?;
    let id = inner[..end]
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim_start_matches('#');
    (!id.is_empty()).then_some(id)
}
