//! Color and brush expressions.

use crate::fmt::{fmt_alpha_fraction, fmt_float};
use crate::imports;
use std::collections::{BTreeMap, BTreeSet};
use svg2compose_core::{Color, ColorStop, Fill};

/// How colors are spelled in generated code.
///
/// An override replaces the whole expression for an exact ARGB value, e.g. a Kotlin parameter
/// name or a theme lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColorStyle<'a> {
    pub use_named_colors: bool,
    pub overrides: &'a BTreeMap<Color, String>,
}

impl ColorStyle<'_> {
    pub fn expression(&self, color: Color) -> String {
        match self.overrides.get(&color) {
            Some(replacement) => replacement.clone(),
            None => color_expression(color, self.use_named_colors),
        }
    }
}

/// `Color.Red`, `Color.Red.copy(alpha = 0.502f)` or `Color(0xAARRGGBB)`.
pub fn color_expression(color: Color, use_named_colors: bool) -> String {
    let named = use_named_colors.then(|| color.compose_name()).flatten();
    match named {
        Some(name) if color.is_opaque() => format!("Color.{name}"),
        Some(name) => format!(
            "Color.{name}.copy(alpha = {})",
            fmt_alpha_fraction(color.alpha())
        ),
        None => format!("Color(0x{:08X})", color.argb()),
    }
}

/// Lines of a fill expression, to be placed after `fill = ` / `stroke = `.
///
/// Solid colors are one line. Gradients span several lines; continuation lines are indented
/// relative to the first by `indent` per level and carry no base indentation.
pub(crate) fn fill_expression(
    fill: &Fill,
    colors: ColorStyle<'_>,
    indent: &str,
    trailing_commas: bool,
    imports_out: &mut BTreeSet<String>,
) -> Vec<String> {
    imports_out.insert(imports::COLOR.to_string());
    match fill {
        Fill::SolidColor(color) => {
            imports_out.insert(imports::SOLID_COLOR.to_string());
            vec![format!("SolidColor({})", colors.expression(*color))]
        }
        Fill::LinearGradient {
            start,
            end,
            color_stops,
        } => {
            imports_out.insert(imports::BRUSH.to_string());
            imports_out.insert(imports::OFFSET.to_string());
            let mut args = vec![stops_argument(color_stops, colors, indent, trailing_commas)];
            args.push(vec![format!(
                "start = Offset({}, {})",
                fmt_float(start.x),
                fmt_float(start.y)
            )]);
            args.push(vec![format!(
                "end = Offset({}, {})",
                fmt_float(end.x),
                fmt_float(end.y)
            )]);
            call_lines("Brush.linearGradient", args, indent, trailing_commas)
        }
        Fill::RadialGradient {
            center,
            radius,
            color_stops,
            ..
        } => {
            imports_out.insert(imports::BRUSH.to_string());
            imports_out.insert(imports::OFFSET.to_string());
            let mut args = vec![stops_argument(color_stops, colors, indent, trailing_commas)];
            args.push(vec![format!(
                "center = Offset({}, {})",
                fmt_float(center.x),
                fmt_float(center.y)
            )]);
            args.push(vec![format!("radius = {}", fmt_float(*radius))]);
            call_lines("Brush.radialGradient", args, indent, trailing_commas)
        }
    }
}

fn stops_argument(
    stops: &[ColorStop],
    colors: ColorStyle<'_>,
    indent: &str,
    trailing_commas: bool,
) -> Vec<String> {
    let entries = stops
        .iter()
        .map(|stop| {
            vec![format!(
                "{} to {}",
                fmt_float(stop.offset),
                colors.expression(stop.color)
            )]
        })
        .collect();
    let mut lines = call_lines("arrayOf", entries, indent, trailing_commas);
    if let Some(first) = lines.first_mut() {
        first.insert_str(0, "colorStops = ");
    }
    lines
}

/// `name(` / one argument per line / `)`. Each argument may itself span several lines.
pub(crate) fn call_lines(
    name: &str,
    args: Vec<Vec<String>>,
    indent: &str,
    trailing_commas: bool,
) -> Vec<String> {
    let mut lines = vec![format!("{name}(")];
    let count = args.len();
    for (idx, arg) in args.into_iter().enumerate() {
        let last_arg = idx + 1 == count;
        let arg_len = arg.len();
        for (line_idx, line) in arg.into_iter().enumerate() {
            let comma = line_idx + 1 == arg_len && (!last_arg || trailing_commas);
            lines.push(format!("{indent}{line}{}", if comma { "," } else { "" }));
        }
    }
    lines.push(")".to_string());
    lines
}
