use super::context::ParseContext;
use super::units::{parse_length, parse_opacity, url_reference};
use crate::color::{Color, parse_color};
use crate::ir::{Fill, VectorPath};
use crate::warning::{ReferenceKind, Warning};
use roxmltree::Node;

/// Presentation properties of one element: inline `style` declarations win over same-named
/// attributes. There is no inheritance from ancestors.
pub(crate) struct Style<'a, 'input> {
    node: Node<'a, 'input>,
    declarations: Vec<(String, &'a str)>,
}

impl<'a, 'input> Style<'a, 'input> {
    pub(crate) fn of(node: Node<'a, 'input>) -> Self {
        let declarations = node.attribute("style").map(parse_declarations).unwrap_or_default();
        Self { node, declarations }
    }

    pub(crate) fn get(&self, property: &str) -> Option<&'a str> {
        self.declarations
            .iter()
            .rev()
            .find(|(k, _)| k == property)
            .map(|(_, v)| *v)
            .or_else(|| self.node.attribute(property))
            .map(str::trim)
    }
}

/// Splits `prop: value; prop: value`. Declarations without a `:` are skipped.
pub(crate) fn parse_declarations(style: &str) -> Vec<(String, &str)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (key, value) = decl.split_once(':')?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_ascii_lowercase(), value.trim()))
        })
        .collect()
}

/// Resolves paint and stroke properties onto `path`.
///
/// An unspecified `fill` is opaque black; an unspecified `stroke` is no stroke.
pub(crate) fn apply_style(path: &mut VectorPath, style: &Style<'_, '_>, ctx: &mut ParseContext) {
    path.fill = match style.get("fill") {
        None => Some(Fill::SolidColor(Color::BLACK)),
        Some(value) => resolve_paint(value, ctx),
    };
    path.stroke = style.get("stroke").and_then(|value| resolve_paint(value, ctx));

    let opacity = style.get("opacity").and_then(parse_opacity).unwrap_or(1.0);
    let fill_opacity = style.get("fill-opacity").and_then(parse_opacity).unwrap_or(1.0);
    let stroke_opacity = style
        .get("stroke-opacity")
        .and_then(parse_opacity)
        .unwrap_or(1.0);
    path.fill_alpha = fill_opacity * opacity;
    path.stroke_alpha = stroke_opacity * opacity;

    if let Some(width) = style.get("stroke-width").and_then(parse_length) {
        path.stroke_line_width = width.max(0.0);
    }
    if let Some(cap) = style.get("stroke-linecap").and_then(|v| v.parse().ok()) {
        path.stroke_line_cap = cap;
    }
    if let Some(join) = style.get("stroke-linejoin").and_then(|v| v.parse().ok()) {
        path.stroke_line_join = join;
    }
    if let Some(miter) = style
        .get("stroke-miterlimit")
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 1.0)
    {
        path.stroke_line_miter = miter;
    }
    if let Some(rule) = style.get("fill-rule").and_then(|v| v.parse().ok()) {
        path.path_fill_type = rule;
    }
}

/// `url(#id)` resolves through registered gradients (opaque black when unknown); anything else is
/// a color, where `none` and invalid colors both mean no paint.
pub(crate) fn resolve_paint(value: &str, ctx: &mut ParseContext) -> Option<Fill> {
    if let Some(id) = url_reference(value) {
        if let Some(fill) = ctx.gradient(id) {
            return Some(fill.clone());
        }
        ctx.warn(Warning::UnregisteredReference {
            reference: ReferenceKind::Gradient,
            id: id.to_string(),
        });
        return Some(Fill::SolidColor(Color::BLACK));
    }

    match parse_color(value) {
        Ok(color) => color.map(Fill::SolidColor),
        Err(err) => {
            ctx.warn(Warning::InvalidColor {
                value: value.to_string(),
                reason: err.to_string(),
            });
            None
        }
    }
}
