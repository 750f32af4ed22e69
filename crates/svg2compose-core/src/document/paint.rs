use super::context::ParseContext;
use super::style::Style;
use super::units::{parse_opacity, url_reference};
use crate::color::{Color, parse_color};
use crate::geom::point;
use crate::ir::{ColorStop, Fill};
use crate::warning::Warning;
use roxmltree::{Document, Node};
use rustc_hash::FxHashMap;

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Bound on `href` chains between gradients (guards against reference cycles).
const MAX_HREF_DEPTH: usize = 8;

/// Registers every `linearGradient` / `radialGradient` with an id, wherever it appears, so paint
/// references can point forward in the document.
pub(crate) fn register_gradients(doc: &Document<'_>, ctx: &mut ParseContext) {
    let gradients: Vec<(&str, Node<'_, '_>)> = doc
        .descendants()
        .filter(|n| is_gradient(n))
        .filter_map(|n| n.attribute("id").map(|id| (id, n)))
        .collect();
    let by_id: FxHashMap<&str, Node<'_, '_>> = gradients.iter().copied().collect();

    for (id, node) in &gradients {
        let stops = resolve_stops(*node, &by_id, ctx);
        if stops.is_empty() {
            tracing::debug!(id = %id, "gradient without stops is not registered");
            continue;
        }
        let fill = match node.tag_name().name() {
            "linearGradient" => Fill::LinearGradient {
                start: point(coordinate(*node, "x1", 0.0), coordinate(*node, "y1", 0.0)),
                end: point(coordinate(*node, "x2", 100.0), coordinate(*node, "y2", 0.0)),
                color_stops: stops,
            },
            _ => {
                let fx = node.attribute("fx").map(|_| coordinate(*node, "fx", 50.0));
                let fy = node.attribute("fy").map(|_| coordinate(*node, "fy", 50.0));
                let cx = coordinate(*node, "cx", 50.0);
                let cy = coordinate(*node, "cy", 50.0);
                let focal = match (fx, fy) {
                    (None, None) => None,
                    (fx, fy) => Some(point(fx.unwrap_or(cx), fy.unwrap_or(cy))),
                };
                Fill::RadialGradient {
                    center: point(cx, cy),
                    radius: coordinate(*node, "r", 50.0),
                    focal,
                    color_stops: stops,
                }
            }
        };
        ctx.register_gradient(*id, fill);
    }
}

fn is_gradient(node: &Node<'_, '_>) -> bool {
    node.is_element() && matches!(node.tag_name().name(), "linearGradient" | "radialGradient")
}

/// Gradient coordinate. A percentage keeps its number (`"100%"` is `100`); gradient units and
/// `gradientTransform` are not applied.
fn coordinate(node: Node<'_, '_>, name: &str, default: f64) -> f64 {
    node.attribute(name)
        .map(|v| v.trim().trim_end_matches('%').trim())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// A gradient without its own stops borrows them from the gradient its `href` points at.
fn resolve_stops<'a, 'input>(
    node: Node<'a, 'input>,
    by_id: &FxHashMap<&str, Node<'a, 'input>>,
    ctx: &mut ParseContext,
) -> Vec<ColorStop> {
    let mut current = node;
    for _ in 0..MAX_HREF_DEPTH {
        let stops: Vec<ColorStop> = current
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "stop")
            .map(|stop| parse_stop(stop, ctx))
            .collect();
        if !stops.is_empty() {
            return stops;
        }
        let href = current
            .attribute((XLINK_NS, "href"))
            .or_else(|| current.attribute("href"))
            .map(|h| h.trim().trim_start_matches('#'));
        let Some(next) = href.and_then(|id| by_id.get(id)) else {
            break;
        };
        current = *next;
    }
    Vec::new()
}

fn parse_stop(stop: Node<'_, '_>, ctx: &mut ParseContext) -> ColorStop {
    let style = Style::of(stop);

    let offset = style
        .get("offset")
        .and_then(|v| match v.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f64>().ok().map(|p| p / 100.0),
            None => v.parse::<f64>().ok(),
        })
        .filter(|v| v.is_finite())
        .map_or(0.0, |v| v.clamp(0.0, 1.0));

    let color = match style.get("stop-color") {
        None => Color::BLACK,
        Some(value) if url_reference(value).is_some() => Color::BLACK,
        Some(value) => match parse_color(value) {
            Ok(Some(color)) => color,
            Ok(None) => Color::TRANSPARENT,
            Err(err) => {
                ctx.warn(Warning::InvalidColor {
                    value: value.to_string(),
                    reason: err.to_string(),
                });
                Color::BLACK
            }
        },
    };
    let color = match style.get("stop-opacity").and_then(parse_opacity) {
        Some(opacity) => color.with_opacity(opacity),
        None => color,
    };

    ColorStop { offset, color }
}
