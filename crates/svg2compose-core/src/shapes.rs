//! Basic shape elements as path commands.
//!
//! Every converter returns an empty list for geometry that cannot be drawn (non-positive size or
//! radius, too few points); the walker drops such shapes.

use crate::geom::{Point, point};
use crate::path::PathCommand;
use regex::Regex;
use std::sync::OnceLock;

/// Rectangle, optionally rounded. Corners are visited clockwise from the top-left.
///
/// A missing radius takes the other one's value; both are clamped to half the side length.
pub fn rect_to_path(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rx: Option<f64>,
    ry: Option<f64>,
) -> Vec<PathCommand> {
    if !(width > 0.0 && height > 0.0) {
        return Vec::new();
    }

    let rx = rx.filter(|v| *v >= 0.0);
    let ry = ry.filter(|v| *v >= 0.0);
    let (rx, ry) = match (rx, ry) {
        (Some(rx), Some(ry)) => (rx, ry),
        (Some(r), None) | (None, Some(r)) => (r, r),
        (None, None) => (0.0, 0.0),
    };
    let rx = rx.min(width / 2.0);
    let ry = ry.min(height / 2.0);

    let right = x + width;
    let bottom = y + height;

    if rx <= 0.0 || ry <= 0.0 {
        return vec![
            PathCommand::MoveTo { x, y },
            PathCommand::LineTo { x: right, y },
            PathCommand::LineTo {
                x: right,
                y: bottom,
            },
            PathCommand::LineTo { x, y: bottom },
            PathCommand::Close,
        ];
    }

    let corner = |x1: f64, y1: f64| PathCommand::ArcTo {
        horizontal_ellipse_radius: rx,
        vertical_ellipse_radius: ry,
        theta: 0.0,
        is_more_than_half: false,
        is_positive_arc: true,
        x1,
        y1,
    };
    vec![
        PathCommand::MoveTo { x: x + rx, y },
        PathCommand::LineTo { x: right - rx, y },
        corner(right, y + ry),
        PathCommand::LineTo {
            x: right,
            y: bottom - ry,
        },
        corner(right - rx, bottom),
        PathCommand::LineTo {
            x: x + rx,
            y: bottom,
        },
        corner(x, bottom - ry),
        PathCommand::LineTo { x, y: y + ry },
        corner(x + rx, y),
        PathCommand::Close,
    ]
}

pub fn circle_to_path(cx: f64, cy: f64, r: f64) -> Vec<PathCommand> {
    ellipse_to_path(cx, cy, r, r)
}

/// Starts at the leftmost point and sweeps four quarter arcs clockwise (top, right, bottom, back to
/// the start), then closes.
pub fn ellipse_to_path(cx: f64, cy: f64, rx: f64, ry: f64) -> Vec<PathCommand> {
    if !(rx > 0.0 && ry > 0.0) {
        return Vec::new();
    }

    let quarter = |x1: f64, y1: f64| PathCommand::ArcTo {
        horizontal_ellipse_radius: rx,
        vertical_ellipse_radius: ry,
        theta: 0.0,
        is_more_than_half: false,
        is_positive_arc: true,
        x1,
        y1,
    };
    vec![
        PathCommand::MoveTo { x: cx - rx, y: cy },
        quarter(cx, cy - ry),
        quarter(cx + rx, cy),
        quarter(cx, cy + ry),
        quarter(cx - rx, cy),
        PathCommand::Close,
    ]
}

pub fn line_to_path(x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo { x: x1, y: y1 },
        PathCommand::LineTo { x: x2, y: y2 },
    ]
}

pub fn polygon_to_path(points: &[Point]) -> Vec<PathCommand> {
    if points.len() < 3 {
        return Vec::new();
    }
    let mut out = polyline_commands(points);
    out.push(PathCommand::Close);
    out
}

pub fn polyline_to_path(points: &[Point]) -> Vec<PathCommand> {
    if points.len() < 2 {
        return Vec::new();
    }
    polyline_commands(points)
}

fn polyline_commands(points: &[Point]) -> Vec<PathCommand> {
    points
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            if idx == 0 {
                PathCommand::MoveTo { x: p.x, y: p.y }
            } else {
                PathCommand::LineTo { x: p.x, y: p.y }
            }
        })
        .collect()
}

fn point_separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,]+").expect("valid regex"))
}

/// Parses a `points` attribute. Parsing stops at the first token that is not a number, and an odd
/// trailing coordinate is ignored.
pub fn parse_points(value: &str) -> Vec<Point> {
    let numbers: Vec<f64> = point_separator_regex()
        .split(value.trim())
        .filter(|s| !s.is_empty())
        .map_while(|s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect();
    numbers
        .chunks_exact(2)
        .map(|pair| point(pair[0], pair[1]))
        .collect()
}
