//! SVG `transform` attribute parsing.
//!
//! Transform functions compose left to right into one affine matrix (`M = M1 · M2 · … · Mn`),
//! which is then decomposed into the translation / rotation / scale parameters a vector group
//! supports. Decomposition assumes `M = T · R · S`; any shear (from `skewX`, `skewY` or a general
//! `matrix(...)`) has no counterpart and is dropped.

use crate::geom::{Transform, svg_matrix};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffineParams {
    pub translation_x: f64,
    pub translation_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Degrees, in `(-180, 180]`.
    pub rotation: f64,
}

impl Default for AffineParams {
    fn default() -> Self {
        Self {
            translation_x: 0.0,
            translation_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
        }
    }
}

impl AffineParams {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    pub fn from_matrix(m: &Transform) -> Self {
        let (a, b, c, d) = (m.m11, m.m12, m.m21, m.m22);

        let scale_x = a.hypot(b);
        let rotation = if scale_x == 0.0 {
            0.0
        } else {
            b.atan2(a).to_degrees()
        };
        let det = a * d - b * c;
        let scale_y = if det < 0.0 {
            -c.hypot(d)
        } else {
            c.hypot(d)
        };

        Self {
            translation_x: snap(m.m31),
            translation_y: snap(m.m32),
            scale_x: snap(scale_x),
            scale_y: snap(scale_y),
            rotation: normalize_degrees(snap(rotation)),
        }
    }
}

/// Result of reading a transform list: the composed matrix plus the functions that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformList {
    pub matrix: Transform,
    pub skipped: Vec<String>,
}

impl TransformList {
    pub fn params(&self) -> AffineParams {
        AffineParams::from_matrix(&self.matrix)
    }
}

fn function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z]+)\s*\(([^)]*)\)").expect("valid regex"))
}

fn argument_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,]+").expect("valid regex"))
}

/// Parses a transform list and decomposes it.
///
/// Unknown or malformed functions are treated as identity rather than failing the document.
pub fn parse_transform(value: &str) -> AffineParams {
    parse_transform_list(value).params()
}

pub fn parse_transform_list(value: &str) -> TransformList {
    let mut matrix = Transform::identity();
    let mut skipped = Vec::new();

    for caps in function_regex().captures_iter(value) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let raw_args = caps.get(2).map_or("", |m| m.as_str()).trim();
        let args: Option<Vec<f64>> = argument_regex()
            .split(raw_args)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect();

        let Some(step) = args.and_then(|args| function_matrix(name, &args)) else {
            tracing::debug!(function = %caps.get(0).map_or("", |m| m.as_str()), "ignoring transform function");
            skipped.push(caps.get(0).map_or("", |m| m.as_str()).to_string());
            continue;
        };
        // `step` applies first, then everything composed so far.
        matrix = step.then(&matrix);
    }

    TransformList { matrix, skipped }
}

fn function_matrix(name: &str, args: &[f64]) -> Option<Transform> {
    let m = match (name, args) {
        ("translate", [tx]) => svg_matrix(1.0, 0.0, 0.0, 1.0, *tx, 0.0),
        ("translate", [tx, ty]) => svg_matrix(1.0, 0.0, 0.0, 1.0, *tx, *ty),
        ("scale", [s]) => svg_matrix(*s, 0.0, 0.0, *s, 0.0, 0.0),
        ("scale", [sx, sy]) => svg_matrix(*sx, 0.0, 0.0, *sy, 0.0, 0.0),
        ("rotate", [angle]) => rotation(*angle),
        ("rotate", [angle, cx, cy]) => {
            // translate(cx, cy) rotate(angle) translate(-cx, -cy)
            let to_origin = svg_matrix(1.0, 0.0, 0.0, 1.0, -cx, -cy);
            let back = svg_matrix(1.0, 0.0, 0.0, 1.0, *cx, *cy);
            to_origin.then(&rotation(*angle)).then(&back)
        }
        ("matrix", [a, b, c, d, e, f]) => svg_matrix(*a, *b, *c, *d, *e, *f),
        ("skewX", [angle]) => svg_matrix(1.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0),
        ("skewY", [angle]) => svg_matrix(1.0, angle.to_radians().tan(), 0.0, 1.0, 0.0, 0.0),
        _ => return None,
    };
    Some(m)
}

fn rotation(degrees: f64) -> Transform {
    let (sin, cos) = degrees.to_radians().sin_cos();
    svg_matrix(cos, sin, -sin, cos, 0.0, 0.0)
}

/// Rounds away floating-point noise around integers (`cos(90°)`, `atan2` of exact angles).
fn snap(v: f64) -> f64 {
    let nearest = v.round();
    if (v - nearest).abs() < 1e-9 {
        if nearest == 0.0 { 0.0 } else { nearest }
    } else {
        v
    }
}

fn normalize_degrees(deg: f64) -> f64 {
    if deg <= -180.0 { deg + 360.0 } else { deg }
}
