#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Transform = euclid::Transform2D<f64, Unit, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// Builds a transform from SVG `matrix(a, b, c, d, e, f)` components.
///
/// SVG maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`, which lines up with euclid's row-vector
/// layout (`m11 = a`, `m12 = b`, `m21 = c`, `m22 = d`, `m31 = e`, `m32 = f`).
pub fn svg_matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Transform {
    Transform::new(a, b, c, d, e, f)
}
