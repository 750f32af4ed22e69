//! Path commands and the SVG path-data (`d` attribute) parser.

mod lexer;
mod parser;

pub use parser::parse_path_data;

use serde::Serialize;

/// One drawing command. Absolute and relative forms stay distinct because the generated code calls
/// different builder functions for each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    RelativeMoveTo {
        dx: f64,
        dy: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    RelativeLineTo {
        dx: f64,
        dy: f64,
    },
    HorizontalLineTo {
        x: f64,
    },
    RelativeHorizontalLineTo {
        dx: f64,
    },
    VerticalLineTo {
        y: f64,
    },
    RelativeVerticalLineTo {
        dy: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
    RelativeCurveTo {
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx3: f64,
        dy3: f64,
    },
    QuadTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    RelativeQuadTo {
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
    },
    /// Smooth cubic; the first control point is the reflection of the previous one.
    ReflectiveCurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    RelativeReflectiveCurveTo {
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
    },
    ReflectiveQuadTo {
        x: f64,
        y: f64,
    },
    RelativeReflectiveQuadTo {
        dx: f64,
        dy: f64,
    },
    ArcTo {
        horizontal_ellipse_radius: f64,
        vertical_ellipse_radius: f64,
        theta: f64,
        is_more_than_half: bool,
        is_positive_arc: bool,
        x1: f64,
        y1: f64,
    },
    RelativeArcTo {
        horizontal_ellipse_radius: f64,
        vertical_ellipse_radius: f64,
        theta: f64,
        is_more_than_half: bool,
        is_positive_arc: bool,
        dx1: f64,
        dy1: f64,
    },
    Close,
}

impl PathCommand {
    /// Number of numeric arguments per invocation of a path-data command letter.
    ///
    /// Arc flags count as arguments. `None` for letters outside the path grammar.
    pub fn arity(letter: u8) -> Option<usize> {
        match letter.to_ascii_uppercase() {
            b'Z' => Some(0),
            b'H' | b'V' => Some(1),
            b'M' | b'L' | b'T' => Some(2),
            b'S' | b'Q' => Some(4),
            b'C' => Some(6),
            b'A' => Some(7),
            _ => None,
        }
    }

    /// Builds the command for `letter` from exactly [`PathCommand::arity`] arguments.
    pub fn from_args(letter: u8, a: &[f64]) -> Option<Self> {
        if Self::arity(letter)? != a.len() {
            return None;
        }
        let cmd = match letter {
            b'M' => Self::MoveTo { x: a[0], y: a[1] },
            b'm' => Self::RelativeMoveTo { dx: a[0], dy: a[1] },
            b'L' => Self::LineTo { x: a[0], y: a[1] },
            b'l' => Self::RelativeLineTo { dx: a[0], dy: a[1] },
            b'H' => Self::HorizontalLineTo { x: a[0] },
            b'h' => Self::RelativeHorizontalLineTo { dx: a[0] },
            b'V' => Self::VerticalLineTo { y: a[0] },
            b'v' => Self::RelativeVerticalLineTo { dy: a[0] },
            b'C' => Self::CurveTo {
                x1: a[0],
                y1: a[1],
                x2: a[2],
                y2: a[3],
                x3: a[4],
                y3: a[5],
            },
            b'c' => Self::RelativeCurveTo {
                dx1: a[0],
                dy1: a[1],
                dx2: a[2],
                dy2: a[3],
                dx3: a[4],
                dy3: a[5],
            },
            b'Q' => Self::QuadTo {
                x1: a[0],
                y1: a[1],
                x2: a[2],
                y2: a[3],
            },
            b'q' => Self::RelativeQuadTo {
                dx1: a[0],
                dy1: a[1],
                dx2: a[2],
                dy2: a[3],
            },
            b'S' => Self::ReflectiveCurveTo {
                x1: a[0],
                y1: a[1],
                x2: a[2],
                y2: a[3],
            },
            b's' => Self::RelativeReflectiveCurveTo {
                dx1: a[0],
                dy1: a[1],
                dx2: a[2],
                dy2: a[3],
            },
            b'T' => Self::ReflectiveQuadTo { x: a[0], y: a[1] },
            b't' => Self::RelativeReflectiveQuadTo { dx: a[0], dy: a[1] },
            b'A' => Self::ArcTo {
                horizontal_ellipse_radius: a[0],
                vertical_ellipse_radius: a[1],
                theta: a[2],
                is_more_than_half: a[3] != 0.0,
                is_positive_arc: a[4] != 0.0,
                x1: a[5],
                y1: a[6],
            },
            b'a' => Self::RelativeArcTo {
                horizontal_ellipse_radius: a[0],
                vertical_ellipse_radius: a[1],
                theta: a[2],
                is_more_than_half: a[3] != 0.0,
                is_positive_arc: a[4] != 0.0,
                dx1: a[5],
                dy1: a[6],
            },
            b'Z' | b'z' => Self::Close,
            _ => return None,
        };
        Some(cmd)
    }

    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            Self::RelativeMoveTo { .. }
                | Self::RelativeLineTo { .. }
                | Self::RelativeHorizontalLineTo { .. }
                | Self::RelativeVerticalLineTo { .. }
                | Self::RelativeCurveTo { .. }
                | Self::RelativeQuadTo { .. }
                | Self::RelativeReflectiveCurveTo { .. }
                | Self::RelativeReflectiveQuadTo { .. }
                | Self::RelativeArcTo { .. }
        )
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Self::MoveTo { .. } | Self::RelativeMoveTo { .. })
    }
}
