//! The vector icon tree shared by the SVG walker and the code generator.

use crate::color::Color;
use crate::geom::Point;
use crate::path::PathCommand;
use crate::transform::AffineParams;
use crate::{Error, Result};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    pub color: Color,
}

/// Paint for a path interior or outline.
///
/// Gradient stops are kept in document order, which is also the rendering order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Fill {
    SolidColor(Color),
    #[serde(rename_all = "camelCase")]
    LinearGradient {
        start: Point,
        end: Point,
        color_stops: Vec<ColorStop>,
    },
    #[serde(rename_all = "camelCase")]
    RadialGradient {
        center: Point,
        radius: f64,
        focal: Option<Point>,
        color_stops: Vec<ColorStop>,
    },
}

impl Fill {
    pub fn color_stops(&self) -> &[ColorStop] {
        match self {
            Fill::SolidColor(_) => &[],
            Fill::LinearGradient { color_stops, .. } | Fill::RadialGradient { color_stops, .. } => {
                color_stops
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl FromStr for StrokeCap {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl FromStr for StrokeJoin {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // SVG 2 variants degrade to plain miter joins.
            "miter" | "miter-clip" | "arcs" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PathFillType {
    #[default]
    NonZero,
    EvenOdd,
}

impl FromStr for PathFillType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nonzero" => Ok(Self::NonZero),
            "evenodd" => Ok(Self::EvenOdd),
            _ => Err(()),
        }
    }
}

pub const DEFAULT_STROKE_MITER: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorPath {
    pub name: Option<String>,
    pub commands: Vec<PathCommand>,
    pub fill: Option<Fill>,
    pub stroke: Option<Fill>,
    pub fill_alpha: f64,
    pub stroke_alpha: f64,
    pub stroke_line_width: f64,
    pub stroke_line_cap: StrokeCap,
    pub stroke_line_join: StrokeJoin,
    pub stroke_line_miter: f64,
    pub path_fill_type: PathFillType,
    pub trim_path_start: f64,
    pub trim_path_end: f64,
    pub trim_path_offset: f64,
}

impl Default for VectorPath {
    fn default() -> Self {
        Self {
            name: None,
            commands: Vec::new(),
            fill: None,
            stroke: None,
            fill_alpha: 1.0,
            stroke_alpha: 1.0,
            stroke_line_width: 0.0,
            stroke_line_cap: StrokeCap::Butt,
            stroke_line_join: StrokeJoin::Miter,
            stroke_line_miter: DEFAULT_STROKE_MITER,
            path_fill_type: PathFillType::NonZero,
            trim_path_start: 0.0,
            trim_path_end: 1.0,
            trim_path_offset: 0.0,
        }
    }
}

impl VectorPath {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self {
            commands,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// True when any paint or stroke attribute differs from its default.
    pub fn has_styling(&self) -> bool {
        self.fill.is_some()
            || self.stroke.is_some()
            || self.fill_alpha != 1.0
            || self.stroke_alpha != 1.0
            || self.stroke_line_width != 0.0
            || self.stroke_line_cap != StrokeCap::Butt
            || self.stroke_line_join != StrokeJoin::Miter
            || self.stroke_line_miter != DEFAULT_STROKE_MITER
            || self.path_fill_type != PathFillType::NonZero
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorGroup {
    pub name: Option<String>,
    pub children: Vec<VectorNode>,
    pub rotation: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub translation_x: f64,
    pub translation_y: f64,
    pub clip_path_data: Vec<PathCommand>,
}

impl Default for VectorGroup {
    fn default() -> Self {
        Self {
            name: None,
            children: Vec::new(),
            rotation: 0.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
            clip_path_data: Vec::new(),
        }
    }
}

impl VectorGroup {
    pub fn new(children: Vec<VectorNode>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, params: AffineParams) -> Self {
        self.rotation = params.rotation;
        self.scale_x = params.scale_x;
        self.scale_y = params.scale_y;
        self.translation_x = params.translation_x;
        self.translation_y = params.translation_y;
        self
    }

    pub fn with_clip_path(mut self, commands: Vec<PathCommand>) -> Self {
        self.clip_path_data = commands;
        self
    }

    pub fn has_transform(&self) -> bool {
        self.rotation != 0.0
            || self.pivot_x != 0.0
            || self.pivot_y != 0.0
            || self.scale_x != 1.0
            || self.scale_y != 1.0
            || self.translation_x != 0.0
            || self.translation_y != 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VectorNode {
    Path(VectorPath),
    Group(VectorGroup),
}

impl VectorNode {
    /// Number of path nodes in this subtree.
    pub fn path_count(&self) -> usize {
        match self {
            VectorNode::Path(_) => 1,
            VectorNode::Group(g) => g.children.iter().map(VectorNode::path_count).sum(),
        }
    }
}

impl From<VectorPath> for VectorNode {
    fn from(value: VectorPath) -> Self {
        Self::Path(value)
    }
}

impl From<VectorGroup> for VectorNode {
    fn from(value: VectorGroup) -> Self {
        Self::Group(value)
    }
}

/// Root of the tree: one converted document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageVector {
    pub name: String,
    pub default_width: f64,
    pub default_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub nodes: Vec<VectorNode>,
    pub auto_mirror: bool,
    pub tint_color: Option<Color>,
}

impl ImageVector {
    pub fn new(
        name: impl Into<String>,
        default_width: f64,
        default_height: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<Self> {
        let dims = [
            ("defaultWidth", default_width),
            ("defaultHeight", default_height),
            ("viewportWidth", viewport_width),
            ("viewportHeight", viewport_height),
        ];
        if let Some((field, value)) = dims.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(Error::InvalidDimensions {
                message: format!("{field} must be > 0 (got {value})"),
            });
        }
        Ok(Self {
            name: name.into(),
            default_width,
            default_height,
            viewport_width,
            viewport_height,
            nodes: Vec::new(),
            auto_mirror: false,
            tint_color: None,
        })
    }

    pub fn with_nodes(mut self, nodes: Vec<VectorNode>) -> Self {
        self.nodes = nodes;
        self
    }

    /// Replaces the name chosen by the parser (used by naming layers after conversion).
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn path_count(&self) -> usize {
        self.nodes.iter().map(VectorNode::path_count).sum()
    }
}
