//! `ImageVector.Builder(...)` code generation.

use crate::fmt::{escape_kotlin_string, fmt_dp, fmt_float};
use crate::imports;
use crate::paint::{ColorStyle, call_lines, fill_expression};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use svg2compose_core::ir::DEFAULT_STROKE_MITER;
use svg2compose_core::{
    Color, Fill, ImageVector, PathCommand, PathFillType, StrokeCap, StrokeJoin, VectorGroup, VectorNode,
    VectorPath,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub indent_size: usize,
    /// Single-line `clipPathData` lists are used only when the whole line fits.
    pub max_line_length: usize,
    pub use_named_colors: bool,
    pub trailing_commas: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            max_line_length: 120,
            use_named_colors: true,
            trailing_commas: true,
        }
    }
}

/// Builder code plus the imports it needs, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCode {
    pub code: String,
    pub imports: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ImageVectorGenerator {
    options: GeneratorOptions,
    color_overrides: BTreeMap<Color, String>,
}

impl ImageVectorGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Emits `replacement` verbatim wherever a color with exactly this ARGB value is painted.
    pub fn with_color_overrides(mut self, overrides: BTreeMap<Color, String>) -> Self {
        self.color_overrides = overrides;
        self
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    pub fn generate(&self, image_vector: &ImageVector) -> GeneratedCode {
        let mut emitter = Emitter::new(self.options, &self.color_overrides);
        emitter.image_vector(image_vector);
        tracing::debug!(
            name = %image_vector.name,
            lines = emitter.lines.len(),
            imports = emitter.imports.len(),
            "generated image vector code"
        );
        GeneratedCode {
            code: emitter.lines.join("\n"),
            imports: emitter.imports,
        }
    }
}

/// Generates with default options.
pub fn generate_code(image_vector: &ImageVector) -> GeneratedCode {
    ImageVectorGenerator::new().generate(image_vector)
}

struct Emitter<'a> {
    options: GeneratorOptions,
    colors: ColorStyle<'a>,
    indent: String,
    lines: Vec<String>,
    imports: BTreeSet<String>,
}

/// One named argument; continuation lines are relative to the argument's own indentation.
type Argument = Vec<String>;

impl<'a> Emitter<'a> {
    fn new(options: GeneratorOptions, overrides: &'a BTreeMap<Color, String>) -> Self {
        let mut imports = BTreeSet::new();
        imports.insert(imports::IMAGE_VECTOR.to_string());
        imports.insert(imports::DP.to_string());
        Self {
            options,
            colors: ColorStyle {
                use_named_colors: options.use_named_colors,
                overrides,
            },
            indent: " ".repeat(options.indent_size),
            lines: Vec::new(),
            imports,
        }
    }

    fn prefix(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }

    fn push(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{text}", self.prefix(depth)));
        }
    }

    /// `head(` + arguments + `) {` (or `head {` when there are no arguments).
    fn open_block(&mut self, depth: usize, head: &str, args: Vec<Argument>) {
        if args.is_empty() {
            self.push(depth, format!("{head} {{"));
            return;
        }
        let lines = call_lines(head, args, &self.indent, self.options.trailing_commas);
        let last = lines.len() - 1;
        for (idx, line) in lines.into_iter().enumerate() {
            if idx == last {
                self.push(depth, format!("{line} {{"));
            } else {
                self.push(depth, line);
            }
        }
    }

    fn image_vector(&mut self, iv: &ImageVector) {
        let mut args: Vec<Argument> = vec![
            vec![format!("name = \"{}\"", escape_kotlin_string(&iv.name))],
            vec![format!("defaultWidth = {}", fmt_dp(iv.default_width))],
            vec![format!("defaultHeight = {}", fmt_dp(iv.default_height))],
            vec![format!("viewportWidth = {}", fmt_float(iv.viewport_width))],
            vec![format!("viewportHeight = {}", fmt_float(iv.viewport_height))],
        ];
        if let Some(tint) = iv.tint_color {
            self.imports.insert(imports::COLOR.to_string());
            args.push(vec![format!("tintColor = {}", self.colors.expression(tint))]);
        }
        if iv.auto_mirror {
            args.push(vec!["autoMirror = true".to_string()]);
        }

        let lines = call_lines(
            "ImageVector.Builder",
            args,
            &self.indent,
            self.options.trailing_commas,
        );
        for line in lines {
            self.push(0, line);
        }
        if let Some(last) = self.lines.last_mut() {
            last.push_str(".apply {");
        }

        for node in &iv.nodes {
            self.node(node, 1);
        }
        self.push(0, "}.build()");
    }

    fn node(&mut self, node: &VectorNode, depth: usize) {
        match node {
            VectorNode::Path(path) => self.path(path, depth),
            VectorNode::Group(group) => self.group(group, depth),
        }
    }

    fn path(&mut self, path: &VectorPath, depth: usize) {
        let args = if path.has_styling() {
            self.path_arguments(path)
        } else {
            Vec::new()
        };
        self.open_block(depth, "path", args);
        for command in &path.commands {
            self.push(depth + 1, builder_call(command));
        }
        self.push(depth, "}");
    }

    /// Every paint and stroke attribute that differs from its default.
    fn path_arguments(&mut self, path: &VectorPath) -> Vec<Argument> {
        let mut args: Vec<Argument> = Vec::new();
        if let Some(fill) = &path.fill {
            args.push(self.paint_argument("fill", fill));
        }
        if let Some(stroke) = &path.stroke {
            args.push(self.paint_argument("stroke", stroke));
        }
        if path.fill_alpha != 1.0 {
            args.push(vec![format!("fillAlpha = {}", fmt_float(path.fill_alpha))]);
        }
        if path.stroke_alpha != 1.0 {
            args.push(vec![format!("strokeAlpha = {}", fmt_float(path.stroke_alpha))]);
        }
        if path.stroke_line_width != 0.0 {
            args.push(vec![format!(
                "strokeLineWidth = {}",
                fmt_float(path.stroke_line_width)
            )]);
        }
        if path.stroke_line_cap != StrokeCap::Butt {
            self.imports.insert(imports::STROKE_CAP.to_string());
            args.push(vec![format!(
                "strokeLineCap = StrokeCap.{}",
                stroke_cap_name(path.stroke_line_cap)
            )]);
        }
        if path.stroke_line_join != StrokeJoin::Miter {
            self.imports.insert(imports::STROKE_JOIN.to_string());
            args.push(vec![format!(
                "strokeLineJoin = StrokeJoin.{}",
                stroke_join_name(path.stroke_line_join)
            )]);
        }
        if path.stroke_line_miter != DEFAULT_STROKE_MITER {
            args.push(vec![format!(
                "strokeLineMiter = {}",
                fmt_float(path.stroke_line_miter)
            )]);
        }
        if path.path_fill_type != PathFillType::NonZero {
            self.imports.insert(imports::PATH_FILL_TYPE.to_string());
            args.push(vec![format!(
                "pathFillType = PathFillType.{}",
                fill_type_name(path.path_fill_type)
            )]);
        }
        args
    }

    fn paint_argument(&mut self, label: &str, fill: &Fill) -> Argument {
        let mut lines = fill_expression(
            fill,
            self.colors,
            &self.indent,
            self.options.trailing_commas,
            &mut self.imports,
        );
        if let Some(first) = lines.first_mut() {
            first.insert_str(0, &format!("{label} = "));
        }
        lines
    }

    fn group(&mut self, group: &VectorGroup, depth: usize) {
        let mut args: Vec<Argument> = Vec::new();
        if let Some(name) = &group.name {
            args.push(vec![format!("name = \"{}\"", escape_kotlin_string(name))]);
        }
        let transforms = [
            ("rotate", group.rotation, 0.0),
            ("pivotX", group.pivot_x, 0.0),
            ("pivotY", group.pivot_y, 0.0),
            ("scaleX", group.scale_x, 1.0),
            ("scaleY", group.scale_y, 1.0),
            ("translationX", group.translation_x, 0.0),
            ("translationY", group.translation_y, 0.0),
        ];
        for (label, value, default) in transforms {
            if value != default {
                args.push(vec![format!("{label} = {}", fmt_float(value))]);
            }
        }
        if !group.clip_path_data.is_empty() {
            self.imports.insert(imports::PATH_NODE.to_string());
            let arg = self.clip_argument(&group.clip_path_data, depth + 1);
            args.push(arg);
        }

        self.open_block(depth, "group", args);
        for child in &group.children {
            self.node(child, depth + 1);
        }
        self.push(depth, "}");
    }

    /// `clipPathData = listOf(...)` on one line when it fits at `depth`, else one node per line.
    fn clip_argument(&self, commands: &[PathCommand], depth: usize) -> Argument {
        let nodes: Vec<String> = commands.iter().map(path_node).collect();
        let single = format!("clipPathData = listOf({})", nodes.join(", "));
        // +1 for the argument's trailing comma.
        if self.prefix(depth).len() + single.len() + 1 <= self.options.max_line_length {
            return vec![single];
        }

        let mut lines = vec!["clipPathData = listOf(".to_string()];
        let last = nodes.len() - 1;
        for (idx, node) in nodes.into_iter().enumerate() {
            let comma = if idx == last { "" } else { "," };
            lines.push(format!("{}{node}{comma}", self.indent));
        }
        lines.push(")".to_string());
        lines
    }
}

fn stroke_cap_name(cap: StrokeCap) -> &'static str {
    match cap {
        StrokeCap::Butt => "Butt",
        StrokeCap::Round => "Round",
        StrokeCap::Square => "Square",
    }
}

fn stroke_join_name(join: StrokeJoin) -> &'static str {
    match join {
        StrokeJoin::Miter => "Miter",
        StrokeJoin::Round => "Round",
        StrokeJoin::Bevel => "Bevel",
    }
}

fn fill_type_name(fill_type: PathFillType) -> &'static str {
    match fill_type {
        PathFillType::NonZero => "NonZero",
        PathFillType::EvenOdd => "EvenOdd",
    }
}

fn floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| fmt_float(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn flag(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}

/// A path builder DSL call, e.g. `lineToRelative(1f, 2f)`.
pub fn builder_call(command: &PathCommand) -> String {
    use PathCommand::*;
    match *command {
        MoveTo { x, y } => format!("moveTo({})", floats(&[x, y])),
        RelativeMoveTo { dx, dy } => format!("moveToRelative({})", floats(&[dx, dy])),
        LineTo { x, y } => format!("lineTo({})", floats(&[x, y])),
        RelativeLineTo { dx, dy } => format!("lineToRelative({})", floats(&[dx, dy])),
        HorizontalLineTo { x } => format!("horizontalLineTo({})", fmt_float(x)),
        RelativeHorizontalLineTo { dx } => {
            format!("horizontalLineToRelative({})", fmt_float(dx))
        }
        VerticalLineTo { y } => format!("verticalLineTo({})", fmt_float(y)),
        RelativeVerticalLineTo { dy } => format!("verticalLineToRelative({})", fmt_float(dy)),
        CurveTo {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        } => format!("curveTo({})", floats(&[x1, y1, x2, y2, x3, y3])),
        RelativeCurveTo {
            dx1,
            dy1,
            dx2,
            dy2,
            dx3,
            dy3,
        } => format!(
            "curveToRelative({})",
            floats(&[dx1, dy1, dx2, dy2, dx3, dy3])
        ),
        QuadTo { x1, y1, x2, y2 } => format!("quadTo({})", floats(&[x1, y1, x2, y2])),
        RelativeQuadTo { dx1, dy1, dx2, dy2 } => {
            format!("quadToRelative({})", floats(&[dx1, dy1, dx2, dy2]))
        }
        ReflectiveCurveTo { x1, y1, x2, y2 } => {
            format!("reflectiveCurveTo({})", floats(&[x1, y1, x2, y2]))
        }
        RelativeReflectiveCurveTo { dx1, dy1, dx2, dy2 } => format!(
            "reflectiveCurveToRelative({})",
            floats(&[dx1, dy1, dx2, dy2])
        ),
        ReflectiveQuadTo { x, y } => format!("reflectiveQuadTo({})", floats(&[x, y])),
        RelativeReflectiveQuadTo { dx, dy } => {
            format!("reflectiveQuadToRelative({})", floats(&[dx, dy]))
        }
        ArcTo {
            horizontal_ellipse_radius,
            vertical_ellipse_radius,
            theta,
            is_more_than_half,
            is_positive_arc,
            x1,
            y1,
        } => format!(
            "arcTo({}, {}, {}, {}, {}, {}, {})",
            fmt_float(horizontal_ellipse_radius),
            fmt_float(vertical_ellipse_radius),
            fmt_float(theta),
            flag(is_more_than_half),
            flag(is_positive_arc),
            fmt_float(x1),
            fmt_float(y1)
        ),
        RelativeArcTo {
            horizontal_ellipse_radius,
            vertical_ellipse_radius,
            theta,
            is_more_than_half,
            is_positive_arc,
            dx1,
            dy1,
        } => format!(
            "arcToRelative({}, {}, {}, {}, {}, {}, {})",
            fmt_float(horizontal_ellipse_radius),
            fmt_float(vertical_ellipse_radius),
            fmt_float(theta),
            flag(is_more_than_half),
            flag(is_positive_arc),
            fmt_float(dx1),
            fmt_float(dy1)
        ),
        Close => "close()".to_string(),
    }
}

/// A `PathNode` constructor, as used in `clipPathData`.
pub fn path_node(command: &PathCommand) -> String {
    use PathCommand::*;
    match *command {
        MoveTo { x, y } => format!("PathNode.MoveTo({})", floats(&[x, y])),
        RelativeMoveTo { dx, dy } => format!("PathNode.RelativeMoveTo({})", floats(&[dx, dy])),
        LineTo { x, y } => format!("PathNode.LineTo({})", floats(&[x, y])),
        RelativeLineTo { dx, dy } => format!("PathNode.RelativeLineTo({})", floats(&[dx, dy])),
        HorizontalLineTo { x } => format!("PathNode.HorizontalTo({})", fmt_float(x)),
        RelativeHorizontalLineTo { dx } => {
            format!("PathNode.RelativeHorizontalTo({})", fmt_float(dx))
        }
        VerticalLineTo { y } => format!("PathNode.VerticalTo({})", fmt_float(y)),
        RelativeVerticalLineTo { dy } => format!("PathNode.RelativeVerticalTo({})", fmt_float(dy)),
        CurveTo {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        } => format!("PathNode.CurveTo({})", floats(&[x1, y1, x2, y2, x3, y3])),
        RelativeCurveTo {
            dx1,
            dy1,
            dx2,
            dy2,
            dx3,
            dy3,
        } => format!(
            "PathNode.RelativeCurveTo({})",
            floats(&[dx1, dy1, dx2, dy2, dx3, dy3])
        ),
        QuadTo { x1, y1, x2, y2 } => format!("PathNode.QuadTo({})", floats(&[x1, y1, x2, y2])),
        RelativeQuadTo { dx1, dy1, dx2, dy2 } => {
            format!("PathNode.RelativeQuadTo({})", floats(&[dx1, dy1, dx2, dy2]))
        }
        ReflectiveCurveTo { x1, y1, x2, y2 } => {
            format!("PathNode.ReflectiveCurveTo({})", floats(&[x1, y1, x2, y2]))
        }
        RelativeReflectiveCurveTo { dx1, dy1, dx2, dy2 } => format!(
            "PathNode.RelativeReflectiveCurveTo({})",
            floats(&[dx1, dy1, dx2, dy2])
        ),
        ReflectiveQuadTo { x, y } => format!("PathNode.ReflectiveQuadTo({})", floats(&[x, y])),
        RelativeReflectiveQuadTo { dx, dy } => {
            format!("PathNode.RelativeReflectiveQuadTo({})", floats(&[dx, dy]))
        }
        ArcTo {
            horizontal_ellipse_radius,
            vertical_ellipse_radius,
            theta,
            is_more_than_half,
            is_positive_arc,
            x1,
            y1,
        } => format!(
            "PathNode.ArcTo({}, {}, {}, {}, {}, {}, {})",
            fmt_float(horizontal_ellipse_radius),
            fmt_float(vertical_ellipse_radius),
            fmt_float(theta),
            flag(is_more_than_half),
            flag(is_positive_arc),
            fmt_float(x1),
            fmt_float(y1)
        ),
        RelativeArcTo {
            horizontal_ellipse_radius,
            vertical_ellipse_radius,
            theta,
            is_more_than_half,
            is_positive_arc,
            dx1,
            dy1,
        } => format!(
            "PathNode.RelativeArcTo({}, {}, {}, {}, {}, {}, {})",
            fmt_float(horizontal_ellipse_radius),
            fmt_float(vertical_ellipse_radius),
            fmt_float(theta),
            flag(is_more_than_half),
            flag(is_positive_arc),
            fmt_float(dx1),
            fmt_float(dy1)
        ),
        Close => "PathNode.Close".to_string(),
    }
}
