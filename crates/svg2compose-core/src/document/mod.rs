//! SVG document to [`ImageVector`] conversion.

mod context;
mod paint;
mod style;
mod units;

pub use context::ParseContext;

use crate::ir::{ImageVector, VectorGroup, VectorNode, VectorPath};
use crate::path::{PathCommand, parse_path_data};
use crate::shapes::{
    circle_to_path, ellipse_to_path, line_to_path, parse_points, polygon_to_path, polyline_to_path,
    rect_to_path,
};
use crate::transform::{AffineParams, parse_transform_list};
use crate::warning::{ElementCategory, ReferenceKind, Warning};
use crate::{Error, Result};
use roxmltree::{Document, Node};
use serde::Serialize;
use style::{Style, apply_style};
use units::{parse_dimension, parse_length, parse_view_box, url_reference};

/// Name used when neither the root nor any path carries an id.
pub const DEFAULT_ICON_NAME: &str = "UnnamedIcon";

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Drop paths with malformed `d` data (recording a warning) instead of failing the document.
    pub skip_malformed_paths: bool,
}

impl ParseOptions {
    /// Strict parsing: malformed path data fails the whole document.
    pub fn strict() -> Self {
        Self {
            skip_malformed_paths: false,
        }
    }

    /// Lenient parsing: malformed paths are dropped with a warning.
    pub fn lenient() -> Self {
        Self {
            skip_malformed_paths: true,
        }
    }
}

/// A converted document together with the warnings raised while converting it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSvg {
    pub image_vector: ImageVector,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Default)]
pub struct SvgParser {
    options: ParseOptions,
}

impl SvgParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn parse(&self, text: &str) -> Result<ParsedSvg> {
        let doc = Document::parse_with_options(
            text,
            roxmltree::ParsingOptions {
                allow_dtd: true,
                ..Default::default()
            },
        )
        .map_err(|e| Error::MalformedXml {
            message: e.to_string(),
        })?;

        let root = doc.root_element();
        if root.tag_name().name() != "svg" {
            return Err(Error::NotAnSvgRoot {
                tag: root.tag_name().name().to_string(),
            });
        }

        let mut ctx = ParseContext::new(self.options);
        report_unsupported(root, &mut ctx);
        paint::register_gradients(&doc, &mut ctx);
        register_clip_paths(root, &mut ctx)?;

        let width = parse_dimension(root.attribute("width"));
        let height = parse_dimension(root.attribute("height"));
        let (viewport_width, viewport_height) = root
            .attribute("viewBox")
            .and_then(parse_view_box)
            .unwrap_or((width, height));

        let nodes = walk_children(root, &mut ctx)?;
        let image_vector =
            ImageVector::new(document_name(root), width, height, viewport_width, viewport_height)?
                .with_nodes(nodes);

        Ok(ParsedSvg {
            image_vector,
            warnings: ctx.into_warnings(),
        })
    }
}

/// Parses with default (strict) options. Warnings are logged through `tracing` and dropped.
pub fn parse_svg(text: &str) -> Result<ImageVector> {
    SvgParser::new().parse(text).map(|parsed| parsed.image_vector)
}

fn document_name(root: Node<'_, '_>) -> String {
    non_empty_id(root)
        .or_else(|| {
            root.descendants()
                .filter(|n| n.is_element() && n.tag_name().name() == "path")
                .find_map(non_empty_id)
        })
        .unwrap_or(DEFAULT_ICON_NAME)
        .to_string()
}

fn non_empty_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute("id").map(str::trim).filter(|id| !id.is_empty())
}

/// One warning per unsupported tag, gathered from the whole tree before walking it.
fn report_unsupported(root: Node<'_, '_>, ctx: &mut ParseContext) {
    for node in root.descendants().filter(Node::is_element) {
        let tag = node.tag_name().name();
        if let Some(category) = ElementCategory::classify(tag) {
            ctx.warn(Warning::UnsupportedElement {
                category,
                tag: tag.to_string(),
            });
        }
    }
}

/// Every `clipPath` with an id becomes one concatenated command list, registered up front.
fn register_clip_paths(root: Node<'_, '_>, ctx: &mut ParseContext) -> Result<()> {
    let clips: Vec<Node<'_, '_>> = root
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "clipPath")
        .collect();
    for clip in clips {
        let Some(id) = non_empty_id(clip) else {
            continue;
        };
        let mut commands = Vec::new();
        collect_clip_commands(clip, &mut commands, ctx)?;
        ctx.register_clip_path(id, commands);
    }
    Ok(())
}

fn collect_clip_commands(
    parent: Node<'_, '_>,
    out: &mut Vec<PathCommand>,
    ctx: &mut ParseContext,
) -> Result<()> {
    for child in parent.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "path" => {
                if let Some(commands) = path_commands(child, ctx)? {
                    out.extend(commands);
                }
            }
            "g" => collect_clip_commands(child, out, ctx)?,
            tag => {
                if let Some(commands) = shape_commands(child) {
                    if commands.is_empty() {
                        ctx.warn(Warning::InvalidShapeGeometry {
                            element: tag.to_string(),
                        });
                    }
                    out.extend(commands);
                }
            }
        }
    }
    Ok(())
}

fn walk_children(parent: Node<'_, '_>, ctx: &mut ParseContext) -> Result<Vec<VectorNode>> {
    let mut nodes = Vec::new();
    for child in parent.children().filter(Node::is_element) {
        nodes.extend(walk_element(child, ctx)?);
    }
    Ok(nodes)
}

fn walk_element(node: Node<'_, '_>, ctx: &mut ParseContext) -> Result<Vec<VectorNode>> {
    let tag = node.tag_name().name();
    if is_hidden(node) {
        return Ok(Vec::new());
    }

    match tag {
        "path" => {
            let Some(commands) = path_commands(node, ctx)? else {
                return Ok(Vec::new());
            };
            if commands.is_empty() {
                return Ok(Vec::new());
            }
            Ok(vec![styled_leaf(node, "path", commands, ctx)])
        }
        "rect" | "circle" | "ellipse" | "line" | "polygon" | "polyline" => {
            let commands = shape_commands(node).unwrap_or_default();
            if commands.is_empty() {
                tracing::debug!(element = tag, "dropping shape with invalid geometry");
                ctx.warn(Warning::InvalidShapeGeometry {
                    element: tag.to_string(),
                });
                return Ok(Vec::new());
            }
            Ok(vec![styled_leaf(node, tag, commands, ctx)])
        }
        "g" => walk_group(node, ctx),
        // Definitions were registered before the walk; they never draw by themselves.
        "defs" | "linearGradient" | "radialGradient" | "clipPath" | "stop" => Ok(Vec::new()),
        "title" | "desc" | "metadata" | "style" | "script" => Ok(Vec::new()),
        _ if ElementCategory::classify(tag).is_some() => Ok(Vec::new()),
        // Nested `svg`, `a` and unknown containers are transparent.
        _ => walk_children(node, ctx),
    }
}

fn walk_group(node: Node<'_, '_>, ctx: &mut ParseContext) -> Result<Vec<VectorNode>> {
    let children = walk_children(node, ctx)?;
    // A group with nothing drawable is dropped, even when it carries a clip or an id.
    if children.is_empty() {
        return Ok(Vec::new());
    }

    let params = element_transform(node, ctx);
    let clip = element_clip(node, ctx);
    let id = non_empty_id(node);

    if params.is_identity() && clip.is_none() && id.is_none() && children.len() <= 1 {
        return Ok(children);
    }

    let mut group = VectorGroup::new(children)
        .with_name(id.unwrap_or("group"))
        .with_transform(params);
    if let Some(commands) = clip {
        group = group.with_clip_path(commands);
    }
    Ok(vec![group.into()])
}

/// Builds a styled path. A `transform` or `clip-path` on the element itself wraps the path in a
/// group carrying it.
fn styled_leaf(
    node: Node<'_, '_>,
    default_name: &str,
    commands: Vec<PathCommand>,
    ctx: &mut ParseContext,
) -> VectorNode {
    let style = Style::of(node);
    let mut path = VectorPath::new(commands).with_name(non_empty_id(node).unwrap_or(default_name));
    apply_style(&mut path, &style, ctx);

    let params = element_transform(node, ctx);
    let clip = element_clip(node, ctx);
    if params.is_identity() && clip.is_none() {
        return path.into();
    }

    let mut group = VectorGroup::new(vec![path.into()])
        .with_name("group")
        .with_transform(params);
    if let Some(commands) = clip {
        group = group.with_clip_path(commands);
    }
    group.into()
}

fn element_transform(node: Node<'_, '_>, ctx: &mut ParseContext) -> AffineParams {
    let Some(value) = node.attribute("transform") else {
        return AffineParams::default();
    };
    let list = parse_transform_list(value);
    for function in &list.skipped {
        ctx.warn(Warning::UnparseableTransform {
            function: function.clone(),
        });
    }
    list.params()
}

/// Clip commands for a `clip-path="url(#id)"` reference. A registered clip path with no content
/// still counts as a clip.
fn element_clip(node: Node<'_, '_>, ctx: &mut ParseContext) -> Option<Vec<PathCommand>> {
    let value = Style::of(node).get("clip-path")?;
    let id = url_reference(value)?;
    if let Some(commands) = ctx.clip_path(id) {
        return Some(commands.to_vec());
    }
    ctx.warn(Warning::UnregisteredReference {
        reference: ReferenceKind::ClipPath,
        id: id.to_string(),
    });
    None
}

fn is_hidden(node: Node<'_, '_>) -> bool {
    let style = Style::of(node);
    style.get("display") == Some("none")
}

/// `Ok(None)` when the path was dropped in lenient mode.
fn path_commands(node: Node<'_, '_>, ctx: &mut ParseContext) -> Result<Option<Vec<PathCommand>>> {
    let data = node.attribute("d").unwrap_or_default();
    match parse_path_data(data) {
        Ok(commands) => Ok(Some(commands)),
        Err(err) if ctx.options().skip_malformed_paths => {
            ctx.warn(Warning::MalformedPathData {
                message: err.to_string(),
            });
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Commands for a basic shape element, or `None` if `node` is not one.
fn shape_commands(node: Node<'_, '_>) -> Option<Vec<PathCommand>> {
    let num = |name: &str| node.attribute(name).and_then(parse_length);
    let num_or_zero = |name: &str| num(name).unwrap_or(0.0);

    let commands = match node.tag_name().name() {
        "rect" => rect_to_path(
            num_or_zero("x"),
            num_or_zero("y"),
            num_or_zero("width"),
            num_or_zero("height"),
            num("rx"),
            num("ry"),
        ),
        "circle" => circle_to_path(num_or_zero("cx"), num_or_zero("cy"), num_or_zero("r")),
        "ellipse" => ellipse_to_path(
            num_or_zero("cx"),
            num_or_zero("cy"),
            num_or_zero("rx"),
            num_or_zero("ry"),
        ),
        "line" => line_to_path(
            num_or_zero("x1"),
            num_or_zero("y1"),
            num_or_zero("x2"),
            num_or_zero("y2"),
        ),
        "polygon" => polygon_to_path(&parse_points(node.attribute("points").unwrap_or_default())),
        "polyline" => polyline_to_path(&parse_points(node.attribute("points").unwrap_or_default())),
        _ => return None,
    };
    Some(commands)
}
