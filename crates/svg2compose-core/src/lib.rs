#![forbid(unsafe_code)]

//! SVG parser + vector icon model (headless).
//!
//! Converts an SVG document into an [`ImageVector`] tree of paths and groups that mirrors the
//! Compose `ImageVector.Builder` DSL:
//! - path data is kept command-for-command (absolute and relative forms stay distinct)
//! - basic shapes become equivalent path commands
//! - `transform` lists are composed and decomposed into group translation / rotation / scale
//! - gradients and clip paths are resolved by id
//!
//! Everything here is synchronous and pure; each parse owns its own [`ParseContext`].

pub mod color;
pub mod document;
pub mod error;
pub mod geom;
pub mod ir;
pub mod path;
pub mod shapes;
pub mod transform;
pub mod warning;

pub use color::{Color, parse_color};
pub use document::{
    DEFAULT_ICON_NAME, ParseContext, ParseOptions, ParsedSvg, SvgParser, parse_svg,
};
pub use error::{Error, Result};
pub use ir::{
    ColorStop, Fill, ImageVector, PathFillType, StrokeCap, StrokeJoin, VectorGroup, VectorNode,
    VectorPath,
};
pub use path::{PathCommand, parse_path_data};
pub use transform::{AffineParams, parse_transform};
pub use warning::{ElementCategory, Warning};

#[cfg(test)]
mod tests;
