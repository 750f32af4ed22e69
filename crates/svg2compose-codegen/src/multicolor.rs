//! Multicolor templates: the colors an icon paints and the template table that renames them.
//!
//! A multicolor template declares a `color_mappings` table with a top-level `{% set %}`. Keys
//! are hex colors. A value is either a Kotlin expression that replaces the color in place, or a
//! `{ "semantic_name": ..., "replacement": ... }` entry that turns the color into a function
//! parameter with that default.

use indexmap::IndexMap;
use minijinja::Value;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use svg2compose_core::{Color, Fill, ImageVector, VectorNode};

/// Name of the template variable holding the mapping table.
pub const COLOR_MAPPINGS_VAR: &str = "color_mappings";

/// Hex keys of every color an icon paints.
///
/// Opaque colors appear as `#RRGGBB`. Translucent colors appear twice: as `#RRGGBB` and as
/// `#AARRGGBB`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorAnalysis {
    pub used_colors: BTreeSet<String>,
}

impl ColorAnalysis {
    /// Collects fill and stroke colors, including gradient stops.
    pub fn of(image_vector: &ImageVector) -> Self {
        let mut analysis = Self::default();
        for node in &image_vector.nodes {
            analysis.visit(node);
        }
        analysis
    }

    fn visit(&mut self, node: &VectorNode) {
        match node {
            VectorNode::Path(path) => {
                for fill in [&path.fill, &path.stroke].into_iter().flatten() {
                    self.add_fill(fill);
                }
            }
            VectorNode::Group(group) => {
                for child in &group.children {
                    self.visit(child);
                }
            }
        }
    }

    fn add_fill(&mut self, fill: &Fill) {
        match fill {
            Fill::SolidColor(color) => self.add(*color),
            gradient => {
                for stop in gradient.color_stops() {
                    self.add(stop.color);
                }
            }
        }
    }

    fn add(&mut self, color: Color) {
        self.used_colors
            .insert(format!("#{:06X}", color.argb() & 0x00FF_FFFF));
        if !color.is_opaque() {
            self.used_colors.insert(format!("#{:08X}", color.argb()));
        }
    }

    pub fn color_count(&self) -> usize {
        self.used_colors.len()
    }

    pub fn is_multicolor(&self) -> bool {
        self.color_count() > 1
    }

    /// True when at least one template key names a color this icon uses.
    pub fn should_use_multicolor_template<'a>(
        &self,
        template_colors: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        template_colors
            .into_iter()
            .filter_map(normalize_key)
            .any(|(key, _)| self.used_colors.contains(&key))
    }
}

/// What a mapped color becomes in the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMapping {
    /// A Composable parameter named `semantic_name` whose default is `replacement`.
    Parameter {
        semantic_name: String,
        replacement: String,
    },
    /// An expression pasted where the color was.
    Direct(String),
}

impl ColorMapping {
    /// The text that replaces the color literal.
    pub fn substitution(&self) -> &str {
        match self {
            Self::Parameter { semantic_name, .. } => semantic_name,
            Self::Direct(expr) => expr,
        }
    }
}

/// Mapping table keyed by normalized hex (`#RRGGBB` or `#AARRGGBB`), in template order.
pub type ColorMappings = IndexMap<String, ColorMapping>;

/// Reads a `color_mappings` value produced by evaluating a template.
///
/// Keys that are not hex colors and entries without a usable replacement are skipped.
pub fn color_mappings_from_value(value: &Value) -> ColorMappings {
    let mut mappings = ColorMappings::new();
    let Ok(keys) = value.try_iter() else {
        tracing::warn!(kind = %value.kind(), "color_mappings is not a mapping, ignoring it");
        return mappings;
    };
    for key in keys {
        let Some((hex, _)) = key.as_str().and_then(normalize_key) else {
            tracing::warn!(key = %key, "ignoring color mapping with a non-hex key");
            continue;
        };
        let Ok(entry) = value.get_item(&key) else {
            continue;
        };
        match mapping_from_entry(&entry) {
            Some(mapping) => {
                mappings.insert(hex, mapping);
            }
            None => tracing::warn!(key = %hex, "ignoring color mapping without a replacement"),
        }
    }
    mappings
}

fn mapping_from_entry(entry: &Value) -> Option<ColorMapping> {
    if let Some(expr) = entry.as_str() {
        return Some(ColorMapping::Direct(expr.to_string()));
    }
    let attr = |name: &str| {
        entry
            .get_attr(name)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
    };
    let replacement = attr("replacement").or_else(|| attr("default_value"));
    match (attr("semantic_name"), replacement) {
        (Some(semantic_name), Some(replacement)) => Some(ColorMapping::Parameter {
            semantic_name,
            replacement,
        }),
        (None, Some(replacement)) => Some(ColorMapping::Direct(replacement)),
        _ => None,
    }
}

/// Generator overrides for every mapping.
///
/// A six-digit key matches the opaque color only; translucent variants are matched by their
/// own eight-digit key.
pub fn color_overrides(mappings: &ColorMappings) -> BTreeMap<Color, String> {
    mappings
        .iter()
        .filter_map(|(key, mapping)| {
            let (_, color) = normalize_key(key)?;
            Some((color, mapping.substitution().to_string()))
        })
        .collect()
}

/// `#rgb`-style keys are not accepted: only six (`RRGGBB`) or eight (`AARRGGBB`) digits.
fn normalize_key(key: &str) -> Option<(String, Color)> {
    let digits = key.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let argb = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        6 => Some((
            format!("#{:06X}", argb),
            Color::from_argb(0xFF00_0000 | argb),
        )),
        8 => Some((format!("#{:08X}", argb), Color::from_argb(argb))),
        _ => None,
    }
}
