use serde::Serialize;
use std::fmt;

/// Element families that cannot be expressed as vector paths. Their subtrees are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementCategory {
    Text,
    Advanced,
    Filter,
    Animation,
    Embedded,
}

impl ElementCategory {
    pub fn classify(tag: &str) -> Option<Self> {
        match tag {
            "text" | "tspan" | "textPath" | "tref" => Some(Self::Text),
            "marker" | "symbol" | "use" | "switch" | "pattern" | "mask" | "view" | "cursor" => {
                Some(Self::Advanced)
            }
            "filter" => Some(Self::Filter),
            "set" | "mpath" | "discard" => Some(Self::Animation),
            "image" | "foreignObject" | "video" | "audio" | "iframe" | "canvas" => {
                Some(Self::Embedded)
            }
            t if t.starts_with("animate") => Some(Self::Animation),
            t if is_filter_primitive(t) => Some(Self::Filter),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Text => "Text element",
            Self::Advanced => "Advanced SVG element",
            Self::Filter => "Filter element",
            Self::Animation => "Animation element",
            Self::Embedded => "Embedded content element",
        }
    }
}

/// `feGaussianBlur`, `feOffset`, ...
fn is_filter_primitive(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    bytes.len() > 2 && tag.starts_with("fe") && bytes[2].is_ascii_uppercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceKind {
    Gradient,
    ClipPath,
}

/// Non-fatal conversion issues, collected once per document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    UnsupportedElement {
        category: ElementCategory,
        tag: String,
    },
    InvalidShapeGeometry {
        element: String,
    },
    UnregisteredReference {
        reference: ReferenceKind,
        id: String,
    },
    UnparseableTransform {
        function: String,
    },
    InvalidColor {
        value: String,
        reason: String,
    },
    MalformedPathData {
        message: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnsupportedElement { category, tag } => {
                write!(f, "{} '<{tag}>' is not supported", category.label())
            }
            Warning::InvalidShapeGeometry { element } => {
                write!(f, "Invalid geometry on '<{element}>', element dropped")
            }
            Warning::UnregisteredReference {
                reference: ReferenceKind::Gradient,
                id,
            } => write!(f, "Gradient '#{id}' is not defined, using opaque black"),
            Warning::UnregisteredReference {
                reference: ReferenceKind::ClipPath,
                id,
            } => write!(f, "Clip path '#{id}' is not defined, clip ignored"),
            Warning::UnparseableTransform { function } => {
                write!(f, "Transform function '{function}' ignored")
            }
            Warning::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}' treated as no paint: {reason}")
            }
            Warning::MalformedPathData { message } => {
                write!(f, "Path dropped: {message}")
            }
        }
    }
}
