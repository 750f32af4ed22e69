//! Fully-qualified Kotlin imports and their formatting.

use std::collections::{BTreeMap, BTreeSet};

pub const IMAGE_VECTOR: &str = "androidx.compose.ui.graphics.vector.ImageVector";
pub const DP: &str = "androidx.compose.ui.unit.dp";
pub const COLOR: &str = "androidx.compose.ui.graphics.Color";
pub const SOLID_COLOR: &str = "androidx.compose.ui.graphics.SolidColor";
pub const BRUSH: &str = "androidx.compose.ui.graphics.Brush";
pub const OFFSET: &str = "androidx.compose.ui.geometry.Offset";
pub const PATH_NODE: &str = "androidx.compose.ui.graphics.vector.PathNode";
pub const STROKE_CAP: &str = "androidx.compose.ui.graphics.StrokeCap";
pub const STROKE_JOIN: &str = "androidx.compose.ui.graphics.StrokeJoin";
pub const PATH_FILL_TYPE: &str = "androidx.compose.ui.graphics.PathFillType";
pub const COMPOSABLE: &str = "androidx.compose.runtime.Composable";
pub const REMEMBER: &str = "androidx.compose.runtime.remember";
pub const MODIFIER: &str = "androidx.compose.ui.Modifier";

/// Renders `import …` lines in sorted order.
///
/// When `grouped`, imports sharing their first three package segments form one block and blocks
/// are separated by a blank line.
pub fn format_imports(imports: &BTreeSet<String>, grouped: bool) -> String {
    if !grouped {
        return imports
            .iter()
            .map(|imp| format!("import {imp}"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for imp in imports {
        groups.entry(group_key(imp)).or_default().push(imp);
    }
    groups
        .values()
        .map(|members| {
            members
                .iter()
                .map(|imp| format!("import {imp}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn group_key(import: &str) -> String {
    let parts: Vec<&str> = import.split('.').collect();
    if parts.len() >= 3 {
        parts[..3].join(".")
    } else {
        import.to_string()
    }
}
