//! Icon names: dotted categories (`navigation.home`) and their case conversions.

use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;
use svg2compose_core::DEFAULT_ICON_NAME;

/// A resolved icon name. The last category is the icon itself; the ones before it form its
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameComponents {
    pub raw_name: String,
    pub categories: Vec<String>,
    pub name: String,
}

impl NameComponents {
    /// Everything before the last category, dot-joined (`""` for a single category).
    pub fn namespace_part(&self) -> String {
        match self.categories.split_last() {
            Some((_, rest)) if !rest.is_empty() => rest.join("."),
            _ => String::new(),
        }
    }

    pub fn name_part(&self) -> &str {
        &self.name
    }

    pub fn full_path(&self) -> String {
        self.categories.join(".")
    }

    pub fn namespace_part_pascal(&self) -> String {
        dotted_pascal(&self.namespace_part())
    }

    pub fn namespace_part_camel(&self) -> String {
        dotted_camel(&self.namespace_part())
    }

    pub fn name_part_pascal(&self) -> String {
        pascal_case(&self.name)
    }

    pub fn name_part_camel(&self) -> String {
        camel_case(&self.name)
    }

    pub fn full_path_pascal(&self) -> String {
        dotted_pascal(&self.full_path())
    }

    pub fn full_path_camel(&self) -> String {
        dotted_camel(&self.full_path())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NameResolver {
    separator: char,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self { separator: '.' }
    }
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Uses `user_name` when given, otherwise the file stem (`-` and spaces become `_`).
    pub fn resolve(&self, file_path: &Path, user_name: Option<&str>) -> NameComponents {
        if let Some(name) = user_name.map(str::trim).filter(|n| !n.is_empty()) {
            return self.resolve_str(name);
        }
        let stem = file_path
            .file_stem()
            .map(|s| s.to_string_lossy().replace(['-', ' '], "_"))
            .unwrap_or_default();
        self.resolve_str(&stem)
    }

    pub fn resolve_str(&self, name: &str) -> NameComponents {
        let categories: Vec<String> = name
            .split(self.separator)
            .map(clean_identifier)
            .filter(|part| !part.is_empty())
            .collect();
        let leaf = categories
            .last()
            .cloned()
            .unwrap_or_else(|| DEFAULT_ICON_NAME.to_string());
        NameComponents {
            raw_name: name.to_string(),
            categories,
            name: leaf,
        }
    }
}

fn non_identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid regex"))
}

/// Keeps `[A-Za-z0-9]`, turning every other run into a single `_`, without leading or trailing
/// underscores.
fn clean_identifier(text: &str) -> String {
    non_identifier_regex()
        .replace_all(text, "_")
        .trim_matches('_')
        .to_string()
}

/// Splits on non-alphanumerics and on lowercase-to-uppercase boundaries (`homeIcon` is
/// `home`, `Icon`).
fn words(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev_lower = false;

    for (idx, ch) in text.char_indices() {
        if !ch.is_ascii_alphanumeric() {
            if let Some(s) = start.take() {
                out.push(&text[s..idx]);
            }
            prev_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && prev_lower {
            if let Some(s) = start {
                out.push(&text[s..idx]);
            }
            start = Some(idx);
        } else if start.is_none() {
            start = Some(idx);
        }
        prev_lower = ch.is_ascii_lowercase();
    }
    if let Some(s) = start {
        out.push(&text[s..]);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn lower_first(text: String) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => text,
    }
}

pub fn pascal_case(text: &str) -> String {
    words(text).into_iter().map(capitalize).collect()
}

pub fn camel_case(text: &str) -> String {
    lower_first(pascal_case(text))
}

pub fn snake_case(text: &str) -> String {
    words(text)
        .into_iter()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// PascalCase per dot-separated segment, keeping the dots.
fn dotted_pascal(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split('.').map(pascal_case).collect::<Vec<_>>().join(".")
}

/// Like [`dotted_pascal`], but the first segment starts lowercase.
fn dotted_camel(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split('.')
        .enumerate()
        .map(|(idx, part)| {
            if idx == 0 {
                camel_case(part)
            } else {
                pascal_case(part)
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}
