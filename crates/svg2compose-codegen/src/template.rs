//! Output templates: built-in wrappers and Jinja-style custom templates.

use crate::generator::ImageVectorGenerator;
use crate::imports::{self, format_imports};
use crate::multicolor::{
    COLOR_MAPPINGS_VAR, ColorAnalysis, color_mappings_from_value, color_overrides,
};
use crate::naming::{NameComponents, camel_case, pascal_case, snake_case};
use crate::{Error, Result};
use minijinja::Environment;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;
use svg2compose_core::ImageVector;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BuiltinTemplate {
    #[default]
    Default,
    ValDeclaration,
    IconObject,
    ComposableFunction,
}

impl BuiltinTemplate {
    pub const ALL: [BuiltinTemplate; 4] = [
        BuiltinTemplate::Default,
        BuiltinTemplate::ValDeclaration,
        BuiltinTemplate::IconObject,
        BuiltinTemplate::ComposableFunction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ValDeclaration => "val_declaration",
            Self::IconObject => "icon_object",
            Self::ComposableFunction => "composable_function",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Default => "Imports followed by the bare ImageVector.Builder expression",
            Self::ValDeclaration => "A top-level `val <Name>Icon: ImageVector` declaration",
            Self::IconObject => "An `object <Name>Icon` exposing a lazily built `imageVector`",
            Self::ComposableFunction => "A @Composable function returning a remembered ImageVector",
        }
    }

    pub fn lookup(name: &str) -> Result<Self> {
        name.parse().map_err(|_| Error::UnknownTemplate {
            name: name.to_string(),
            available: Self::ALL.map(Self::name).join(", "),
        })
    }
}

impl FromStr for BuiltinTemplate {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s.trim())
            .ok_or(())
    }
}

/// Inputs shared by every template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub build_code: &'a str,
    pub imports: &'a BTreeSet<String>,
    pub names: &'a NameComponents,
}

/// Name parts as template attributes (`{{ name.name_part_pascal }}`).
#[derive(Debug, Clone, Serialize)]
struct NameVars {
    raw_name: String,
    name_part: String,
    name_part_pascal: String,
    name_part_camel: String,
    namespace_part: String,
    namespace_part_pascal: String,
    namespace_part_camel: String,
    full_path: String,
    full_path_pascal: String,
    full_path_camel: String,
}

impl From<&NameComponents> for NameVars {
    fn from(names: &NameComponents) -> Self {
        Self {
            raw_name: names.raw_name.clone(),
            name_part: names.name_part().to_string(),
            name_part_pascal: names.name_part_pascal(),
            name_part_camel: names.name_part_camel(),
            namespace_part: names.namespace_part(),
            namespace_part_pascal: names.namespace_part_pascal(),
            namespace_part_camel: names.namespace_part_camel(),
            full_path: names.full_path(),
            full_path_pascal: names.full_path_pascal(),
            full_path_camel: names.full_path_camel(),
        }
    }
}

/// Variables visible to custom templates.
#[derive(Debug, Clone, Serialize)]
struct TemplateVars<'a> {
    imports: String,
    build_code: &'a str,
    icon_name: String,
    icon: String,
    namespace: String,
    full_name: String,
    name: NameVars,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_code_with_color_params: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    used_colors: Option<&'a BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_multicolor: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct TemplateEngine {
    group_imports: bool,
    indent: String,
    env: Environment<'static>,
    multicolor_env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self {
            group_imports: true,
            indent: "  ".to_string(),
            env: environment(true),
            multicolor_env: environment(false),
        }
    }
}

/// Jinja environment with the naming filters registered next to the built-in ones (`indent`,
/// `upper`, `join`, ...).
///
/// With `trim_blocks`, block tags swallow their own line and leading whitespace. Multicolor
/// templates are rendered without it and place newlines with `{%-` markers instead.
fn environment(trim_blocks: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(trim_blocks);
    env.set_lstrip_blocks(trim_blocks);
    env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
    env.add_filter("pascal_case", |value: String| pascal_case(&value));
    env.add_filter("camel_case", |value: String| camel_case(&value));
    env.add_filter("snake_case", |value: String| snake_case(&value));
    env
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group_imports(mut self, group_imports: bool) -> Self {
        self.group_imports = group_imports;
        self
    }

    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent = " ".repeat(indent_size);
        self
    }

    pub fn render(&self, template: BuiltinTemplate, ctx: &TemplateContext<'_>) -> String {
        let icon = format!("{}Icon", ctx.names.name_part_pascal());
        let unit = &self.indent;
        match template {
            BuiltinTemplate::Default => self.with_imports(ctx.imports, ctx.build_code),
            BuiltinTemplate::ValDeclaration => self.with_imports(
                ctx.imports,
                &format!("val {icon}: ImageVector = {}", ctx.build_code),
            ),
            BuiltinTemplate::IconObject => {
                let body = indent_lines(ctx.build_code, &unit.repeat(2));
                self.with_imports(
                    ctx.imports,
                    &format!(
                        "object {icon} {{\n{unit}val imageVector: ImageVector by lazy {{\n{body}\n{unit}}}\n}}"
                    ),
                )
            }
            BuiltinTemplate::ComposableFunction => {
                let mut imports = ctx.imports.clone();
                for extra in [
                    imports::COMPOSABLE,
                    imports::REMEMBER,
                    imports::MODIFIER,
                    imports::COLOR,
                ] {
                    imports.insert(extra.to_string());
                }
                let body = indent_lines(ctx.build_code, &unit.repeat(2));
                self.with_imports(
                    &imports,
                    &format!(
                        "@Composable\nfun {icon}(\n{unit}modifier: Modifier = Modifier,\n{unit}tint: Color = Color.Unspecified\n): ImageVector {{\n{unit}return remember {{\n{body}\n{unit}}}\n}}"
                    ),
                )
            }
        }
    }

    /// Renders a custom Jinja template.
    ///
    /// Variables: `imports`, `build_code`, `icon_name`, `icon`, `namespace`, `full_name` and the
    /// `name` object. Undefined variables render empty; syntax errors and unknown filters fail.
    pub fn render_custom(&self, source: &str, ctx: &TemplateContext<'_>) -> Result<String> {
        Ok(self.env.render_str(source, self.variables(ctx))?)
    }

    /// Renders a multicolor template, or returns `None` when none of its `color_mappings` keys
    /// names a color the icon paints (the caller then falls back to its regular template).
    ///
    /// Mapped colors are regenerated as their parameter name or replacement expression. On top
    /// of the [`render_custom`](Self::render_custom) variables the template sees
    /// `build_code_with_color_params`, `used_colors`, `color_count` and `is_multicolor`.
    pub fn render_multicolor(
        &self,
        source: &str,
        generator: &ImageVectorGenerator,
        image_vector: &ImageVector,
        names: &NameComponents,
    ) -> Result<Option<String>> {
        let generated = generator.generate(image_vector);
        let analysis = ColorAnalysis::of(image_vector);
        let ctx = TemplateContext {
            build_code: &generated.code,
            imports: &generated.imports,
            names,
        };

        let template = self.multicolor_env.template_from_str(source)?;
        let mut vars = self.variables(&ctx);
        vars.used_colors = Some(&analysis.used_colors);
        vars.color_count = Some(analysis.color_count());
        vars.is_multicolor = Some(analysis.is_multicolor());
        vars.build_code_with_color_params = Some(&generated.code);

        let state = template.eval_to_state(&vars)?;
        let Some(table) = state.lookup(COLOR_MAPPINGS_VAR) else {
            tracing::debug!(icon = %names.raw_name, "multicolor template defines no color_mappings");
            return Ok(None);
        };
        let mappings = color_mappings_from_value(&table);
        if !analysis.should_use_multicolor_template(mappings.keys().map(String::as_str)) {
            tracing::debug!(
                icon = %names.raw_name,
                colors = analysis.color_count(),
                "no mapped colors in icon, skipping multicolor template"
            );
            return Ok(None);
        }

        let substituted = generator
            .clone()
            .with_color_overrides(color_overrides(&mappings))
            .generate(image_vector);
        vars.build_code_with_color_params = Some(&substituted.code);
        tracing::debug!(
            icon = %names.raw_name,
            mapped = mappings.len(),
            "rendering multicolor template"
        );
        Ok(Some(template.render(&vars)?))
    }

    fn variables<'a>(&self, ctx: &TemplateContext<'a>) -> TemplateVars<'a> {
        TemplateVars {
            imports: format_imports(ctx.imports, self.group_imports),
            build_code: ctx.build_code,
            icon_name: ctx.names.name_part_pascal(),
            icon: ctx.names.name_part_camel(),
            namespace: ctx.names.namespace_part_pascal(),
            full_name: ctx.names.full_path_pascal(),
            name: NameVars::from(ctx.names),
            build_code_with_color_params: None,
            used_colors: None,
            color_count: None,
            is_multicolor: None,
        }
    }

    fn with_imports(&self, imports: &BTreeSet<String>, body: &str) -> String {
        let formatted = format_imports(imports, self.group_imports);
        if formatted.is_empty() {
            return body.to_string();
        }
        format!("{formatted}\n\n{body}")
    }
}

/// Reads a custom template file.
pub fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Prefixes every non-empty line.
fn indent_lines(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
