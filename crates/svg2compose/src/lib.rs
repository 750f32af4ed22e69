#![forbid(unsafe_code)]

//! `svg2compose` converts SVG icons into Kotlin source for Compose `ImageVector`s.
//!
//! The pipeline is parse ([`SvgParser`]) → name resolution ([`codegen::NameResolver`]) →
//! generation ([`codegen::ImageVectorGenerator`]) → templating ([`codegen::TemplateEngine`]).
//! [`convert_svg`] runs all of it; the pieces are re-exported for callers that need one stage.

pub use svg2compose_core::*;

pub mod codegen {
    pub use svg2compose_codegen::*;
}

use std::collections::BTreeSet;
use std::path::PathBuf;
use svg2compose_codegen::{
    BuiltinTemplate, ConverterConfig, ImageVectorGenerator, NameComponents, NameResolver,
    TemplateContext, TemplateEngine, read_template,
};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] svg2compose_core::Error),
    #[error(transparent)]
    Codegen(#[from] svg2compose_codegen::Error),
}

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Explicit icon name (may be dotted: `navigation.home`).
    pub name: Option<String>,
    /// Source file, used for the file-stem name fallback.
    pub file_path: Option<PathBuf>,
    /// Built-in template; ignored when `config.template_path` is set.
    pub template: BuiltinTemplate,
    pub config: ConverterConfig,
    pub parse: ParseOptions,
}

impl ConvertOptions {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_template(mut self, template: BuiltinTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }
}

/// Result of [`convert_svg`].
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Rendered template output.
    pub code: String,
    pub image_vector: ImageVector,
    pub names: NameComponents,
    pub imports: BTreeSet<String>,
    pub warnings: Vec<Warning>,
}

/// Parses `text`, names the icon, generates builder code and renders it through the selected
/// template.
///
/// Template precedence: the multicolor template when the icon paints one of its mapped colors,
/// then the custom template file, then the built-in `options.template`.
pub fn convert_svg(text: &str, options: &ConvertOptions) -> ConvertResult<Conversion> {
    let parsed = SvgParser::new().with_options(options.parse).parse(text)?;
    let mut image_vector = parsed.image_vector;

    let names = resolve_names(&image_vector, options);
    image_vector.rename(names.raw_name.clone());

    let config = &options.config;
    let generator = ImageVectorGenerator::new().with_options(config.generator_options());
    let generated = generator.generate(&image_vector);

    let engine = TemplateEngine::new()
        .with_group_imports(config.group_imports)
        .with_indent_size(config.indent_size);
    let multicolor = match &config.multicolor_template_path {
        Some(path) => {
            engine.render_multicolor(&read_template(path)?, &generator, &image_vector, &names)?
        }
        None => None,
    };
    let ctx = TemplateContext {
        build_code: &generated.code,
        imports: &generated.imports,
        names: &names,
    };
    let code = match (multicolor, &config.template_path) {
        (Some(code), _) => code,
        (None, Some(path)) => engine.render_custom(&read_template(path)?, &ctx)?,
        (None, None) => engine.render(options.template, &ctx),
    };

    Ok(Conversion {
        code,
        image_vector,
        names,
        imports: generated.imports,
        warnings: parsed.warnings,
    })
}

/// Explicit name, then the document's own id, then the file stem.
fn resolve_names(image_vector: &ImageVector, options: &ConvertOptions) -> NameComponents {
    let resolver = NameResolver::new();
    let document_name =
        (image_vector.name != DEFAULT_ICON_NAME).then_some(image_vector.name.as_str());
    match (options.name.as_deref().or(document_name), &options.file_path) {
        (Some(name), _) => resolver.resolve_str(name),
        (None, Some(path)) => resolver.resolve(path, None),
        (None, None) => resolver.resolve_str(&image_vector.name),
    }
}
