#![forbid(unsafe_code)]

//! Kotlin code generation for [`svg2compose_core::ImageVector`] trees.
//!
//! [`ImageVectorGenerator`] turns the IR into an `ImageVector.Builder(...).build()` expression plus
//! the imports it needs; [`TemplateEngine`] wraps that into a source file, optionally through a
//! multicolor template that turns mapped colors into parameters (see [`multicolor`]). Output is
//! deterministic: imports are kept sorted and numbers are formatted independently of locale.

pub mod config;
pub mod fmt;
pub mod generator;
pub mod imports;
pub mod multicolor;
pub mod naming;
pub mod paint;
pub mod template;

pub use config::{ConfigOverrides, ConverterConfig};
pub use generator::{GeneratedCode, GeneratorOptions, ImageVectorGenerator, generate_code};
pub use imports::format_imports;
pub use multicolor::{ColorAnalysis, ColorMapping, ColorMappings};
pub use naming::{NameComponents, NameResolver};
pub use paint::color_expression;
pub use template::{BuiltinTemplate, TemplateContext, TemplateEngine, read_template};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown template '{name}' (available: {available})")]
    UnknownTemplate { name: String, available: String },
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
