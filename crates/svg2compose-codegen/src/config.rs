//! Converter configuration (JSON).

use crate::generator::GeneratorOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Custom template file used instead of the built-in templates.
    pub template_path: Option<PathBuf>,
    /// Template with a `color_mappings` table; used only for icons that paint a mapped color.
    pub multicolor_template_path: Option<PathBuf>,
    /// Render exact matches of Compose's named colors as `Color.Red` instead of hex literals.
    #[serde(alias = "optimize_colors")]
    pub use_named_colors: bool,
    pub indent_size: usize,
    pub max_line_length: usize,
    pub group_imports: bool,
    pub use_trailing_comma: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            template_path: None,
            multicolor_template_path: None,
            use_named_colors: true,
            indent_size: 2,
            max_line_length: 120,
            group_imports: true,
            use_trailing_comma: true,
        }
    }
}

/// Per-invocation overrides (typically from CLI flags). `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub template_path: Option<PathBuf>,
    pub multicolor_template_path: Option<PathBuf>,
    pub use_named_colors: Option<bool>,
    pub indent_size: Option<usize>,
    pub max_line_length: Option<usize>,
    pub group_imports: Option<bool>,
    pub use_trailing_comma: Option<bool>,
}

impl ConverterConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_json_str(&text)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json_string()?;
        std::fs::write(path, format!("{text}\n")).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn merge_with_options(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(path) = &overrides.template_path {
            self.template_path = Some(path.clone());
        }
        if let Some(path) = &overrides.multicolor_template_path {
            self.multicolor_template_path = Some(path.clone());
        }
        if let Some(v) = overrides.use_named_colors {
            self.use_named_colors = v;
        }
        if let Some(v) = overrides.indent_size {
            self.indent_size = v;
        }
        if let Some(v) = overrides.max_line_length {
            self.max_line_length = v;
        }
        if let Some(v) = overrides.group_imports {
            self.group_imports = v;
        }
        if let Some(v) = overrides.use_trailing_comma {
            self.use_trailing_comma = v;
        }
        self
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            indent_size: self.indent_size,
            max_line_length: self.max_line_length,
            use_named_colors: self.use_named_colors,
            trailing_commas: self.use_trailing_comma,
        }
    }
}
