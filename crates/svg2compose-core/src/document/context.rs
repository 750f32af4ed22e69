use crate::ir::Fill;
use crate::path::PathCommand;
use crate::warning::Warning;
use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use super::ParseOptions;

/// Per-document state: definitions registered by id, plus the warning accumulator.
///
/// Created for one parse call and dropped with it; never shared between documents.
#[derive(Debug, Default)]
pub struct ParseContext {
    options: ParseOptions,
    gradients: FxHashMap<String, Fill>,
    clip_paths: FxHashMap<String, Vec<PathCommand>>,
    warnings: IndexSet<Warning>,
}

impl ParseContext {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn register_gradient(&mut self, id: impl Into<String>, fill: Fill) {
        self.gradients.insert(id.into(), fill);
    }

    pub fn gradient(&self, id: &str) -> Option<&Fill> {
        self.gradients.get(id)
    }

    pub fn register_clip_path(&mut self, id: impl Into<String>, commands: Vec<PathCommand>) {
        self.clip_paths.insert(id.into(), commands);
    }

    pub fn clip_path(&self, id: &str) -> Option<&[PathCommand]> {
        self.clip_paths.get(id).map(Vec::as_slice)
    }

    /// Records a warning; repeats of an identical warning are dropped.
    pub fn warn(&mut self, warning: Warning) {
        if !self.warnings.contains(&warning) {
            tracing::warn!("{warning}");
            self.warnings.insert(warning);
        }
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings.into_iter().collect()
    }
}
