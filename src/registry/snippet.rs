//! Snippet - one named example program in the registry

use super::language::SourceLanguage;
use crate::compiler::{ExecutionModel, Harness};

/// A single immutable example
///
/// `execution` decides how the preview compiler turns `source` into a
/// renderable document. Full documents render verbatim; fragments written
/// against a component-tree API are mounted by a synthesized harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Unique key (also used in deep links)
    pub id: String,
    /// Label shown in the sidebar and toolbar
    pub display_name: String,
    /// Highlighting tag for the editor
    pub language: SourceLanguage,
    /// How the source is turned into a preview document
    pub execution: ExecutionModel,
    /// Default source text
    pub source: String,
}

impl Snippet {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        language: SourceLanguage,
        execution: ExecutionModel,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            language,
            execution,
            source: source.into(),
        }
    }

    /// Convenience: a complete HTML document rendered as-is
    pub fn document(
        id: impl Into<String>,
        display_name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::new(id, display_name, SourceLanguage::Markup, ExecutionModel::Document, source)
    }

    /// Convenience: a script fragment mounted by `harness`
    pub fn fragment(
        id: impl Into<String>,
        display_name: impl Into<String>,
        harness: Harness,
        source: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            display_name,
            SourceLanguage::Script,
            ExecutionModel::Harness(harness),
            source,
        )
    }

    pub fn describe(&self) -> String {
        format!("{} ({}, {})", self.display_name, self.language, self.execution.describe())
    }
}
