//! Preview compiler - snippet + source text -> self-contained preview document
//!
//! Pure: no I/O, no shared state, same input gives byte-identical output.
//! The policy comes from the snippet's `execution` field, never its id.

pub mod harness;
pub mod policy;

pub use policy::{ExecutionModel, Harness};

use crate::registry::Snippet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewCompiler;

impl PreviewCompiler {
    pub fn new() -> Self {
        Self
    }

    pub fn compile(&self, snippet: &Snippet, source: &str) -> String {
        match &snippet.execution {
            ExecutionModel::Document => source.to_string(),
            ExecutionModel::Harness(h) => harness::render(h, &snippet.display_name, source),
        }
    }
}
