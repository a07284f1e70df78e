//! PlaygroundState - the single source of truth, replaced on every transition

/// Immutable snapshot of the playground
///
/// `compiled_preview` is always the compiler's output for
/// `(active_snippet_id, source_text)`. It can lag behind the editor widget's
/// live buffer, never behind `source_text`. Only `Actions` builds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundState {
    active_snippet_id: String,
    source_text: String,
    compiled_preview: String,
    revision: u64,
}

impl PlaygroundState {
    pub(super) fn new(
        active_snippet_id: String,
        source_text: String,
        compiled_preview: String,
        revision: u64,
    ) -> Self {
        Self {
            active_snippet_id,
            source_text,
            compiled_preview,
            revision,
        }
    }

    pub fn active_snippet_id(&self) -> &str {
        &self.active_snippet_id
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn compiled_preview(&self) -> &str {
        &self.compiled_preview
    }

    /// Number of transitions since startup
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
