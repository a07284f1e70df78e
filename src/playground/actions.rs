//! Action handlers - `switch` and `run`
//!
//! Collaborators (registry, compiler, editor handle) are handed in at
//! construction. Each transition returns a fresh `PlaygroundState`; the
//! caller stores it. The editor push that follows a switch is returned as a
//! value and is not part of the state invariant.

use std::rc::Rc;

use tracing::debug;

use super::state::PlaygroundState;
use super::PlaygroundResult;
use crate::compiler::PreviewCompiler;
use crate::editor::{BufferPush, EditorAdapter, EditorError, EditorHandle};
use crate::registry::{Snippet, SnippetRegistry};

/// Result of a snippet switch: the new state and the editor push to attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switched {
    pub state: PlaygroundState,
    pub push: BufferPush,
}

#[derive(Debug, Clone)]
pub struct Actions {
    registry: Rc<SnippetRegistry>,
    compiler: PreviewCompiler,
    editor: EditorHandle,
}

impl Actions {
    pub fn new(registry: Rc<SnippetRegistry>, compiler: PreviewCompiler, editor: EditorHandle) -> Self {
        Self { registry, compiler, editor }
    }

    pub fn registry(&self) -> &SnippetRegistry {
        &self.registry
    }

    pub fn editor(&self) -> &EditorHandle {
        &self.editor
    }

    /// Startup state: the first registry entry, compiled
    pub fn initial_state(&self) -> PlaygroundState {
        let snippet = self.registry.first();
        self.snapshot(snippet, snippet.source.clone(), 0)
    }

    /// Startup state opened on `id`. The id comes from the URL, so an
    /// unknown one is not a programming error; it falls back to the default.
    pub fn initial_state_at(&self, id: &str) -> PlaygroundState {
        match self.registry.get(id) {
            Ok(snippet) => self.snapshot(snippet, snippet.source.clone(), 0),
            Err(err) => {
                tracing::warn!(%err, "deep link ignored");
                self.initial_state()
            }
        }
    }

    pub fn active_snippet(&self, state: &PlaygroundState) -> PlaygroundResult<&Snippet> {
        Ok(self.registry.get(state.active_snippet_id())?)
    }

    /// Make `target` active with its default source. Pending edits in the
    /// editor are discarded.
    pub fn switch(&self, state: &PlaygroundState, target: &str) -> PlaygroundResult<Switched> {
        let snippet = self.registry.get(target)?;
        let next = self.snapshot(snippet, snippet.source.clone(), state.revision() + 1);
        debug!(snippet = %snippet.id, revision = next.revision(), "switched snippet");

        let push = BufferPush::new(
            self.editor.clone(),
            next.source_text(),
            snippet.language,
            next.revision(),
        );
        Ok(Switched { state: next, push })
    }

    /// Recompile from the editor's live buffer.
    ///
    /// `Ok(None)` when the editor is not mounted yet: nothing to run, and the
    /// current state stays as it is.
    pub fn run<E: EditorAdapter + ?Sized>(
        &self,
        state: &PlaygroundState,
        editors: &E,
    ) -> PlaygroundResult<Option<PlaygroundState>> {
        let live = match editors.try_get_buffer(&self.editor) {
            Ok(text) => text,
            Err(EditorError::NotReady(handle)) => {
                debug!(%handle, "run skipped, editor not mounted");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let snippet = self.active_snippet(state)?;
        let next = self.snapshot(snippet, live, state.revision() + 1);
        debug!(snippet = %snippet.id, revision = next.revision(), bytes = next.source_text().len(), "ran snippet");
        Ok(Some(next))
    }

    /// Push of the current source text, used once the widget finishes mounting
    pub fn sync_editor(&self, state: &PlaygroundState) -> PlaygroundResult<BufferPush> {
        let snippet = self.active_snippet(state)?;
        Ok(BufferPush::new(
            self.editor.clone(),
            state.source_text(),
            snippet.language,
            state.revision(),
        ))
    }

    fn snapshot(&self, snippet: &Snippet, source: String, revision: u64) -> PlaygroundState {
        let preview = self.compiler.compile(snippet, &source);
        PlaygroundState::new(snippet.id.clone(), source, preview, revision)
    }
}
