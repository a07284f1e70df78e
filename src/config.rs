//! PlaygroundConfig - fixed runtime settings, provided once as context

use crate::editor::EditorHandle;
use crate::sandbox::SandboxPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundConfig {
    /// Handle (and host element id) of the code editor
    pub editor_handle: EditorHandle,
    /// Delay before the single retry of an editor push
    pub push_retry_delay_ms: u32,
    /// CodeMirror theme name
    pub editor_theme: String,
    /// Capability grant of the preview frame
    pub sandbox: SandboxPolicy,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            editor_handle: EditorHandle::new("editor"),
            push_retry_delay_ms: 100,
            editor_theme: "dracula".to_string(),
            sandbox: SandboxPolicy::preview(),
        }
    }
}
