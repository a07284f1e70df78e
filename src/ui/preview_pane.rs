//! Preview pane - sandbox host for the compiled preview
//!
//! The frame is keyed by the state revision, so every transition replaces
//! it with a new browsing context. Re-running unchanged code therefore
//! still restarts the program from scratch.

use dioxus::prelude::*;

#[component]
pub fn PreviewPane(preview: String, revision: u64, sandbox: String) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 0; height: calc(100vh - 56px); background: white; border-left: 1px solid #1f2937; overflow: auto;",
            for frame in [revision] {
                iframe {
                    key: "{frame}",
                    id: "preview",
                    title: "Preview",
                    "sandbox": "{sandbox}",
                    "srcdoc": "{preview}",
                    "data-revision": "{frame}",
                    style: "width: 100%; height: 100%; min-height: 100%; border: none;",
                }
            }
        }
    }
}
