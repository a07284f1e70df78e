//! Editor pane - host element for the CodeMirror widget
//!
//! Dioxus renders only the empty host; the widget fills it asynchronously
//! once CodeMirror has loaded, after which the current source text is
//! pushed in.

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::config::PlaygroundConfig;
use crate::editor::dom;
use crate::playground::{Actions, PlaygroundState};
use crate::registry::SourceLanguage;
use super::{report_fault, sync};

#[component]
pub fn EditorPane(state: Signal<PlaygroundState>) -> Element {
    let actions = use_context::<Actions>();
    let config = use_context::<PlaygroundConfig>();
    let handle = actions.editor().clone();

    use_effect({
        let actions = actions.clone();
        let config = config.clone();
        move || {
            let actions = actions.clone();
            let config = config.clone();
            spawn(async move {
                let language = actions
                    .active_snippet(&state.peek())
                    .map(|s| s.language)
                    .unwrap_or(SourceLanguage::Markup);
                let script = dom::mount_script(actions.editor(), language, &config.editor_theme);

                match document::eval(&script).join::<bool>().await {
                    Ok(true) => {
                        info!(handle = %actions.editor(), "editor mounted");
                        let push = actions.sync_editor(&state.peek());
                        match push {
                            Ok(push) => sync::deliver(push, state, config.push_retry_delay_ms),
                            Err(err) => report_fault(&err),
                        }
                    }
                    Ok(false) => warn!(handle = %actions.editor(), "editor host element missing"),
                    Err(err) => warn!(handle = %actions.editor(), ?err, "editor failed to mount"),
                }
            });
        }
    });

    rsx! {
        div {
            style: "flex: 1; min-width: 0; height: calc(100vh - 56px); overflow: auto; background: #282a36;",
            div {
                id: "{handle}",
                style: "height: 100%;",
            }
        }
    }
}
