//! Playground shell - sidebar, toolbar, editor and preview panes
//!
//! Owns the `Signal<PlaygroundState>` and is the only place that replaces
//! it. Panes receive the pieces they render; the editor pane and the push
//! delivery reach the widget only through the editor adapter.

mod editor_pane;
mod preview_pane;
mod sidebar;
mod sync;
mod toolbar;

use dioxus::prelude::*;
use tracing::debug;
use wasm_bindgen::JsValue;

use crate::config::PlaygroundConfig;
use crate::editor::DomEditors;
use crate::playground::{Actions, PlaygroundError, Switched};
use editor_pane::EditorPane;
use preview_pane::PreviewPane;
use sidebar::Sidebar;
use toolbar::Toolbar;

/// A broken invariant (unknown snippet id and the like). Loud in debug
/// builds, logged in release builds.
pub(crate) fn report_fault(err: &PlaygroundError) {
    tracing::error!(%err, "playground invariant violated");
    if cfg!(debug_assertions) {
        panic!("playground invariant violated: {err}");
    }
}

/// Point the address bar at the active snippet's deep link. Goes through
/// `history.replaceState` so the router does not remount the shell.
fn remember_location(snippet: &str) {
    let path = crate::Route::Deeplink { snippet: snippet.to_string() }.to_string();
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
        debug!(?err, %path, "could not update location");
    }
}

#[component]
pub fn PlaygroundShell(#[props(default)] initial: String) -> Element {
    let actions = use_context::<Actions>();
    let config = use_context::<PlaygroundConfig>();

    let mut state = use_signal({
        let actions = actions.clone();
        move || {
            if initial.is_empty() {
                actions.initial_state()
            } else {
                actions.initial_state_at(&initial)
            }
        }
    });

    let on_switch = {
        let actions = actions.clone();
        let delay = config.push_retry_delay_ms;
        move |target: String| {
            let switched = actions.switch(&state.peek(), &target);
            match switched {
                Ok(Switched { state: next, push }) => {
                    remember_location(next.active_snippet_id());
                    state.set(next);
                    sync::deliver(push, state, delay);
                }
                Err(err) => report_fault(&err),
            }
        }
    };

    let on_run = {
        let actions = actions.clone();
        move |_: ()| {
            let ran = actions.run(&state.peek(), &DomEditors);
            match ran {
                Ok(Some(next)) => state.set(next),
                Ok(None) => {}
                Err(err) => report_fault(&err),
            }
        }
    };

    let snapshot = state.read().clone();
    let title = actions
        .active_snippet(&snapshot)
        .map(|s| s.describe())
        .unwrap_or_default();
    let sandbox = config.sandbox.attribute();

    rsx! {
        div {
            style: "display: flex; width: 100vw; height: 100vh; overflow: hidden; background: #0f0f1a;",

            Sidebar {
                active: snapshot.active_snippet_id().to_string(),
                on_select: on_switch,
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",

                Toolbar {
                    title: title,
                    on_run: on_run,
                }

                div {
                    style: "flex: 1; display: flex; min-height: 0;",
                    EditorPane { state: state }
                    PreviewPane {
                        preview: snapshot.compiled_preview().to_string(),
                        revision: snapshot.revision(),
                        sandbox: sandbox,
                    }
                }
            }
        }
    }
}
