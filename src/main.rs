mod compiler;
mod config;
mod editor;
mod playground;
mod registry;
mod sandbox;
mod ui;

use std::rc::Rc;

use dioxus::prelude::*;

use compiler::PreviewCompiler;
use config::PlaygroundConfig;
use playground::Actions;
use registry::SnippetRegistry;
use ui::PlaygroundShell;

#[derive(Routable, Clone, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:snippet")]
    Deeplink { snippet: String },
}

#[component]
fn Home() -> Element {
    rsx! { PlaygroundShell {} }
}

/// Opens the playground on `snippet` instead of the first entry
#[component]
fn Deeplink(snippet: String) -> Element {
    rsx! { PlaygroundShell { initial: snippet } }
}

#[allow(non_snake_case)]
fn App() -> Element {
    let config = use_context_provider(PlaygroundConfig::default);
    use_context_provider(move || {
        let registry = SnippetRegistry::with_builtins().expect("built-in snippets form a valid registry");
        tracing::info!(snippets = registry.len(), "registry loaded");
        Actions::new(Rc::new(registry), PreviewCompiler::new(), config.editor_handle.clone())
    });

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
