use dioxus::prelude::*;

#[component]
pub fn Toolbar(title: String, on_run: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "height: 56px; background: #0f0f1a; border-bottom: 1px solid #1f2937; display: flex; align-items: center; justify-content: space-between; padding: 0 16px;",
            span {
                style: "color: #9ca3af; font-size: 13px; font-family: monospace;",
                "{title}"
            }
            button {
                id: "run",
                style: "padding: 8px 24px; background: #16a34a; color: white; border: none; border-radius: 6px; font-size: 14px; font-weight: 600; cursor: pointer; font-family: system-ui, sans-serif;",
                onclick: move |_| on_run(()),
                "\u{25B6} Run Code"
            }
        }
    }
}
