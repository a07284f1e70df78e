use dioxus::prelude::*;

use crate::playground::Actions;

/// Snippet list in registry order; the active entry is highlighted
#[component]
pub fn Sidebar(active: String, on_select: EventHandler<String>) -> Element {
    let actions = use_context::<Actions>();
    let registry = actions.registry();
    let entries: Vec<(String, String)> = registry
        .ids()
        .filter_map(|id| registry.get(id).ok())
        .map(|s| (s.id.clone(), s.display_name.clone()))
        .collect();

    rsx! {
        div {
            style: "width: 240px; background: #111827; border-right: 1px solid #1f2937; display: flex; flex-direction: column; overflow-y: auto; font-family: system-ui, sans-serif;",

            div {
                style: "padding: 16px; border-bottom: 1px solid #1f2937;",
                h3 {
                    style: "margin: 0; color: #e5e7eb; font-size: 16px; font-weight: 700;",
                    "Counter Playground"
                }
            }

            for (id, name) in entries {
                {
                    let is_active = id == active;
                    let bg = if is_active { "#1a1a2e" } else { "transparent" };
                    let color = if is_active { "#e5e7eb" } else { "#9ca3af" };
                    let border = if is_active { "#6366f1" } else { "transparent" };
                    let weight = if is_active { "600" } else { "400" };
                    rsx! {
                        button {
                            key: "{id}",
                            "data-snippet": "{id}",
                            style: "width: 100%; text-align: left; padding: 12px 16px; background: {bg}; color: {color}; border: none; border-left: 3px solid {border}; border-bottom: 1px solid #1f2937; font-size: 14px; font-weight: {weight}; cursor: pointer; font-family: system-ui, sans-serif;",
                            onclick: move |_| on_select(id.clone()),
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
