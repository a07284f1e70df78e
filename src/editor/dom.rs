//! DomEditors - CodeMirror instances in the browser
//!
//! The mount script loads CodeMirror 5 from a CDN, creates one instance per
//! host element and registers it in `window.__playgroundEditors[handle]`.
//! The adapter only ever goes through that map, so a widget that has not
//! finished loading (or whose host element is gone) reads as `NotReady`.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::{EditorAdapter, EditorError, EditorHandle, EditorResult};
use crate::registry::SourceLanguage;

/// Global the mount script registers instances under
pub const EDITORS_GLOBAL: &str = "__playgroundEditors";

const CODEMIRROR_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/codemirror/5.65.16";

const MOUNT_SCRIPT: &str = r#"
    const cdn = __CDN__;
    const handle = __HANDLE__;
    const mode = __MODE__;
    const theme = __THEME__;
    const registry = window[__GLOBAL__] = window[__GLOBAL__] || {};

    const load = (tag, attrs) => new Promise((resolve, reject) => {
        const key = tag === 'link' ? attrs.href : attrs.src;
        const existing = document.querySelector(`[data-playground-asset="${key}"]`);
        if (existing) {
            if (existing.dataset.loaded === 'true') { resolve(); return; }
            existing.addEventListener('load', () => resolve());
            existing.addEventListener('error', reject);
            return;
        }
        const el = document.createElement(tag);
        Object.assign(el, attrs);
        el.dataset.playgroundAsset = key;
        el.addEventListener('load', () => { el.dataset.loaded = 'true'; resolve(); });
        el.addEventListener('error', reject);
        document.head.appendChild(el);
    });

    if (!window.CodeMirror) {
        await load('link', { rel: 'stylesheet', href: cdn + '/codemirror.min.css' });
        await load('link', { rel: 'stylesheet', href: cdn + '/theme/' + theme + '.min.css' });
        await load('script', { src: cdn + '/codemirror.min.js' });
        for (const m of ['xml', 'javascript', 'css', 'htmlmixed']) {
            await load('script', { src: cdn + '/mode/' + m + '/' + m + '.min.js' });
        }
    }

    const host = document.getElementById(handle);
    if (!host) return false;

    let editor = registry[handle];
    if (!editor || editor.getWrapperElement().parentNode !== host) {
        host.innerHTML = '';
        editor = window.CodeMirror(host, { value: '', mode, theme, lineNumbers: true, tabSize: 2 });
        editor.setSize('100%', '100%');
        registry[handle] = editor;
    }
    return true;
"#;

/// Script that mounts (or re-attaches) the widget for `handle`.
///
/// Resolves to `true` once the instance is registered, `false` if the host
/// element is not in the document.
pub fn mount_script(handle: &EditorHandle, language: SourceLanguage, theme: &str) -> String {
    MOUNT_SCRIPT
        .replace("__CDN__", &js_string(CODEMIRROR_CDN))
        .replace("__HANDLE__", &js_string(handle.as_str()))
        .replace("__MODE__", &js_string(language.editor_mode()))
        .replace("__THEME__", &js_string(theme))
        .replace("__GLOBAL__", &js_string(EDITORS_GLOBAL))
}

/// Quote `value` as a JS string literal that is also safe inside `<script>`
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Adapter over the registered CodeMirror instances
#[derive(Debug, Clone, Copy, Default)]
pub struct DomEditors;

impl DomEditors {
    fn instance(&self, handle: &EditorHandle) -> EditorResult<JsValue> {
        let not_ready = || EditorError::NotReady(handle.to_string());

        let window = web_sys::window().ok_or_else(not_ready)?;
        // A registered instance whose host element left the document is stale
        let host_present = window
            .document()
            .and_then(|d| d.get_element_by_id(handle.as_str()))
            .is_some();
        if !host_present {
            return Err(not_ready());
        }

        let registry = Reflect::get(window.as_ref(), &JsValue::from_str(EDITORS_GLOBAL))
            .map_err(|_| not_ready())?;
        if registry.is_undefined() || registry.is_null() {
            return Err(not_ready());
        }
        let instance = Reflect::get(&registry, &JsValue::from_str(handle.as_str()))
            .map_err(|_| not_ready())?;
        if instance.is_undefined() || instance.is_null() {
            return Err(not_ready());
        }
        Ok(instance)
    }

    fn call(&self, handle: &EditorHandle, method: &'static str, args: &Array) -> EditorResult<JsValue> {
        let widget_error = |reason: String| EditorError::Widget {
            handle: handle.to_string(),
            method,
            reason,
        };

        let instance = self.instance(handle)?;
        let function = Reflect::get(&instance, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| widget_error("not a function".to_string()))?;
        function
            .apply(&instance, args)
            .map_err(|err| widget_error(format!("{err:?}")))
    }
}

impl EditorAdapter for DomEditors {
    fn try_set_buffer(&self, handle: &EditorHandle, text: &str) -> EditorResult<()> {
        self.call(handle, "setValue", &Array::of1(&JsValue::from_str(text)))?;
        Ok(())
    }

    fn try_get_buffer(&self, handle: &EditorHandle) -> EditorResult<String> {
        self.call(handle, "getValue", &Array::new())?
            .as_string()
            .ok_or_else(|| EditorError::Widget {
                handle: handle.to_string(),
                method: "getValue",
                reason: "returned a non-string".to_string(),
            })
    }

    fn try_set_language(&self, handle: &EditorHandle, language: SourceLanguage) -> EditorResult<()> {
        let args = Array::of2(
            &JsValue::from_str("mode"),
            &JsValue::from_str(language.editor_mode()),
        );
        self.call(handle, "setOption", &args)?;
        Ok(())
    }

    fn refresh(&self, handle: &EditorHandle) {
        if let Err(err) = self.call(handle, "refresh", &Array::new()) {
            tracing::debug!(%handle, %err, "editor refresh skipped");
        }
    }
}
