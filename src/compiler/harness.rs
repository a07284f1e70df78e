//! Harness document synthesis for fragment snippets
//!
//! Layout of the generated document:
//!   head: diagnostic helper + window error listeners, then runtime scripts
//!   body: mount point, then the fragment inside a load-deferred try/catch
//!
//! The fragment is spliced in byte-for-byte. Anything it throws while
//! evaluating lands in the catch block; syntax errors and errors thrown
//! later from event handlers reach the window listeners. Both paths render
//! a `<pre class="playground-diagnostic">` with the error text.

use super::policy::Harness;

/// Class of the element diagnostics are rendered into
pub const DIAGNOSTIC_CLASS: &str = "playground-diagnostic";

const DIAGNOSTIC_FN: &str = "__playgroundDiagnostic";

/// Opening of the guarded block; the fragment follows on the next line
pub const GUARD_OPEN: &str = "      try {\n";
/// Closing of the guarded block, including the visible-error path
pub const GUARD_CLOSE: &str = "\n      } catch (error) {\n        __playgroundDiagnostic(error);\n      }\n";

/// Build the host document around `fragment`.
pub fn render(harness: &Harness, title: &str, fragment: &str) -> String {
    let mut doc = String::with_capacity(fragment.len() + 1024);

    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    doc.push_str("  <meta charset=\"UTF-8\">\n");
    doc.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    push_diagnostic_script(&mut doc);
    for url in &harness.runtime_scripts {
        doc.push_str(&format!("  <script src=\"{}\"></script>\n", escape_html(url)));
    }
    doc.push_str("</head>\n<body>\n");
    doc.push_str(&format!("  <div id=\"{}\"></div>\n", escape_html(&harness.mount_id)));
    doc.push_str("  <script>\n");
    doc.push_str("    window.addEventListener('load', function () {\n");
    doc.push_str(GUARD_OPEN);
    doc.push_str(fragment);
    doc.push_str(GUARD_CLOSE);
    doc.push_str("    });\n");
    doc.push_str("  </script>\n</body>\n</html>\n");

    doc
}

fn push_diagnostic_script(doc: &mut String) {
    doc.push_str("  <script>\n");
    doc.push_str(&format!("    function {DIAGNOSTIC_FN}(error) {{\n"));
    doc.push_str("      var diagnostic = document.createElement('pre');\n");
    doc.push_str(&format!("      diagnostic.className = '{DIAGNOSTIC_CLASS}';\n"));
    doc.push_str("      diagnostic.style.color = 'red';\n");
    doc.push_str("      diagnostic.textContent = String(error);\n");
    doc.push_str("      (document.body || document.documentElement).appendChild(diagnostic);\n");
    doc.push_str("    }\n");
    doc.push_str("    window.addEventListener('error', function (event) {\n");
    doc.push_str(&format!("      {DIAGNOSTIC_FN}(event.error || event.message);\n"));
    doc.push_str("    });\n");
    doc.push_str("    window.addEventListener('unhandledrejection', function (event) {\n");
    doc.push_str(&format!("      {DIAGNOSTIC_FN}(event.reason);\n"));
    doc.push_str("    });\n");
    doc.push_str("  </script>\n");
}

/// Escape text for use in element content or a double-quoted attribute
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// The guarded region of a rendered harness document, if present
#[cfg(test)]
pub fn guarded_region(doc: &str) -> Option<&str> {
    let start = doc.find(GUARD_OPEN)? + GUARD_OPEN.len();
    let end = start + doc[start..].rfind(GUARD_CLOSE)?;
    Some(&doc[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness() -> Harness {
        Harness::new("app")
            .with_runtime("https://cdn.example/runtime.js")
            .with_runtime("https://cdn.example/hooks.js")
    }

    #[test]
    fn fragment_is_embedded_verbatim_in_guard() {
        let fragment = "const x = 1;\n  if (x < 2 && x > 0) { render(\"</div>\"); }";
        let doc = render(&harness(), "Sample", fragment);
        assert_eq!(guarded_region(&doc), Some(fragment));
    }

    #[test]
    fn runtime_scripts_load_in_order_before_the_mount_point() {
        let doc = render(&harness(), "Sample", "go();");
        let runtime = doc.find("https://cdn.example/runtime.js").unwrap();
        let hooks = doc.find("https://cdn.example/hooks.js").unwrap();
        let mount = doc.find("<div id=\"app\"></div>").unwrap();
        let guard = doc.find(GUARD_OPEN).unwrap();
        assert!(runtime < hooks);
        assert!(hooks < mount);
        assert!(mount < guard);
    }

    #[test]
    fn evaluation_waits_for_load() {
        let doc = render(&harness(), "Sample", "go();");
        let listener = doc.find("window.addEventListener('load'").unwrap();
        assert!(listener < doc.find("go();").unwrap());
    }

    #[test]
    fn catch_path_renders_error_text() {
        let doc = render(&harness(), "Sample", "throw new Error(\"boom\");");
        assert!(doc.contains("} catch (error) {\n        __playgroundDiagnostic(error);"));
        assert!(doc.contains("diagnostic.textContent = String(error);"));
        assert!(doc.contains(DIAGNOSTIC_CLASS));
        assert!(doc.contains("window.addEventListener('error'"));
        assert!(doc.contains("window.addEventListener('unhandledrejection'"));
    }

    #[test]
    fn title_and_urls_are_escaped() {
        let h = Harness::new("app").with_runtime("https://cdn.example/a.js?x=1&y=\"2\"");
        let doc = render(&h, "<Counter & co>", "");
        assert!(doc.contains("<title>&lt;Counter &amp; co&gt;</title>"));
        assert!(doc.contains("src=\"https://cdn.example/a.js?x=1&amp;y=&quot;2&quot;\""));
    }

    #[test]
    fn empty_fragment_still_has_guard() {
        let doc = render(&Harness::new("root"), "Empty", "");
        assert_eq!(guarded_region(&doc), Some(""));
        assert!(doc.contains("<div id=\"root\"></div>"));
    }
}
