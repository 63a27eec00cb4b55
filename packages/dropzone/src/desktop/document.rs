use std::rc::Rc;

use wry::WebView;

use crate::dom::{Document, DropElement};

/// Quote `text` as a JavaScript string literal.
fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// The page loaded in a native webview, driven through scripts.
///
/// The page lives in another process, so lookups cannot tell whether an element exists. Every handle is returned and
/// each script re-resolves its selector, doing nothing when the element is missing.
#[derive(Clone)]
pub struct ScriptDocument {
    webview: Rc<WebView>,
}

impl ScriptDocument {
    pub fn new(webview: Rc<WebView>) -> Self {
        Self { webview }
    }
}

impl Document for ScriptDocument {
    type Element = ScriptElement;

    fn query_selector(&self, selector: &str) -> Option<ScriptElement> {
        Some(ScriptElement {
            selector: js_string(selector),
            webview: self.webview.clone(),
        })
    }
}

/// A selector in the webview page that scripts are run against.
#[derive(Clone)]
pub struct ScriptElement {
    selector: String,
    webview: Rc<WebView>,
}

impl ScriptElement {
    fn run(&self, body: &str) {
        let script = element_script(&self.selector, body);
        if let Err(err) = self.webview.evaluate_script(&script) {
            tracing::warn!("failed to update drop-zone page: {err}");
        }
    }
}

fn element_script(selector: &str, body: &str) -> String {
    format!("(function (el) {{ if (!el) return; {body} }})(document.querySelector({selector}));")
}

impl DropElement for ScriptElement {
    fn add_class(&self, class: &str) {
        self.run(&format!("el.classList.add({});", js_string(class)));
    }

    fn remove_class(&self, class: &str) {
        self.run(&format!("el.classList.remove({});", js_string(class)));
    }

    fn clear_children(&self) {
        self.run("el.replaceChildren();");
    }

    fn append_text_child(&self, tag: &str, text: &str) {
        self.run(&format!(
            "const item = document.createElement({}); item.textContent = {}; el.appendChild(item);",
            js_string(tag),
            js_string(text)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_quoted_for_scripts() {
        assert_eq!(js_string("a.txt"), r#""a.txt""#);
        assert_eq!(js_string(r#"C:\dir\"x".txt"#), r#""C:\\dir\\\"x\".txt""#);
    }

    #[test]
    fn scripts_skip_missing_elements() {
        let script = element_script(&js_string("#dropzone"), "el.replaceChildren();");
        assert_eq!(
            script,
            r##"(function (el) { if (!el) return; el.replaceChildren(); })(document.querySelector("#dropzone"));"##
        );
    }
}
