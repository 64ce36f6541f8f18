use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, HtmlInputElement};

use crate::error::{Result, TrackerError};

pub fn document() -> Result<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| TrackerError::Dom("no document".to_string()))
}

/// Runs `f` once the document has been parsed.
pub fn on_ready<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn input_value(root: &Element) -> Option<String> {
    query(root, "input")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

pub fn set_style(el: &Element, property: &str, value: Option<&str>) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
