//! Page Capability
//!
//! Thin wrapper over the window/document pair. Every lookup is optional:
//! behaviors ask for what they need and skip themselves when it is missing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, UrlSearchParams, Window};

#[derive(Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    /// The page this module is running in, if any
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    #[cfg(feature = "landing")]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[cfg(feature = "directory")]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Element by id, cast to a concrete element type
    pub fn by_id_as<T: JsCast>(&self, id: &str) -> Option<T> {
        self.by_id(id)?.dyn_into::<T>().ok()
    }

    /// First element matching `selector`
    pub fn one(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn all(&self, selector: &str) -> Vec<Element> {
        dom_hooks::query_all_in(&self.document, selector)
    }

    /// `<html>`
    #[cfg(feature = "directory")]
    pub fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    /// Lock or restore page scrolling through the body's overflow
    #[cfg(feature = "landing")]
    pub fn set_scroll_locked(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            let _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "auto" });
        }
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        let search = self.window.location().search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    pub fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    #[cfg(feature = "directory")]
    pub fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            log::warn!("[PAGE] navigation to {} failed: {:?}", url, e);
        }
    }

    #[cfg(feature = "directory")]
    pub fn storage_get(&self, key: &str) -> Option<String> {
        self.window.local_storage().ok()??.get_item(key).ok()?
    }

    #[cfg(feature = "directory")]
    pub fn storage_set(&self, key: &str, value: &str) {
        if let Ok(Some(storage)) = self.window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    /// OS-level `prefers-color-scheme: dark`
    #[cfg(feature = "directory")]
    pub fn prefers_dark(&self) -> bool {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    /// Blocking alert dialog
    #[cfg(feature = "landing")]
    pub fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

/// Set an inline style property; non-HTML elements are ignored.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_display(el: &Element, value: &str) {
    set_style(el, "display", value);
}

#[cfg(feature = "landing")]
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Text content of the first descendant matching `selector`, or ""
#[cfg(feature = "directory")]
pub fn child_text(el: &Element, selector: &str) -> String {
    el.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|child| child.text_content())
        .unwrap_or_default()
}
