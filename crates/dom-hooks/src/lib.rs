//! DOM Hooks
//!
//! Small helpers for attaching behavior to markup that already exists on the
//! page: event listeners that live as long as the page, and a one-shot
//! visibility observer.
//!
//! Closures are leaked with `forget()`; page behaviors are never detached.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Attach `handler` to `event` on `target` for the rest of the page lifetime.
pub fn bind<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("[HOOKS] failed to bind '{}': {:?}", event, e);
    }
    cb.forget();
}

/// Attach a clone of `handler` to `event` on every element in `elements`.
pub fn bind_all<F>(elements: &[Element], event: &str, handler: F)
where
    F: FnMut(Event) + Clone + 'static,
{
    for el in elements {
        bind(el, event, handler.clone());
    }
}

/// Collect every element under `root` matching `selector`.
///
/// An invalid selector yields an empty list.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    collect(root.query_selector_all(selector))
}

/// Collect every element in the document matching `selector`.
pub fn query_all_in(doc: &web_sys::Document, selector: &str) -> Vec<Element> {
    collect(doc.query_selector_all(selector))
}

fn collect(list: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Options for [`observe_once`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be visible (0.0 - 1.0)
    pub threshold: f64,
    /// Pixels shaved off the bottom of the viewport
    pub bottom_margin_px: u32,
}

impl VisibilityOptions {
    /// CSS root margin string for the observer
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// Call `on_visible` the first time each element in `elements` becomes
/// visible, then stop watching that element.
///
/// Returns the observer so callers can keep it alive or disconnect it.
pub fn observe_once<F>(
    elements: &[Element],
    options: VisibilityOptions,
    mut on_visible: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(&Element) + 'static,
{
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();

    for el in elements {
        observer.observe(el);
    }
    Ok(observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin_excludes_bottom_strip() {
        let opts = VisibilityOptions { threshold: 0.1, bottom_margin_px: 50 };
        assert_eq!(opts.root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn test_root_margin_zero() {
        let opts = VisibilityOptions { threshold: 0.5, bottom_margin_px: 0 };
        assert_eq!(opts.root_margin(), "0px 0px -0px 0px");
    }
}
