//! Demo Modal Controller
//!
//! Plays a demo inside `#demo-frame` in the `#demo-modal` overlay.
//! Page markup opens it with `openDemo(url)` and closes it with
//! `closeDemo()`; elements with `data-demo-url` or `.demo-close` work too,
//! and a click on the overlay itself closes it.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlIFrameElement};

use crate::context::{use_page_context, PageContext};
use crate::dom::{set_class, Page};
use crate::store;

const OPEN_ATTR: &str = "data-demo-url";
const CLOSE_SELECTOR: &str = ".demo-close";
const OPEN_GLOBAL: &str = "openDemo";
const CLOSE_GLOBAL: &str = "closeDemo";

/// Event for a call to one of the window globals. `openDemo` without a
/// string URL is ignored.
pub fn global_event(name: &str, arg: Option<String>) -> Option<DemoEvent> {
    match name {
        OPEN_GLOBAL => arg.map(DemoEvent::Open),
        CLOSE_GLOBAL => Some(DemoEvent::Close),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoState {
    /// URL currently shown, None when closed
    pub open_url: Option<String>,
    /// Bumped on every open/close; a pending frame clear only applies if
    /// nothing happened since it was scheduled
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEvent {
    Open(String),
    Close,
    ClearDue(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEffect {
    SetFrameSrc(String),
    ModalActive(bool),
    ScrollLocked(bool),
    /// Blank the frame after the close transition
    ScheduleClear(u32),
}

impl DemoState {
    pub fn is_open(&self) -> bool {
        self.open_url.is_some()
    }

    pub fn step(self, event: DemoEvent) -> (Self, Vec<DemoEffect>) {
        match event {
            DemoEvent::Open(url) => {
                let next = DemoState {
                    open_url: Some(url.clone()),
                    generation: self.generation.wrapping_add(1),
                };
                let effects = vec![
                    DemoEffect::SetFrameSrc(url),
                    DemoEffect::ModalActive(true),
                    DemoEffect::ScrollLocked(true),
                ];
                (next, effects)
            }
            DemoEvent::Close => {
                let generation = self.generation.wrapping_add(1);
                let effects = vec![
                    DemoEffect::ModalActive(false),
                    DemoEffect::ScheduleClear(generation),
                    DemoEffect::ScrollLocked(false),
                ];
                (DemoState { open_url: None, generation }, effects)
            }
            DemoEvent::ClearDue(generation) => {
                let effects = if !self.is_open() && generation == self.generation {
                    vec![DemoEffect::SetFrameSrc(String::new())]
                } else {
                    Vec::new()
                };
                (self, effects)
            }
        }
    }
}

#[derive(Clone)]
struct DemoModal {
    page: Page,
    modal: Element,
    frame: HtmlIFrameElement,
}

impl DemoModal {
    fn dispatch(&self, ctx: PageContext, event: DemoEvent) {
        let (next, effects) = store::demo(&ctx.store).step(event);
        store::set_demo(&ctx.store, next);

        for effect in effects {
            match effect {
                DemoEffect::SetFrameSrc(src) => self.frame.set_src(&src),
                DemoEffect::ModalActive(on) => set_class(&self.modal, "active", on),
                DemoEffect::ScrollLocked(locked) => self.page.set_scroll_locked(locked),
                DemoEffect::ScheduleClear(generation) => {
                    let this = self.clone();
                    Timeout::new(ctx.config.demo_clear_delay_ms, move || {
                        this.dispatch(ctx, DemoEvent::ClearDue(generation));
                    })
                    .forget();
                }
            }
        }
    }

    /// Install `window.openDemo(url)` and `window.closeDemo()`
    fn expose_globals(&self, ctx: PageContext) {
        for name in [OPEN_GLOBAL, CLOSE_GLOBAL] {
            let this = self.clone();
            let cb = Closure::<dyn FnMut(JsValue)>::new(move |arg: JsValue| {
                if let Some(event) = global_event(name, arg.as_string()) {
                    this.dispatch(ctx, event);
                }
            });
            let installed = js_sys::Reflect::set(
                self.page.window(),
                &JsValue::from_str(name),
                cb.as_ref(),
            );
            if let Err(e) = installed {
                log::warn!("[DEMO] could not install {}: {:?}", name, e);
            }
            cb.forget();
        }
    }

    /// Map a page click to a modal event, if it concerns the modal
    fn classify_click(&self, target: &Element) -> Option<DemoEvent> {
        if *target == self.modal {
            return Some(DemoEvent::Close);
        }
        if let Some(opener) = target.closest(&format!("[{}]", OPEN_ATTR)).ok().flatten() {
            return opener.get_attribute(OPEN_ATTR).map(DemoEvent::Open);
        }
        if target.closest(CLOSE_SELECTOR).ok().flatten().is_some() {
            return Some(DemoEvent::Close);
        }
        None
    }
}

pub fn attach(page: &Page) {
    let (Some(modal), Some(frame)) = (
        page.by_id("demo-modal"),
        page.by_id_as::<HtmlIFrameElement>("demo-frame"),
    ) else {
        return;
    };
    let ctx = use_page_context();
    let demo = DemoModal { page: page.clone(), modal, frame };
    demo.expose_globals(ctx);

    dom_hooks::bind(page.window(), "click", move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(event) = demo.classify_click(&target) {
            if matches!(event, DemoEvent::Open(_)) {
                ev.prevent_default();
            }
            log::debug!("[DEMO] {:?}", event);
            demo.dispatch(ctx, event);
        }
    });
}
