//! Reveal Animator
//!
//! `.reveal` elements gain `active` once they scroll into view.

use crate::context::use_page_context;
use crate::dom::{set_class, Page};

const REVEAL_SELECTOR: &str = ".reveal";
const ACTIVE_CLASS: &str = "active";

pub fn attach(page: &Page) {
    let config = use_page_context().config;
    let targets = page.all(REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let result = dom_hooks::observe_once(&targets, config.reveal, |el| {
        set_class(el, ACTIVE_CLASS, true);
    });
    match result {
        Ok(_) => log::debug!("[REVEAL] watching {} elements", targets.len()),
        Err(e) => log::warn!("[REVEAL] observer unavailable: {:?}", e),
    }
}
