//! Search/Filter Engine
//!
//! Live filtering of the `.calc-card` directory from `#global-search`.
//! Pages without cards send the term to the home page instead.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};

use crate::base_path::BasePath;
use crate::context::use_page_context;
use crate::dom::{child_text, set_display, Page};
use crate::filter::{is_search_shortcut, visible_cards, visible_sections};
use crate::models::Card;
use crate::store;

const INPUT_ID: &str = "global-search";
const CARD_SELECTOR: &str = ".calc-card";
const SECTION_SELECTOR: &str = ".category-section";

/// `?q=` value worth applying on load
pub fn initial_term(query: Option<String>) -> Option<String> {
    query.filter(|q| !q.is_empty())
}

/// Where Enter should take the user, if anywhere.
/// Only pages without a card list redirect, and only for a non-empty term.
pub fn enter_redirect(term: &str, has_cards: bool, base: &BasePath) -> Option<String> {
    if has_cards || term.is_empty() {
        None
    } else {
        Some(base.home_search(term))
    }
}

/// Cards and sections as rendered on the page
struct Catalog {
    card_elements: Vec<Element>,
    cards: Vec<Card>,
    section_elements: Vec<Element>,
    sections: Vec<Vec<usize>>,
}

impl Catalog {
    fn read(page: &Page) -> Self {
        let card_elements = page.all(CARD_SELECTOR);
        let cards = card_elements
            .iter()
            .map(|el| Card::new(child_text(el, "h3"), child_text(el, "p")))
            .collect();

        let section_elements = page.all(SECTION_SELECTOR);
        let sections = section_elements
            .iter()
            .map(|section| {
                dom_hooks::query_all(section, CARD_SELECTOR)
                    .iter()
                    .filter_map(|card| card_elements.iter().position(|c| c == card))
                    .collect()
            })
            .collect();

        Self { card_elements, cards, section_elements, sections }
    }

    fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn apply(&self, term: &str) {
        let visible = visible_cards(&self.cards, term);
        for (el, shown) in self.card_elements.iter().zip(&visible) {
            set_display(el, if *shown { "flex" } else { "none" });
        }
        let shown_sections = visible_sections(&self.sections, &visible);
        for (el, shown) in self.section_elements.iter().zip(shown_sections) {
            set_display(el, if shown { "block" } else { "none" });
        }
        log::debug!(
            "[SEARCH] '{}' matched {} of {} cards",
            term,
            visible.iter().filter(|v| **v).count(),
            visible.len()
        );
    }
}

pub fn attach(page: &Page) {
    let Some(input) = page.by_id_as::<HtmlInputElement>(INPUT_ID) else {
        return;
    };
    let ctx = use_page_context();
    let base = BasePath::from_pathname(&page.pathname(), ctx.config.subdir_marker);
    let catalog = Catalog::read(page);
    let has_cards = !catalog.is_empty();

    // Skip the first run so cards keep their stylesheet display until a search happens
    Effect::new(move |prev: Option<()>| {
        let term = store::watch_search_term(&ctx.store);
        if prev.is_some() {
            catalog.apply(&term);
        }
    });

    if let Some(term) = initial_term(page.query_param("q")) {
        input.set_value(&term);
        Timeout::new(ctx.config.search_apply_delay_ms, move || {
            store::set_search_term(&ctx.store, term);
        })
        .forget();
    }

    let focus_target = input.clone();
    dom_hooks::bind(page.document(), "keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_search_shortcut(&key_ev.key(), key_ev.ctrl_key(), key_ev.meta_key()) {
            ev.prevent_default();
            let _ = focus_target.focus();
        }
    });

    let typed = input.clone();
    dom_hooks::bind(&input, "input", move |_| {
        if has_cards {
            store::set_search_term(&ctx.store, typed.value().trim().to_string());
        }
    });

    let entered = input.clone();
    let nav_page = page.clone();
    dom_hooks::bind(&input, "keypress", move |ev| {
        let is_enter = ev
            .dyn_ref::<KeyboardEvent>()
            .map_or(false, |k| k.key() == "Enter");
        if !is_enter {
            return;
        }
        let value = entered.value();
        if let Some(url) = enter_redirect(value.trim(), has_cards, &base) {
            log::debug!("[SEARCH] redirecting to {}", url);
            nav_page.navigate(&url);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "/calculators/";

    #[test]
    fn test_query_term_prefills_and_filters() {
        let term = initial_term(Some("mortgage".to_string())).unwrap();
        let cards = vec![
            Card::new("Mortgage Calculator", "Monthly payments"),
            Card::new("BMI Calculator", "Body mass index"),
        ];
        assert_eq!(term, "mortgage");
        assert_eq!(visible_cards(&cards, &term), vec![true, false]);
    }

    #[test]
    fn test_empty_query_is_ignored() {
        assert_eq!(initial_term(Some(String::new())), None);
        assert_eq!(initial_term(None), None);
    }

    #[test]
    fn test_enter_on_card_page_stays() {
        let base = BasePath::from_pathname("/index.html", MARKER);
        assert_eq!(enter_redirect("loan", true, &base), None);
    }

    #[test]
    fn test_enter_on_sub_page_redirects_home() {
        let base = BasePath::from_pathname("/calculators/bmi.html", MARKER);
        assert_eq!(
            enter_redirect("car loan", false, &base).as_deref(),
            Some("../index.html?q=car%20loan")
        );

        let base = BasePath::from_pathname("/about.html", MARKER);
        assert_eq!(enter_redirect("tax", false, &base).as_deref(), Some("index.html?q=tax"));
    }

    #[test]
    fn test_enter_with_blank_term_does_nothing() {
        let base = BasePath::from_pathname("/about.html", MARKER);
        assert_eq!(enter_redirect("", false, &base), None);
    }
}
