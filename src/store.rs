//! Page State Store
//!
//! Uses Leptos reactive_stores so each behavior only reacts to its own field.
//! State is split per bundle; a bundle that is compiled out keeps an empty
//! placeholder.

use leptos::prelude::*;
use reactive_stores::Store;

#[cfg(feature = "landing")]
use crate::behaviors::{contact_form::SubmitPhase, demo_modal::DemoState, mobile_menu::MenuState};
#[cfg(feature = "directory")]
use crate::models::Theme;

/// Transient UI state of the page
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    pub landing: LandingState,
    pub directory: DirectoryState,
}

/// Landing page behaviors
#[cfg(feature = "landing")]
#[derive(Clone, Debug, Default, Store)]
pub struct LandingState {
    /// Mobile navigation panel
    pub menu: MenuState,
    /// Demo video modal
    pub demo: DemoState,
    /// Contact form submission
    pub submission: SubmitPhase,
}

#[cfg(not(feature = "landing"))]
#[derive(Clone, Debug, Default)]
pub struct LandingState;

/// Directory page behaviors
#[cfg(feature = "directory")]
#[derive(Clone, Debug, Default, Store)]
pub struct DirectoryState {
    /// Active theme (None until resolved on load)
    pub theme: Option<Theme>,
    /// Current search term
    pub search_term: String,
}

#[cfg(not(feature = "directory"))]
#[derive(Clone, Debug, Default)]
pub struct DirectoryState;

/// Type alias for the store
pub type PageStore = Store<PageState>;

// ========================
// Store Helper Functions
// ========================

#[cfg(feature = "landing")]
pub fn menu(store: &PageStore) -> MenuState {
    store.landing().menu().get_untracked()
}

#[cfg(feature = "landing")]
pub fn set_menu(store: &PageStore, state: MenuState) {
    store.landing().menu().set(state);
}

#[cfg(feature = "landing")]
pub fn demo(store: &PageStore) -> DemoState {
    store.landing().demo().get_untracked()
}

#[cfg(feature = "landing")]
pub fn set_demo(store: &PageStore, state: DemoState) {
    store.landing().demo().set(state);
}

#[cfg(feature = "landing")]
pub fn submission(store: &PageStore) -> SubmitPhase {
    store.landing().submission().get_untracked()
}

#[cfg(feature = "landing")]
pub fn set_submission(store: &PageStore, phase: SubmitPhase) {
    store.landing().submission().set(phase);
}

#[cfg(feature = "directory")]
pub fn theme(store: &PageStore) -> Option<Theme> {
    store.directory().theme().get_untracked()
}

#[cfg(feature = "directory")]
pub fn set_theme(store: &PageStore, theme: Theme) {
    store.directory().theme().set(Some(theme));
}

/// Tracked read, for use inside effects
#[cfg(feature = "directory")]
pub fn watch_theme(store: &PageStore) -> Option<Theme> {
    store.directory().theme().get()
}

#[cfg(feature = "directory")]
pub fn set_search_term(store: &PageStore, term: String) {
    store.directory().search_term().set(term);
}

/// Tracked read, for use inside effects
#[cfg(feature = "directory")]
pub fn watch_search_term(store: &PageStore) -> String {
    store.directory().search_term().get()
}
