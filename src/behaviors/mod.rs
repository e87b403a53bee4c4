//! Page Behaviors
//!
//! One module per independent behavior. Each exposes `attach(&Page)`, which
//! is a no-op when the elements it needs are missing from the page.
//!
//! Stateful behaviors keep a pure `step` (state, event) -> (state, effects)
//! and a small interpreter that applies the effects to the DOM.

#[cfg(feature = "landing")]
pub mod contact_form;
#[cfg(feature = "landing")]
pub mod demo_modal;
#[cfg(feature = "landing")]
pub mod mobile_menu;
#[cfg(feature = "landing")]
pub mod reveal;

#[cfg(feature = "directory")]
pub mod favicon;
#[cfg(feature = "directory")]
pub mod search;
#[cfg(feature = "directory")]
pub mod theme;
