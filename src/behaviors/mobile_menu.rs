//! Mobile Menu Controller
//!
//! `.mobile-toggle` opens and closes the `.nav-links` panel; following a
//! link closes it again.

use crate::context::use_page_context;
use crate::dom::{set_class, Page};
use crate::store;

const TOGGLE_SELECTOR: &str = ".mobile-toggle";
const PANEL_SELECTOR: &str = ".nav-links";
const LINK_SELECTOR: &str = ".nav-links a";
const ICON_OPEN: &str = "ph-list";
const ICON_CLOSE: &str = "ph-x";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkClicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    PanelActive(bool),
    /// Icon class to swap `(from, to)`
    SwapIcon(&'static str, &'static str),
    ScrollLocked(bool),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// DOM changes that bring the page in line with this state
    pub fn plan(self) -> Vec<MenuEffect> {
        let open = self.is_open();
        let icon = if open {
            MenuEffect::SwapIcon(ICON_OPEN, ICON_CLOSE)
        } else {
            MenuEffect::SwapIcon(ICON_CLOSE, ICON_OPEN)
        };
        vec![MenuEffect::PanelActive(open), icon, MenuEffect::ScrollLocked(open)]
    }

    /// Next state plus the effects to apply. No change, no effects.
    pub fn step(self, event: MenuEvent) -> (Self, Vec<MenuEffect>) {
        let next = match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::LinkClicked) => MenuState::Closed,
        };
        if next == self {
            (next, Vec::new())
        } else {
            (next, next.plan())
        }
    }
}

pub fn attach(page: &Page) {
    let Some(toggle) = page.one(TOGGLE_SELECTOR) else {
        return;
    };
    let ctx = use_page_context();
    let panel = page.one(PANEL_SELECTOR);
    let icon = toggle.query_selector("i").ok().flatten();

    let dispatch = {
        let page = page.clone();
        move |event: MenuEvent| {
            let (next, effects) = store::menu(&ctx.store).step(event);
            store::set_menu(&ctx.store, next);
            for effect in effects {
                match effect {
                    MenuEffect::PanelActive(on) => {
                        if let Some(panel) = &panel {
                            set_class(panel, "active", on);
                        }
                    }
                    MenuEffect::SwapIcon(from, to) => {
                        if let Some(icon) = &icon {
                            let _ = icon.class_list().replace(from, to);
                        }
                    }
                    MenuEffect::ScrollLocked(locked) => page.set_scroll_locked(locked),
                }
            }
        }
    };

    let on_toggle = dispatch.clone();
    dom_hooks::bind(&toggle, "click", move |_| on_toggle(MenuEvent::Toggle));

    let links = page.all(LINK_SELECTOR);
    dom_hooks::bind_all(&links, "click", move |_| dispatch(MenuEvent::LinkClicked));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let (open, effects) = MenuState::Closed.step(MenuEvent::Toggle);
        assert_eq!(open, MenuState::Open);
        assert_eq!(
            effects,
            vec![
                MenuEffect::PanelActive(true),
                MenuEffect::SwapIcon("ph-list", "ph-x"),
                MenuEffect::ScrollLocked(true),
            ]
        );

        let (closed, effects) = open.step(MenuEvent::Toggle);
        assert_eq!(closed, MenuState::Closed);
        assert!(effects.contains(&MenuEffect::ScrollLocked(false)));
        assert!(effects.contains(&MenuEffect::SwapIcon("ph-x", "ph-list")));
    }

    #[test]
    fn test_link_click_closes_only_when_open() {
        let (state, effects) = MenuState::Open.step(MenuEvent::LinkClicked);
        assert_eq!(state, MenuState::Closed);
        assert!(effects.contains(&MenuEffect::PanelActive(false)));

        let (state, effects) = MenuState::Closed.step(MenuEvent::LinkClicked);
        assert_eq!(state, MenuState::Closed);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_scroll_lock_always_matches_panel() {
        let events = [
            MenuEvent::Toggle,
            MenuEvent::LinkClicked,
            MenuEvent::LinkClicked,
            MenuEvent::Toggle,
            MenuEvent::Toggle,
            MenuEvent::Toggle,
        ];
        let mut state = MenuState::Closed;
        for event in events {
            let (next, _) = state.step(event);
            state = next;
            let plan = state.plan();
            assert!(plan.contains(&MenuEffect::PanelActive(state.is_open())));
            assert!(plan.contains(&MenuEffect::ScrollLocked(state.is_open())));
        }
    }

    #[test]
    fn test_repeated_link_clicks_settle_closed() {
        let (state, first) = MenuState::Open.step(MenuEvent::LinkClicked);
        assert!(!first.is_empty());

        let (state, second) = state.step(MenuEvent::LinkClicked);
        assert_eq!(state, MenuState::Closed);
        assert!(second.is_empty());
        assert!(state.plan().contains(&MenuEffect::ScrollLocked(false)));
    }

    #[test]
    fn test_toggle_run_ends_by_parity() {
        for count in 0..9 {
            let mut state = MenuState::Closed;
            for _ in 0..count {
                state = state.step(MenuEvent::Toggle).0;
            }
            let expected = if count % 2 == 1 { MenuState::Open } else { MenuState::Closed };
            assert_eq!(state, expected, "after {} toggles", count);
            assert!(state.plan().contains(&MenuEffect::ScrollLocked(count % 2 == 1)));
        }
    }
}
