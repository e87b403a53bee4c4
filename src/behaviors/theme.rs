//! Theme Switcher
//!
//! Resolves the light/dark preference on load, keeps `data-theme` on
//! `<html>` and local storage in sync with it, and flips it from
//! `#theme-toggle`.

use leptos::prelude::*;

use crate::context::use_page_context;
use crate::dom::{set_display, Page};
use crate::models::Theme;
use crate::store;

const THEME_ATTR: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEffect {
    SetAttribute(Theme),
    Persist(Theme),
    /// Which of the two icons is shown
    Icons { moon: bool, sun: bool },
}

/// Everything that must be written when `theme` becomes active
pub fn plan(theme: Theme) -> Vec<ThemeEffect> {
    vec![
        ThemeEffect::SetAttribute(theme),
        ThemeEffect::Persist(theme),
        ThemeEffect::Icons {
            moon: theme == Theme::Light,
            sun: theme == Theme::Dark,
        },
    ]
}

/// Anything that is not dark becomes dark
pub fn toggle(current: Option<Theme>) -> Theme {
    current.map_or(Theme::Dark, Theme::toggled)
}

pub fn attach(page: &Page) {
    let ctx = use_page_context();
    let key = ctx.config.theme_storage_key;

    let initial = Theme::resolve(page.storage_get(key).as_deref(), page.prefers_dark());
    log::debug!("[THEME] initial theme {}", initial);
    store::set_theme(&ctx.store, initial);

    let root = page.root();
    let icons = page.one(".icon-moon").zip(page.one(".icon-sun"));
    let storage_page = page.clone();
    Effect::new(move |_| {
        let Some(theme) = store::watch_theme(&ctx.store) else {
            return;
        };
        for effect in plan(theme) {
            match effect {
                ThemeEffect::SetAttribute(theme) => {
                    if let Some(root) = &root {
                        let _ = root.set_attribute(THEME_ATTR, theme.as_str());
                    }
                }
                ThemeEffect::Persist(theme) => storage_page.storage_set(key, theme.as_str()),
                ThemeEffect::Icons { moon, sun } => {
                    if let Some((moon_icon, sun_icon)) = &icons {
                        set_display(moon_icon, if moon { "block" } else { "none" });
                        set_display(sun_icon, if sun { "block" } else { "none" });
                    }
                }
            }
        }
    });

    if let Some(button) = page.by_id("theme-toggle") {
        dom_hooks::bind(&button, "click", move |_| {
            let next = toggle(store::theme(&ctx.store));
            store::set_theme(&ctx.store, next);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted(effects: &[ThemeEffect]) -> Option<Theme> {
        effects.iter().find_map(|e| match e {
            ThemeEffect::Persist(t) => Some(*t),
            _ => None,
        })
    }

    fn applied(effects: &[ThemeEffect]) -> Option<Theme> {
        effects.iter().find_map(|e| match e {
            ThemeEffect::SetAttribute(t) => Some(*t),
            _ => None,
        })
    }

    #[test]
    fn test_toggle_twice_returns_to_start() {
        assert_eq!(toggle(Some(toggle(Some(Theme::Light)))), Theme::Light);
        assert_eq!(toggle(Some(toggle(Some(Theme::Dark)))), Theme::Dark);
    }

    #[test]
    fn test_toggle_from_unset_goes_dark() {
        assert_eq!(toggle(None), Theme::Dark);
    }

    #[test]
    fn test_persisted_value_matches_applied_value() {
        let mut theme = Theme::resolve(None, false);
        for _ in 0..4 {
            let effects = plan(theme);
            assert_eq!(persisted(&effects), Some(theme));
            assert_eq!(applied(&effects), Some(theme));
            theme = toggle(Some(theme));
        }
    }

    #[test]
    fn test_exactly_one_icon_shown() {
        for theme in [Theme::Light, Theme::Dark] {
            let icons = plan(theme)
                .into_iter()
                .find_map(|e| match e {
                    ThemeEffect::Icons { moon, sun } => Some((moon, sun)),
                    _ => None,
                })
                .unwrap();
            assert!(icons.0 ^ icons.1);
        }
        assert!(plan(Theme::Dark).contains(&ThemeEffect::Icons { moon: false, sun: true }));
    }
}
