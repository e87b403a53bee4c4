//! Site Behaviors App
//!
//! Root component. The markup is already on the page, so nothing is
//! rendered; each behavior enhances the elements it finds.

use leptos::prelude::*;

#[cfg(any(feature = "landing", feature = "directory"))]
use crate::behaviors;
use crate::config::SiteConfig;
use crate::context::PageContext;
use crate::dom::Page;

#[component]
pub fn App() -> impl IntoView {
    provide_context(PageContext::new(SiteConfig::default()));

    let Some(page) = Page::current() else {
        log::warn!("[APP] no window/document, nothing to attach");
        return;
    };

    #[cfg(feature = "landing")]
    {
        behaviors::reveal::attach(&page);
        behaviors::mobile_menu::attach(&page);
        behaviors::contact_form::attach(&page);
        behaviors::demo_modal::attach(&page);
    }

    #[cfg(feature = "directory")]
    {
        behaviors::favicon::attach(&page);
        behaviors::theme::attach(&page);
        behaviors::search::attach(&page);
    }

    log::debug!("[APP] behaviors attached on {}", page.pathname());
}
