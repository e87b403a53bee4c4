//! Page Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::SiteConfig;
use crate::store::{PageState, PageStore};

/// Store and configuration shared by every behavior
#[derive(Clone, Copy)]
pub struct PageContext {
    pub store: PageStore,
    pub config: SiteConfig,
}

impl PageContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            store: Store::new(PageState::default()),
            config,
        }
    }
}

/// Get the page context (panics outside the App tree)
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
