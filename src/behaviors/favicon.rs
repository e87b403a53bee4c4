//! Favicon Fixer
//!
//! Points the page icon at the SVG favicon, relative to the page depth.

use wasm_bindgen::JsCast;
use web_sys::HtmlLinkElement;

use crate::base_path::BasePath;
use crate::context::use_page_context;
use crate::dom::Page;

pub fn attach(page: &Page) {
    let Some(link) = page
        .one("link[rel~='icon']")
        .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok())
    else {
        return;
    };
    let config = use_page_context().config;
    let base = BasePath::from_pathname(&page.pathname(), config.subdir_marker);
    link.set_href(&base.asset(config.favicon_path));
    link.set_type("image/svg+xml");
}
