//! Site Configuration
//!
//! Every constant the page behaviors depend on, in one place.

#[cfg(feature = "landing")]
use dom_hooks::VisibilityOptions;

/// Third-party form relay that receives contact submissions
#[cfg(feature = "landing")]
pub const FORM_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    /// POST target for the contact form
    #[cfg(feature = "landing")]
    pub form_endpoint: &'static str,
    /// When a `.reveal` element counts as on screen
    #[cfg(feature = "landing")]
    pub reveal: VisibilityOptions,
    /// Delay before the demo frame is blanked after closing
    #[cfg(feature = "landing")]
    pub demo_clear_delay_ms: u32,
    /// Local storage key holding "light" or "dark"
    #[cfg(feature = "directory")]
    pub theme_storage_key: &'static str,
    /// Delay before a `?q=` term is applied on load
    #[cfg(feature = "directory")]
    pub search_apply_delay_ms: u32,
    /// Path segment marking pages one directory below the site root
    #[cfg(feature = "directory")]
    pub subdir_marker: &'static str,
    /// Favicon location relative to the site root
    #[cfg(feature = "directory")]
    pub favicon_path: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            #[cfg(feature = "landing")]
            form_endpoint: FORM_RELAY_ENDPOINT,
            #[cfg(feature = "landing")]
            reveal: VisibilityOptions {
                threshold: 0.1,
                bottom_margin_px: 50,
            },
            #[cfg(feature = "landing")]
            demo_clear_delay_ms: 300,
            #[cfg(feature = "directory")]
            theme_storage_key: "theme",
            #[cfg(feature = "directory")]
            search_apply_delay_ms: 100,
            #[cfg(feature = "directory")]
            subdir_marker: "/calculators/",
            #[cfg(feature = "directory")]
            favicon_path: "assets/images/favicon.svg",
        }
    }
}
