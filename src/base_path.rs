//! Base Path Resolver
//!
//! Pages live either at the site root or one directory down. Relative links
//! built at runtime need a `../` prefix on the nested pages.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePath {
    prefix: &'static str,
}

impl BasePath {
    /// Nested iff `pathname` contains `subdir_marker` (e.g. "/calculators/")
    pub fn from_pathname(pathname: &str, subdir_marker: &str) -> Self {
        let prefix = if pathname.contains(subdir_marker) { "../" } else { "" };
        Self { prefix }
    }

    /// Root-relative asset path rewritten for the current page
    pub fn asset(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }

    /// Home page URL carrying `term` as the `q` parameter
    pub fn home_search(&self, term: &str) -> String {
        format!(
            "{}index.html?q={}",
            self.prefix,
            utf8_percent_encode(term, URI_COMPONENT)
        )
    }
}
