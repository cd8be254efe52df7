//! Homepage body markers
//!
//! Each marker is a case-insensitive substring match against the raw HTML.

use std::fmt;

/// Substring identifying the marketplace UI
const MARKETPLACE_MARKER: &str = "marketplace";

/// Substring identifying a navigation element; also matches "navigation"
const NAVIGATION_MARKER: &str = "nav";

/// Substring identifying Next.js asset references
const FRAMEWORK_MARKER: &str = "_next";

/// True if the body mentions "marketplace" in any letter case
pub fn has_marketplace_marker(body: &str) -> bool {
    contains_ignore_case(body, MARKETPLACE_MARKER)
}

/// True if the body contains "nav" in any letter case
pub fn has_navigation_marker(body: &str) -> bool {
    contains_ignore_case(body, NAVIGATION_MARKER)
}

/// True if the body references "_next" in any letter case
pub fn has_framework_marker(body: &str) -> bool {
    contains_ignore_case(body, FRAMEWORK_MARKER)
}

/// `needle` must already be lowercase
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Marker scan of a homepage body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyMarkers {
    pub marketplace: bool,
    pub navigation: bool,
    pub framework: bool,
}

impl BodyMarkers {
    pub fn scan(body: &str) -> Self {
        Self {
            marketplace: has_marketplace_marker(body),
            navigation: has_navigation_marker(body),
            framework: has_framework_marker(body),
        }
    }

    pub fn all_present(&self) -> bool {
        self.marketplace && self.navigation && self.framework
    }
}

impl fmt::Display for BodyMarkers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Marketplace: {}, Navigation: {}, Next.js: {}",
            self.marketplace, self.navigation, self.framework
        )
    }
}
