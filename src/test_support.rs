//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::destination::Route;
use crate::core::state::{App, LinkEntry};

/// The link set most tests run against.
pub fn test_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry::new("Home", "/"),
        LinkEntry::new("Dashboard", "/dashboard"),
        LinkEntry::new("Settings", "/settings"),
        LinkEntry::new("Profile", "/settings/profile"),
        LinkEntry::new("Reports", Route::new("/reports").with_query("range", "week")),
    ]
}

/// Creates a test App mounted at `/`.
pub fn test_app() -> App {
    App::new(test_links(), "/")
}

/// Index of the link whose destination renders to `path`.
pub fn index_of(app: &App, path: &str) -> usize {
    app.links
        .iter()
        .position(|link| link.destination.normalize() == path)
        .unwrap_or_else(|| panic!("no test link for {path}"))
}
