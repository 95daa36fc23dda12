//! Navigation routes and active-route matching for the header.

use serde::{Deserialize, Serialize};

use crate::library::Category;

/// A header navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub label: String,
}

impl Route {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    /// True when `current_path` is this route's page.
    ///
    /// Only exact matches count, ignoring a trailing slash, so a detail
    /// page like `/projects/folio` does not highlight `/projects`.
    pub fn is_active(&self, current_path: &str) -> bool {
        normalize(&self.path) == normalize(current_path)
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Header routes in display order
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("/", "Home"),
        Route::new("/projects", "Projects"),
        Route::new("/work", "Work"),
        Route::new("/about", "About"),
        Route::new("/education", "Education"),
    ]
}

/// The route matching `current_path`, if any
pub fn active_route<'a>(routes: &'a [Route], current_path: &str) -> Option<&'a Route> {
    routes.iter().find(|r| r.is_active(current_path))
}

/// Detail page path for an entry
pub fn entry_path(category: Category, slug: &str) -> String {
    format!("/{}/{}", category.default_dir(), slug)
}
