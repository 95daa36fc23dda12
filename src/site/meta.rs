//! Site-wide page metadata.

use serde::{Deserialize, Serialize};

/// Placeholder in `title_template` replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "%s";

/// Metadata applied to every page unless the page sets its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Canonical origin, e.g. `https://baileynepe.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Title for pages that don't set one
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Template applied to page titles; `%s` is the page title
    #[serde(default = "default_title_template")]
    pub title_template: String,

    #[serde(default = "default_description")]
    pub description: String,
}

fn default_base_url() -> String {
    "https://baileynepe.com".to_string()
}

fn default_title() -> String {
    "Bailey Nepe - Full-Stack Solutions Engineer".to_string()
}

fn default_title_template() -> String {
    "%s - Bailey Nepe".to_string()
}

fn default_description() -> String {
    "Full-Stack Solutions Engineer who architects end-to-end technical solutions that drive business impact.".to_string()
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_title: default_title(),
            title_template: default_title_template(),
            description: default_description(),
        }
    }
}

impl SiteMetadata {
    /// Full `<title>` for a page.
    ///
    /// Pages without a title (or with a blank one) get `default_title`.
    pub fn page_title(&self, page_title: Option<&str>) -> String {
        match page_title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) if self.title_template.contains(TITLE_PLACEHOLDER) => {
                self.title_template.replacen(TITLE_PLACEHOLDER, title, 1)
            }
            Some(title) => title.to_string(),
            None => self.default_title.clone(),
        }
    }

    /// Absolute URL for a site path
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}
