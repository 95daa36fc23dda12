//! Entry slugs, derived from the directory holding each content file.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// URL path segment identifying an entry within its category
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Slug for a content file: the name of its immediate parent directory.
    ///
    /// Returns None when the file has no parent or the name isn't UTF-8.
    pub fn from_content_path(path: &Path) -> Option<Self> {
        path.parent()?
            .file_name()?
            .to_str()
            .map(|name| Self(name.to_string()))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the slug can be used in a URL path without escaping
    pub fn is_url_safe(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
