//! Content files and the entries parsed from them.
//!
//! Each entry lives in its own directory as a `page.md` file:
//!
//! ```text
//! ---
//! project:
//!   id: 1
//!   title: Portfolio
//!   ...
//! ---
//! Markdown body rendered on the detail page.
//! ```
//!
//! The front matter is plain data. Each top-level key is one exported
//! record, and the loader picks the one named by the category's export key.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tokio::fs;

use super::error::CatalogError;
use crate::domain::Slug;

/// File name recognised as an entry's content
pub const CONTENT_FILE: &str = "page.md";

const FRONT_MATTER_FENCE: &str = "---";

/// A content record plus everything derived from where it was found
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<T> {
    /// Name of the directory holding the content file
    pub slug: Slug,

    /// The record exported by the content file
    #[serde(flatten)]
    pub data: T,

    /// Markdown following the front matter
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,

    /// Path of the content file this entry was read from
    #[serde(skip)]
    pub path: PathBuf,
}

impl<T> Deref for Entry<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Split a document into (front matter, body).
///
/// Returns None unless the document opens with a `---` fence that is
/// closed by a later `---` line.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rest = text.strip_prefix(FRONT_MATTER_FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_FENCE {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front, body));
        }
        offset += line.len();
    }

    None
}

/// Parse one content document into an entry.
///
/// `path` is only used to derive the slug and to label errors.
pub fn parse_entry<T: DeserializeOwned>(
    path: &Path,
    text: &str,
    export_key: &str,
) -> Result<Entry<T>, CatalogError> {
    let slug = Slug::from_content_path(path).ok_or_else(|| CatalogError::InvalidSlug {
        path: path.to_path_buf(),
    })?;

    let (front, body) = split_front_matter(text).ok_or_else(|| CatalogError::MissingFrontMatter {
        path: path.to_path_buf(),
    })?;

    let value: Value = serde_yaml::from_str(front).map_err(|source| CatalogError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    let mut exports = match value {
        Value::Mapping(mapping) => mapping,
        // An empty front matter block parses as null
        Value::Null => Mapping::new(),
        _ => {
            return Err(CatalogError::MissingExport {
                path: path.to_path_buf(),
                key: export_key.to_string(),
                found: Vec::new(),
            })
        }
    };

    let record = match exports.remove(export_key) {
        Some(record) => record,
        None => {
            return Err(CatalogError::MissingExport {
                path: path.to_path_buf(),
                key: export_key.to_string(),
                found: exports
                    .keys()
                    .filter_map(|k| k.as_str().map(str::to_string))
                    .collect(),
            })
        }
    };

    let data = serde_yaml::from_value(record).map_err(|source| CatalogError::InvalidRecord {
        path: path.to_path_buf(),
        key: export_key.to_string(),
        source,
    })?;

    if !slug.is_url_safe() {
        tracing::warn!(%slug, path = %path.display(), "Slug is not URL-safe");
    }

    Ok(Entry {
        slug,
        data,
        body: body.trim_start_matches(['\r', '\n']).to_string(),
        path: path.to_path_buf(),
    })
}

/// Read and parse a content file
pub async fn load_entry<T: DeserializeOwned>(
    path: PathBuf,
    export_key: &str,
) -> Result<Entry<T>, CatalogError> {
    let text = fs::read_to_string(&path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;

    let entry = parse_entry(&path, &text, export_key)?;
    tracing::debug!(slug = %entry.slug, path = %path.display(), "Loaded entry");
    Ok(entry)
}
