//! Errors raised while loading a content category.

use std::path::PathBuf;

use thiserror::Error;

/// Any failure while discovering or loading content.
///
/// A single failing entry fails the whole category load.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("content root not found or not a directory: {}", path.display())]
    CategoryRootMissing { path: PathBuf },

    #[error("failed to enumerate content under {}: {message}", path.display())]
    Enumerate { path: PathBuf, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no YAML front matter", path.display())]
    MissingFrontMatter { path: PathBuf },

    #[error("invalid front matter in {}: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{} does not export '{key}' (found: {})", path.display(), found.join(", "))]
    MissingExport {
        path: PathBuf,
        key: String,
        found: Vec<String>,
    },

    #[error("invalid '{key}' record in {}: {source}", path.display())]
    InvalidRecord {
        path: PathBuf,
        key: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot derive slug from {}", path.display())]
    InvalidSlug { path: PathBuf },

    #[error("no '{slug}' entry in {category}")]
    EntryNotFound { category: String, slug: String },

    #[error("content load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
