//! folio - Content catalog for a personal portfolio site
//!
//! Loads the per-entry content behind the projects, work and education
//! pages, and orders it for display.
//!
//! # Architecture
//!
//! Content is plain data on disk:
//! - Each category is a directory under the content root
//! - Each entry is a subdirectory holding a `page.md` with YAML front matter
//! - The subdirectory name is the entry's slug
//!
//! Every query re-reads the filesystem; there is no cache to invalidate.
//!
//! # Modules
//!
//! - `library`: Discovery, loading and ordering (ContentCatalog)
//! - `domain`: Record shapes (Project, Work, Education)
//! - `site`: Page metadata, navigation, date formatting
//! - `config`: Layered configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), folio::CatalogError> {
//! let catalog = folio::ContentCatalog::new("content");
//! for project in catalog.all_projects().await? {
//!     println!("{} {}", project.slug, project.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;
pub mod site;

// Re-export main types at crate root for convenience
pub use domain::{ContentDate, Education, Priority, Project, Slug, Status, Work, WorkRole};
pub use library::{CatalogError, Category, ContentCatalog, Entry};
pub use site::{Route, SiteMetadata};
