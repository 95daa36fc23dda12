//! Content library: discovery, loading and ordering of site content.
//!
//! # Storage Layout
//!
//! ```text
//! content/
//! ├── projects/
//! │   └── <slug>/
//! │       └── page.md       # front matter `project:` + body
//! ├── work/
//! │   └── <slug>/
//! │       └── page.md       # front matter `work:` + body
//! └── education/
//!     └── <slug>/
//!         └── page.md       # front matter `education:` + body
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod order;

pub use catalog::{conventional_export_key, Category, ContentCatalog};
pub use content::{parse_entry, split_front_matter, Entry, CONTENT_FILE};
pub use error::CatalogError;
pub use order::{compare_projects, compare_start_date_desc, Dated};
