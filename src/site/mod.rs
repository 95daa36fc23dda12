//! Site-level presentation helpers: page metadata, navigation, dates.

pub mod format;
pub mod meta;
pub mod nav;

pub use format::{format_date, format_date_year, format_month_year, format_range};
pub use meta::SiteMetadata;
pub use nav::{active_route, default_routes, entry_path, Route};
