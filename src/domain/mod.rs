//! Domain types for portfolio content.
//!
//! This module contains the record shapes authored in content files:
//! - Project: portfolio projects with status/priority metadata
//! - Work: employment history, optionally split into roles
//! - Education: qualifications and achievements
//!
//! plus the derived `Slug` and the `ContentDate` used for ordering.

pub mod date;
pub mod education;
pub mod project;
pub mod slug;
pub mod work;

// Re-export commonly used types
pub use date::{ContentDate, InvalidDate};
pub use education::Education;
pub use project::{Priority, Project, Status};
pub use slug::Slug;
pub use work::{EmploymentType, Work, WorkRole};
