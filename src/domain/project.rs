//! Project records shown on the projects page.

use serde::{Deserialize, Serialize};

use super::date::ContentDate;

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Numeric identifier, used as the last-resort ordering key
    pub id: i64,

    pub title: String,

    pub description: String,

    /// Preview image reference
    pub image: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub date: Option<ContentDate>,

    #[serde(default)]
    pub status: Option<Status>,

    #[serde(default)]
    pub priority: Option<Priority>,

    #[serde(default)]
    pub completed_date: Option<ContentDate>,
}

impl Project {
    /// Status used for ordering; unspecified projects count as completed
    pub fn effective_status(&self) -> Status {
        self.status.unwrap_or_default()
    }

    /// Priority used for ordering; unspecified projects count as medium
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}

/// Lifecycle state of a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    InProgress,
    #[default]
    Completed,
    Archived,
}

impl Status {
    /// Display rank: in-progress first, archived last
    pub fn rank(self) -> u8 {
        match self {
            Status::InProgress => 0,
            Status::Completed => 1,
            Status::Archived => 2,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "in-progress"),
            Status::Completed => write!(f, "completed"),
            Status::Archived => write!(f, "archived"),
        }
    }
}

/// How prominently a project should be featured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}
