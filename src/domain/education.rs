//! Education records.

use serde::{Deserialize, Serialize};

use super::date::ContentDate;

/// A qualification earned (or in progress) at an institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub qualification: String,
    pub institution: String,
    pub logo: String,
    pub start_date: ContentDate,
    #[serde(default)]
    pub end_date: Option<ContentDate>,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Education {
    /// Still studying
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}
