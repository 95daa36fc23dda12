//! Work history records.

use serde::{Deserialize, Serialize};

use super::date::ContentDate;

/// A period of employment at one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub company: String,

    /// Company logo reference
    pub logo: String,

    pub start_date: ContentDate,

    /// None while the position is current
    #[serde(default)]
    pub end_date: Option<ContentDate>,

    pub description: String,

    /// Roles held, in authored order
    #[serde(default)]
    pub roles: Vec<WorkRole>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default, rename = "type")]
    pub employment_type: Option<EmploymentType>,
}

impl Work {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

/// One title held within a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRole {
    pub title: String,
    pub start_date: ContentDate,
    #[serde(default)]
    pub end_date: Option<ContentDate>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmploymentType::FullTime => write!(f, "full-time"),
            EmploymentType::PartTime => write!(f, "part-time"),
            EmploymentType::Contract => write!(f, "contract"),
            EmploymentType::Internship => write!(f, "internship"),
        }
    }
}
