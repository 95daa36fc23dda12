//! Catalog of authored content.
//!
//! Discovers per-entry content files under a content root, loads them
//! concurrently, and returns them sorted for display. Nothing is cached:
//! every query reflects the filesystem at the time it runs.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::content::{load_entry, Entry, CONTENT_FILE};
use super::error::CatalogError;
use super::order::{compare_projects, compare_start_date_desc};
use crate::domain::{Education, Project, Work};

/// The content kinds the site lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Projects,
    Work,
    Education,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Projects, Category::Work, Category::Education];

    /// Directory under the content root, unless overridden in config
    pub fn default_dir(self) -> &'static str {
        match self {
            Category::Projects => "projects",
            Category::Work => "work",
            Category::Education => "education",
        }
    }

    /// Front matter key holding each entry's record
    pub fn export_key(self) -> &'static str {
        match self {
            Category::Projects => "project",
            Category::Work => "work",
            Category::Education => "education",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_dir())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "projects" | "project" => Ok(Category::Projects),
            "work" => Ok(Category::Work),
            "education" => Ok(Category::Education),
            _ => anyhow::bail!("Unknown category: {}", s),
        }
    }
}

/// Export key used when a caller doesn't name one: the category
/// directory with a single trailing `s` removed.
pub fn conventional_export_key(category_dir: &str) -> &str {
    category_dir.strip_suffix('s').unwrap_or(category_dir)
}

/// Read-only view over a content root
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    root: PathBuf,
    dirs: HashMap<Category, String>,
}

impl ContentCatalog {
    /// Create a catalog over `root` using the default category directories
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dirs: HashMap::new(),
        }
    }

    /// Use `dir` instead of the category's default directory name
    pub fn with_category_dir(mut self, category: Category, dir: impl Into<String>) -> Self {
        self.dirs.insert(category, dir.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name scanned for a category
    pub fn category_dir(&self, category: Category) -> &str {
        self.dirs
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.default_dir())
    }

    /// List content files under `<root>/<category_dir>/*/page.md`.
    ///
    /// Hidden directories are skipped. Paths come back sorted so that
    /// enumeration order is the same on every run.
    pub fn discover(&self, category_dir: &str) -> Result<Vec<PathBuf>, CatalogError> {
        let dir = self.root.join(category_dir);
        if !dir.is_dir() {
            return Err(CatalogError::CategoryRootMissing { path: dir });
        }

        let enumerate_err = |message: String| CatalogError::Enumerate {
            path: dir.clone(),
            message,
        };

        // Glob patterns are strings; a lossy conversion would match nothing
        let dir_str = dir
            .to_str()
            .ok_or_else(|| enumerate_err("content root is not valid UTF-8".to_string()))?;
        let pattern = format!("{}/*/{}", Pattern::escape(dir_str), CONTENT_FILE);
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        let mut paths = Vec::new();
        for entry in glob::glob_with(&pattern, options).map_err(|e| enumerate_err(e.to_string()))? {
            let path = entry.map_err(|e| enumerate_err(e.to_string()))?;
            if path.is_file() {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Load every entry of a category and sort it with `compare`.
    ///
    /// Each content file is loaded on its own task. The first failure
    /// aborts the remaining loads and fails the whole query.
    #[instrument(skip(self, compare), fields(root = %self.root.display()))]
    pub async fn load_category<T, F>(
        &self,
        category_dir: &str,
        export_key: Option<&str>,
        mut compare: F,
    ) -> Result<Vec<Entry<T>>, CatalogError>
    where
        T: DeserializeOwned + Send + 'static,
        F: FnMut(&Entry<T>, &Entry<T>) -> Ordering,
    {
        let key = export_key
            .unwrap_or_else(|| conventional_export_key(category_dir))
            .to_string();
        let paths = self.discover(category_dir)?;

        let tasks: Vec<_> = paths
            .into_iter()
            .map(|path| {
                let key = key.clone();
                tokio::spawn(async move { load_entry::<T>(path, &key).await })
            })
            .collect();

        let mut entries = Vec::with_capacity(tasks.len());
        let mut pending = tasks.into_iter();
        while let Some(task) = pending.next() {
            match task.await {
                Ok(Ok(entry)) => entries.push(entry),
                Ok(Err(e)) => {
                    pending.for_each(|t| t.abort());
                    return Err(e);
                }
                Err(e) => {
                    pending.for_each(|t| t.abort());
                    return Err(e.into());
                }
            }
        }

        // Stable: entries that compare equal stay in enumeration order
        entries.sort_by(|a, b| compare(a, b));

        info!(count = entries.len(), "Loaded category");
        Ok(entries)
    }

    /// Load a single entry by slug
    pub async fn entry<T>(
        &self,
        category_dir: &str,
        export_key: Option<&str>,
        slug: &str,
    ) -> Result<Entry<T>, CatalogError>
    where
        T: DeserializeOwned,
    {
        let dir = self.root.join(category_dir);
        if !dir.is_dir() {
            return Err(CatalogError::CategoryRootMissing { path: dir });
        }

        let not_found = || CatalogError::EntryNotFound {
            category: category_dir.to_string(),
            slug: slug.to_string(),
        };

        // A slug is a single directory name, never a path
        if slug.is_empty() || slug.starts_with('.') || slug.contains(['/', '\\']) {
            return Err(not_found());
        }

        let path = dir.join(slug).join(CONTENT_FILE);
        if !path.is_file() {
            return Err(not_found());
        }

        let key = export_key.unwrap_or_else(|| conventional_export_key(category_dir));
        load_entry(path, key).await
    }

    /// All projects, in-progress and high priority first
    pub async fn all_projects(&self) -> Result<Vec<Entry<Project>>, CatalogError> {
        let category = Category::Projects;
        self.load_category(
            self.category_dir(category),
            Some(category.export_key()),
            compare_projects,
        )
        .await
    }

    /// All work history, most recent start first
    pub async fn all_work(&self) -> Result<Vec<Entry<Work>>, CatalogError> {
        let category = Category::Work;
        self.load_category(
            self.category_dir(category),
            Some(category.export_key()),
            compare_start_date_desc,
        )
        .await
    }

    /// All education, most recent start first
    pub async fn all_education(&self) -> Result<Vec<Entry<Education>>, CatalogError> {
        let category = Category::Education;
        self.load_category(
            self.category_dir(category),
            Some(category.export_key()),
            compare_start_date_desc,
        )
        .await
    }

    pub async fn project(&self, slug: &str) -> Result<Entry<Project>, CatalogError> {
        let category = Category::Projects;
        self.entry(self.category_dir(category), Some(category.export_key()), slug)
            .await
    }

    pub async fn work_entry(&self, slug: &str) -> Result<Entry<Work>, CatalogError> {
        let category = Category::Work;
        self.entry(self.category_dir(category), Some(category.export_key()), slug)
            .await
    }

    pub async fn education_entry(&self, slug: &str) -> Result<Entry<Education>, CatalogError> {
        let category = Category::Education;
        self.entry(self.category_dir(category), Some(category.export_key()), slug)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_export_key() {
        assert_eq!(conventional_export_key("projects"), "project");
        assert_eq!(conventional_export_key("work"), "work");
        assert_eq!(conventional_export_key("class"), "clas");
        assert_eq!(conventional_export_key("posts"), "post");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("projects".parse::<Category>().unwrap(), Category::Projects);
        assert_eq!("Work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!(
            "education".parse::<Category>().unwrap(),
            Category::Education
        );
        assert!("blog".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_dir_override() {
        let catalog = ContentCatalog::new("/site/content")
            .with_category_dir(Category::Work, "experience");

        assert_eq!(catalog.category_dir(Category::Work), "experience");
        assert_eq!(catalog.category_dir(Category::Projects), "projects");
        assert_eq!(catalog.root(), Path::new("/site/content"));
    }

    #[test]
    fn test_explicit_keys_match_category() {
        for category in Category::ALL {
            assert!(!category.export_key().is_empty());
            assert_eq!(category.to_string(), category.default_dir());
        }
        assert_eq!(Category::Projects.export_key(), "project");
        assert_eq!(Category::Education.export_key(), "education");
    }

    #[test]
    fn test_discover_missing_root() {
        let catalog = ContentCatalog::new("/definitely/not/here");
        let err = catalog.discover("projects").unwrap_err();
        assert!(matches!(err, CatalogError::CategoryRootMissing { .. }));
    }
}
