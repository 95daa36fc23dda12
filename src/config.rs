//! Configuration for folio.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (FOLIO_CONTENT_ROOT)
//! 2. Config file (.folio/config.yaml)
//! 3. Defaults (./content, built-in site metadata and routes)
//!
//! Config file discovery:
//! - Searches current directory and parents for .folio/config.yaml
//! - Paths in config file are relative to the project root (the directory
//!   containing .folio/)

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::library::{Category, ContentCatalog};
use crate::site::{default_routes, Route, SiteMetadata};

/// Environment variable overriding the content root
pub const CONTENT_ROOT_ENV: &str = "FOLIO_CONTENT_ROOT";

const CONFIG_DIR: &str = ".folio";
const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_CONTENT_DIR: &str = "content";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub site: Option<SiteConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Content root (relative to project root)
    pub content_root: Option<String>,
    /// Category to directory name mapping
    #[serde(default)]
    pub categories: HashMap<Category, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten)]
    pub metadata: SiteMetadata,
    /// Header routes, replacing the built-in list when present
    #[serde(default)]
    pub routes: Option<Vec<Route>>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory holding one subdirectory per category
    pub content_root: PathBuf,
    /// Category directory overrides
    pub categories: HashMap<Category, String>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    pub site: SiteMetadata,
    pub routes: Vec<Route>,
}

impl ResolvedConfig {
    /// Catalog with the configured category dirs, rooted at `root` when
    /// given and at the configured content root otherwise
    pub fn catalog(&self, root: Option<&Path>) -> ContentCatalog {
        let root = root.unwrap_or(&self.content_root);
        self.categories
            .iter()
            .fold(ContentCatalog::new(root), |catalog, (category, dir)| {
                catalog.with_category_dir(*category, dir.clone())
            })
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to `base` or start with `~`
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Resolve configuration starting the config search at `start_dir`
fn load_config_from(start_dir: &Path, env_root: Option<String>) -> Result<ResolvedConfig> {
    let config_file = find_config_file(start_dir);

    let (content_root, categories, site, routes) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Project root is the parent of .folio/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        let content_root = if let Some(env_root) = env_root {
            PathBuf::from(env_root)
        } else if let Some(ref root) = config.paths.content_root {
            resolve_path(base_dir, root)
        } else {
            base_dir.join(DEFAULT_CONTENT_DIR)
        };

        let (site, routes) = match config.site {
            Some(site) => (site.metadata, site.routes.unwrap_or_else(default_routes)),
            None => (SiteMetadata::default(), default_routes()),
        };

        (content_root, config.paths.categories, site, routes)
    } else {
        // No config file - use env vars or defaults
        let content_root = env_root
            .map(PathBuf::from)
            .unwrap_or_else(|| start_dir.join(DEFAULT_CONTENT_DIR));

        (content_root, HashMap::new(), SiteMetadata::default(), default_routes())
    };

    Ok(ResolvedConfig {
        content_root,
        categories,
        config_file,
        site,
        routes,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    load_config_from(&cwd, std::env::var(CONTENT_ROOT_ENV).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(root: &Path, yaml: &str) -> PathBuf {
        let dir = root.join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", yaml).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = load_config_from(temp.path(), None).unwrap();

        assert!(config.config_file.is_none());
        assert_eq!(config.content_root, temp.path().join("content"));
        assert_eq!(config.routes, default_routes());
        assert_eq!(config.site, SiteMetadata::default());
    }

    #[test]
    fn test_env_overrides_default_root() {
        let temp = TempDir::new().unwrap();
        let config = load_config_from(temp.path(), Some("/srv/content".to_string())).unwrap();
        assert_eq!(config.content_root, PathBuf::from("/srv/content"));
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1.0"
paths:
  content_root: ./site-content
  categories:
    work: experience
site:
  default_title: Jane Doe
  title_template: "%s | Jane"
  routes:
    - path: /
      label: Home
    - path: /work
      label: Experience
"#,
        );

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.content_root, Some("./site-content".to_string()));
        assert_eq!(
            config.paths.categories.get(&Category::Work),
            Some(&"experience".to_string())
        );

        let site = config.site.unwrap();
        assert_eq!(site.metadata.default_title, "Jane Doe");
        assert_eq!(site.metadata.page_title(Some("Work")), "Work | Jane");
        assert_eq!(site.routes.unwrap().len(), 2);
    }

    #[test]
    fn test_config_file_found_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "version: \"1.0\"\npaths:\n  categories:\n    education: study\n",
        );
        let nested = temp.path().join("src").join("pages");
        std::fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(&nested, None).unwrap();
        assert!(config.config_file.is_some());
        assert_eq!(config.content_root, temp.path().join("content"));
        let catalog = config.catalog(None);
        assert_eq!(catalog.root(), config.content_root.as_path());
        assert_eq!(catalog.category_dir(Category::Education), "study");
        assert_eq!(catalog.category_dir(Category::Projects), "projects");
    }

    #[test]
    fn test_catalog_rerooted_keeps_category_dirs() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "version: \"1.0\"\npaths:\n  categories:\n    work: experience\n",
        );

        let config = load_config_from(temp.path(), None).unwrap();
        let catalog = config.catalog(Some(Path::new("/srv/other")));
        assert_eq!(catalog.root(), Path::new("/srv/other"));
        assert_eq!(catalog.category_dir(Category::Work), "experience");
        assert_eq!(catalog.category_dir(Category::Projects), "projects");
    }

    #[test]
    fn test_env_beats_config_file() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "version: \"1.0\"\npaths:\n  content_root: elsewhere\n");

        let config = load_config_from(temp.path(), Some("/env/root".to_string())).unwrap();
        assert_eq!(config.content_root, PathBuf::from("/env/root"));
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "paths: [not, a, mapping]");
        assert!(load_config_from(temp.path(), None).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
