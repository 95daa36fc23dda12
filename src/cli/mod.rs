//! Command-line interface for folio.
//!
//! Provides commands for listing and inspecting site content, and for
//! checking navigation and the resolved configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::{self, ResolvedConfig};
use crate::domain::{Education, Project, Work};
use crate::library::{Category, ContentCatalog, Entry};
use crate::site::{
    active_route, entry_path, format_date_year, format_month_year, format_range, SiteMetadata,
};

/// folio - Portfolio content catalog
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Content root (overrides config file and FOLIO_CONTENT_ROOT)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a category in display order
    List {
        #[arg(value_enum)]
        category: CategoryArg,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single entry
    Show {
        #[arg(value_enum)]
        category: CategoryArg,

        /// Entry slug (its directory name)
        slug: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show navigation routes
    Routes {
        /// Highlight the route active for this path
        #[arg(short, long)]
        current: Option<String>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Category for CLI (maps to Category)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Projects,
    Work,
    Education,
}

impl From<CategoryArg> for Category {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Projects => Category::Projects,
            CategoryArg::Work => Category::Work,
            CategoryArg::Education => Category::Education,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let cfg = config::config()?;
        let catalog = cfg.catalog(self.root.as_deref());

        match self.command {
            Commands::List { category, json } => list_category(&catalog, category.into(), json).await,
            Commands::Show {
                category,
                slug,
                json,
            } => show_entry(&catalog, &cfg.site, category.into(), &slug, json).await,
            Commands::Routes { current } => {
                show_routes(cfg, current.as_deref());
                Ok(())
            }
            Commands::Config => {
                show_config(cfg, &catalog);
                Ok(())
            }
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// List a category in display order
async fn list_category(catalog: &ContentCatalog, category: Category, json: bool) -> Result<()> {
    match category {
        Category::Projects => {
            let projects = catalog.all_projects().await?;
            if json {
                return print_json(&projects);
            }
            print_projects(&projects);
        }
        Category::Work => {
            let work = catalog.all_work().await?;
            if json {
                return print_json(&work);
            }
            print_work(&work);
        }
        Category::Education => {
            let education = catalog.all_education().await?;
            if json {
                return print_json(&education);
            }
            print_education(&education);
        }
    }

    Ok(())
}

fn print_projects(projects: &[Entry<Project>]) {
    if projects.is_empty() {
        println!("No projects found");
        return;
    }

    println!(
        "{:<24} {:<12} {:<8} {:<14} {:<40}",
        "SLUG", "STATUS", "PRIORITY", "COMPLETED", "TITLE"
    );
    println!("{}", "-".repeat(100));

    for project in projects {
        let completed = project
            .completed_date
            .map(format_month_year)
            .unwrap_or_default();
        println!(
            "{:<24} {:<12} {:<8} {:<14} {:<40}",
            truncate(project.slug.as_str(), 24),
            project.effective_status().to_string(),
            project.effective_priority().to_string(),
            completed,
            truncate(&project.title, 40)
        );
    }

    println!("\nTotal: {} projects", projects.len());
}

fn print_work(work: &[Entry<Work>]) {
    if work.is_empty() {
        println!("No work history found");
        return;
    }

    println!("{:<24} {:<30} {:<6} {:<12}", "SLUG", "COMPANY", "SINCE", "TYPE");
    println!("{}", "-".repeat(75));

    for entry in work {
        println!(
            "{:<24} {:<30} {:<6} {:<12}",
            truncate(entry.slug.as_str(), 24),
            truncate(&entry.company, 30),
            format_date_year(entry.start_date),
            entry
                .employment_type
                .map(|t| t.to_string())
                .unwrap_or_default()
        );
    }
}

fn print_education(education: &[Entry<Education>]) {
    if education.is_empty() {
        println!("No education found");
        return;
    }

    println!("{:<24} {:<30} {:<40}", "SLUG", "INSTITUTION", "QUALIFICATION");
    println!("{}", "-".repeat(96));

    for entry in education {
        println!(
            "{:<24} {:<30} {:<40}",
            truncate(entry.slug.as_str(), 24),
            truncate(&entry.institution, 30),
            truncate(&entry.qualification, 40)
        );
    }
}

/// Show details of one entry
async fn show_entry(
    catalog: &ContentCatalog,
    site: &SiteMetadata,
    category: Category,
    slug: &str,
    json: bool,
) -> Result<()> {
    match category {
        Category::Projects => {
            let project = catalog.project(slug).await?;
            if json {
                return print_json(&project);
            }
            println!("  Title: {}", project.title);
            println!("  URL: {}", entry_url(site, category, project.slug.as_str()));
            println!("  Status: {}", project.effective_status());
            println!("  Priority: {}", project.effective_priority());
            if let Some(done) = project.completed_date {
                println!("  Completed: {}", format_month_year(done));
            }
            if !project.tags.is_empty() {
                println!("  Tags: {}", project.tags.join(", "));
            }
            println!("  {}", project.description);
            print_body(&project.body);
        }
        Category::Work => {
            let work = catalog.work_entry(slug).await?;
            if json {
                return print_json(&work);
            }
            println!("  Company: {}", work.company);
            println!("  URL: {}", entry_url(site, category, work.slug.as_str()));
            println!("  Period: {}", format_range(work.start_date, work.end_date));
            if let Some(location) = &work.location {
                println!("  Location: {}", location);
            }
            for role in &work.roles {
                println!("  - {} ({})", role.title, format_range(role.start_date, role.end_date));
            }
            println!("  {}", work.description);
            print_body(&work.body);
        }
        Category::Education => {
            let education = catalog.education_entry(slug).await?;
            if json {
                return print_json(&education);
            }
            println!("  Qualification: {}", education.qualification);
            println!("  Institution: {}", education.institution);
            println!("  URL: {}", entry_url(site, category, education.slug.as_str()));
            println!(
                "  Period: {}",
                format_range(education.start_date, education.end_date)
            );
            for achievement in &education.achievements {
                println!("  * {}", achievement);
            }
            println!("  {}", education.description);
            print_body(&education.body);
        }
    }

    Ok(())
}

/// Absolute URL of an entry's detail page
fn entry_url(site: &SiteMetadata, category: Category, slug: &str) -> String {
    site.url_for(&entry_path(category, slug))
}

fn print_body(body: &str) {
    if !body.trim().is_empty() {
        println!("\n{}", body.trim_end());
    }
}

/// Show navigation routes, marking the active one
fn show_routes(cfg: &ResolvedConfig, current: Option<&str>) {
    let active = current.and_then(|path| active_route(&cfg.routes, path));

    for route in &cfg.routes {
        let marker = if Some(route) == active { "*" } else { " " };
        println!("{} {:<12} {}", marker, route.label, route.path);
    }
}

/// Show the resolved configuration (for debugging)
fn show_config(cfg: &ResolvedConfig, catalog: &ContentCatalog) {
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Content root: {}", catalog.root().display());
    for category in Category::ALL {
        println!(
            "  {:<10} {} (key: {})",
            category.to_string(),
            catalog.root().join(catalog.category_dir(category)).display(),
            category.export_key()
        );
    }
    println!();
    println!("Site:");
    println!("  Base URL:       {}", cfg.site.base_url);
    println!("  Default title:  {}", cfg.site.default_title);
    println!("  Title template: {}", cfg.site.title_template);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long project title", 10), "a very ...");
        assert_eq!(truncate("ēēēēēēēēēēēē", 6), "ēēē...");
    }

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["folio", "list", "projects", "--json"]).unwrap();
        match cli.command {
            Commands::List { category, json } => {
                assert!(matches!(category, CategoryArg::Projects));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_root() {
        let cli = Cli::try_parse_from(["folio", "show", "work", "acme", "--root", "/tmp/c"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/c")));
        assert!(matches!(cli.command, Commands::Show { .. }));
    }

    #[test]
    fn test_entry_url_uses_site_base() {
        let site = SiteMetadata {
            base_url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            entry_url(&site, Category::Projects, "folio"),
            "https://example.com/projects/folio"
        );
    }

    #[test]
    fn test_category_arg_maps_to_category() {
        assert_eq!(Category::from(CategoryArg::Education), Category::Education);
    }
}
