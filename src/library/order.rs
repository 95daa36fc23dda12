//! Display orderings for each content category.

use std::cmp::Ordering;

use super::content::Entry;
use crate::domain::{ContentDate, Education, Project, Work};

/// Order projects for the projects page.
///
/// Keys, each consulted only when the previous one ties:
/// 1. status: in-progress, completed, archived (unset counts as completed)
/// 2. priority: high, medium, low (unset counts as medium)
/// 3. completion: dated projects first, most recently completed first;
///    undated projects after them by ascending id
pub fn compare_projects(a: &Entry<Project>, b: &Entry<Project>) -> Ordering {
    a.effective_status()
        .rank()
        .cmp(&b.effective_status().rank())
        .then_with(|| {
            a.effective_priority()
                .rank()
                .cmp(&b.effective_priority().rank())
        })
        .then_with(|| match (a.completed_date, b.completed_date) {
            (Some(a_done), Some(b_done)) => b_done.cmp(&a_done),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        })
}

/// Records that have a start date
pub trait Dated {
    fn start_date(&self) -> ContentDate;
}

impl Dated for Work {
    fn start_date(&self) -> ContentDate {
        self.start_date
    }
}

impl Dated for Education {
    fn start_date(&self) -> ContentDate {
        self.start_date
    }
}

/// Most recent start date first. Equal dates compare equal so a stable
/// sort keeps enumeration order.
pub fn compare_start_date_desc<T: Dated>(a: &Entry<T>, b: &Entry<T>) -> Ordering {
    b.data.start_date().cmp(&a.data.start_date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Slug, Status};
    use std::path::PathBuf;

    fn project(
        slug: &str,
        id: i64,
        status: Option<Status>,
        priority: Option<Priority>,
        completed: Option<&str>,
    ) -> Entry<Project> {
        Entry {
            slug: Slug::new(slug),
            data: Project {
                id,
                title: slug.to_string(),
                description: String::new(),
                image: String::new(),
                tags: Vec::new(),
                date: None,
                status,
                priority,
                completed_date: completed.map(|d| d.parse().unwrap()),
            },
            body: String::new(),
            path: PathBuf::new(),
        }
    }

    fn slugs(entries: &[Entry<Project>]) -> Vec<&str> {
        entries.iter().map(|e| e.slug.as_str()).collect()
    }

    #[test]
    fn test_status_groups_come_first() {
        let mut entries = vec![
            project("archived", 1, Some(Status::Archived), Some(Priority::High), None),
            project("done", 2, Some(Status::Completed), Some(Priority::High), None),
            project("wip", 3, Some(Status::InProgress), Some(Priority::Low), None),
        ];
        entries.sort_by(compare_projects);
        assert_eq!(slugs(&entries), vec!["wip", "done", "archived"]);
    }

    #[test]
    fn test_priority_within_status() {
        let mut entries = vec![
            project("low", 1, None, Some(Priority::Low), None),
            project("high", 2, None, Some(Priority::High), None),
            project("medium", 3, None, Some(Priority::Medium), None),
        ];
        entries.sort_by(compare_projects);
        assert_eq!(slugs(&entries), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_unset_fields_rank_in_the_middle() {
        let mut entries = vec![
            project("archived", 1, Some(Status::Archived), None, None),
            project("unset", 2, None, None, None),
            project("wip", 3, Some(Status::InProgress), None, None),
            project("completed-low", 0, Some(Status::Completed), Some(Priority::Low), None),
            project("completed-high", 9, Some(Status::Completed), Some(Priority::High), None),
        ];
        entries.sort_by(compare_projects);
        assert_eq!(
            slugs(&entries),
            vec!["wip", "completed-high", "unset", "completed-low", "archived"]
        );
    }

    #[test]
    fn test_completion_date_descending_then_id() {
        let mut entries = vec![
            project("undated-5", 5, None, None, None),
            project("old", 9, None, None, Some("2022-05-01")),
            project("undated-1", 1, None, None, None),
            project("new", 8, None, None, Some("2024-01-01")),
        ];
        entries.sort_by(compare_projects);
        assert_eq!(slugs(&entries), vec!["new", "old", "undated-1", "undated-5"]);
    }

    #[test]
    fn test_dated_beats_lower_id_undated() {
        let mut entries = vec![
            project("x", 1, None, None, None),
            project("y", 5, None, None, Some("2020-01-01")),
        ];
        entries.sort_by(compare_projects);
        assert_eq!(slugs(&entries), vec!["y", "x"]);
    }

    #[test]
    fn test_documented_scenario() {
        let mut entries = vec![
            project("b", 2, Some(Status::Completed), Some(Priority::High), Some("2023-01-01")),
            project("c", 3, Some(Status::Completed), Some(Priority::High), Some("2024-01-01")),
            project("a", 1, Some(Status::InProgress), Some(Priority::Low), None),
        ];
        entries.sort_by(compare_projects);
        assert_eq!(slugs(&entries), vec!["a", "c", "b"]);
    }

    fn work(slug: &str, start: &str) -> Entry<Work> {
        Entry {
            slug: Slug::new(slug),
            data: Work {
                company: slug.to_string(),
                logo: String::new(),
                start_date: start.parse().unwrap(),
                end_date: None,
                description: String::new(),
                roles: Vec::new(),
                url: None,
                location: None,
                employment_type: None,
            },
            body: String::new(),
            path: PathBuf::new(),
        }
    }

    #[test]
    fn test_start_date_descending() {
        let mut entries = vec![work("w2016", "2016"), work("w2022", "2022"), work("w2020", "2020")];
        entries.sort_by(compare_start_date_desc);
        let order: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(order, vec!["w2022", "w2020", "w2016"]);
    }

    #[test]
    fn test_equal_start_dates_keep_input_order() {
        let mut entries = vec![
            work("first", "2020-01-01"),
            work("newer", "2021-01-01"),
            work("second", "2020-01-01"),
        ];
        entries.sort_by(compare_start_date_desc);
        let order: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(order, vec!["newer", "first", "second"]);
    }
}
