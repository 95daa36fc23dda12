//! Human-readable date formatting (en-NZ style).

use crate::domain::ContentDate;

/// Label for a period that hasn't ended
pub const PRESENT: &str = "Present";

/// `1 January 2023`
pub fn format_date(date: ContentDate) -> String {
    date.naive().format("%-d %B %Y").to_string()
}

/// `2023`
pub fn format_date_year(date: ContentDate) -> String {
    date.year().to_string()
}

/// `January 2024`, used for project completion
pub fn format_month_year(date: ContentDate) -> String {
    date.naive().format("%B %Y").to_string()
}

/// `1 February 2017 - 20 November 2020`, or `... - Present` when open-ended
pub fn format_range(start: ContentDate, end: Option<ContentDate>) -> String {
    let end = end.map(format_date).unwrap_or_else(|| PRESENT.to_string());
    format!("{} - {}", format_date(start), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> ContentDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date("2023-01-01")), "1 January 2023");
        assert_eq!(format_date(date("2021-11-25")), "25 November 2021");
    }

    #[test]
    fn test_format_date_year() {
        assert_eq!(format_date_year(date("2019-07-14")), "2019");
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year(date("2024-03-09")), "March 2024");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(
            format_range(date("2017-02-01"), Some(date("2020-11-20"))),
            "1 February 2017 - 20 November 2020"
        );
        assert_eq!(format_range(date("2022-05"), None), "1 May 2022 - Present");
    }
}
