//! Calendar dates as authored in content front matter.
//!
//! Authors write `2023-01-01`, `2023-01` or just `2023`. Missing parts
//! default to the first month/day so partial dates still order correctly.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A date string that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{0}': expected YYYY-MM-DD, YYYY-MM or YYYY")]
pub struct InvalidDate(pub String);

/// Date attached to a content record (start, end, completion)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentDate(NaiveDate);

impl ContentDate {
    /// Build from year/month/day, returning None for impossible dates
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

/// Years are written with exactly four digits
fn four_digit_year(year: i64) -> Option<i32> {
    (1000..=9999).contains(&year).then_some(year as i32)
}

impl From<NaiveDate> for ContentDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for ContentDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || InvalidDate(s.to_string());

        let mut parts = trimmed.splitn(3, '-');
        let year = parts
            .next()
            .filter(|p| p.len() == 4)
            .and_then(|p| p.parse().ok())
            .and_then(four_digit_year)
            .ok_or_else(invalid)?;
        let month: u32 = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 1,
        };
        let day: u32 = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 1,
        };

        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }
}

impl fmt::Display for ContentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for ContentDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContentDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DateVisitor;

        impl<'de> Visitor<'de> for DateVisitor {
            type Value = ContentDate;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date as YYYY-MM-DD, YYYY-MM or YYYY")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            // Unquoted `2016` in YAML arrives as an integer
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v)
                    .map_err(|_| E::custom(InvalidDate(v.to_string())))
                    .and_then(|year| self.visit_i64(year))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                four_digit_year(v)
                    .and_then(|year| ContentDate::from_ymd(year, 1, 1))
                    .ok_or_else(|| E::custom(InvalidDate(v.to_string())))
            }
        }

        deserializer.deserialize_any(DateVisitor)
    }
}
