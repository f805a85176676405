//! Shared traits and the `YYYY-MM` month key used across records.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Exposes a stable identifier for records held by the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Calendar month key, written as `YYYY-MM`.
///
/// Orders chronologically and serializes as its string form so stored
/// records stay readable in the slot files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

/// Raised when a month key is not in `YYYY-MM` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month key `{0}`, expected YYYY-MM")]
pub struct MonthParseError(String);

impl Month {
    /// Builds a month key, rejecting out-of-range month numbers.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Month containing the given calendar date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Human label such as `Mar 2024`.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || MonthParseError(raw.to_string());
        let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Month::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_the_wire_form() {
        let month: Month = "2024-03".parse().expect("valid key");
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2024-03");
    }

    #[test]
    fn rejects_malformed_keys() {
        for raw in ["2024", "2024-13", "2024-00", "24-03", "2024-3", "march"] {
            assert!(raw.parse::<Month>().is_err(), "`{raw}` should not parse");
        }
    }

    #[test]
    fn orders_chronologically() {
        let earlier: Month = "2023-12".parse().expect("valid key");
        let later: Month = "2024-01".parse().expect("valid key");
        assert!(earlier < later);
    }

    #[test]
    fn containing_uses_calendar_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date");
        assert_eq!(Month::containing(date).to_string(), "2024-03");
    }

    #[test]
    fn label_is_short_month_and_year() {
        let month: Month = "2024-03".parse().expect("valid key");
        assert_eq!(month.label(), "Mar 2024");
    }

    #[test]
    fn serde_roundtrips_as_string() {
        let month: Month = "2024-07".parse().expect("valid key");
        let json = serde_json::to_string(&month).expect("serialize");
        assert_eq!(json, "\"2024-07\"");
        let back: Month = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, month);
    }
}
