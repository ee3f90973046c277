//! Calendar date parsing and localized rendering
//!
//! Deadlines come out of the sheet as ISO-ish strings. Rendering uses the
//! calendar date exactly as written; no timezone conversion is applied, so
//! `"2024-05-01"` is always the first of May regardless of where the board
//! runs.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::KanbanError;

const INDONESIAN_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Locale used when rendering dates on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateLocale {
    /// `id-ID`: "1 Mei 2024"
    #[default]
    Indonesian,
    /// `en-US`: "May 1, 2024"
    English,
}

impl DateLocale {
    /// BCP 47 tag for the locale
    pub fn tag(self) -> &'static str {
        match self {
            Self::Indonesian => "id-ID",
            Self::English => "en-US",
        }
    }

    /// Full month name for a 1-based month number
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        match self {
            Self::Indonesian => INDONESIAN_MONTHS.get(index).copied(),
            Self::English => ENGLISH_MONTHS.get(index).copied(),
        }
    }

    /// Render `date` as day, full month name and year
    pub fn format_date(self, date: NaiveDate) -> String {
        // month() is always 1..=12 for a valid NaiveDate
        let month = self.month_name(date.month()).unwrap_or_default();
        match self {
            Self::Indonesian => format!("{} {} {}", date.day(), month, date.year()),
            Self::English => format!("{} {}, {}", month, date.day(), date.year()),
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DateLocale {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "id-id" | "id" => Ok(Self::Indonesian),
            "en-us" | "en" => Ok(Self::English),
            other => Err(KanbanError::Config(format!("Unsupported locale: {other}"))),
        }
    }
}

impl TryFrom<String> for DateLocale {
    type Error = KanbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateLocale> for String {
    fn from(locale: DateLocale) -> Self {
        locale.tag().to_string()
    }
}

/// Parse an ISO-ish date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, naive `YYYY-MM-DDTHH:MM:SS[.fff]`
/// (also with a space separator) and RFC 3339 timestamps. Returns `None` for
/// empty or unparsable input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|ts| ts.date())
}
