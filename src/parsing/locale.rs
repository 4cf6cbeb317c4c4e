//! Session-heading dates.
//!
//! Messenger Plus! writes the session heading in the locale of the client,
//! e.g. `Session démarrée le 1 mai 2009`. A [`MonthTable`] maps the month
//! words of one locale to month numbers; the heading is then turned into a
//! plain calendar date.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rendered in place of a date when the heading cannot be parsed.
pub const UNKNOWN_DATE: &str = "UNKNOWN_DATE";

static HEADING_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}) (\w+) (\d{4})").expect("valid heading date pattern")
});

const FRENCH: &[(&str, u32)] = &[
    ("janvier", 1),
    ("février", 2),
    ("mars", 3),
    ("avril", 4),
    ("mai", 5),
    ("juin", 6),
    ("juillet", 7),
    ("août", 8),
    ("septembre", 9),
    ("octobre", 10),
    ("novembre", 11),
    ("décembre", 12),
];

const ENGLISH: &[(&str, u32)] = &[
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Locale of the month names found in session headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthTable {
    #[default]
    French,
    English,
}

impl MonthTable {
    fn entries(self) -> &'static [(&'static str, u32)] {
        match self {
            MonthTable::French => FRENCH,
            MonthTable::English => ENGLISH,
        }
    }

    /// Looks up a month word, ignoring case.
    pub fn month(self, word: &str) -> Option<u32> {
        let word = word.to_lowercase();
        self.entries()
            .iter()
            .find(|(name, _)| *name == word)
            .map(|&(_, number)| number)
    }

    /// Extracts the `day month year` date from a session heading.
    ///
    /// Month words missing from the table fall back to English names
    /// (full or abbreviated) so mixed-locale archives still resolve.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use msnpack::parsing::MonthTable;
    ///
    /// let date = MonthTable::French.parse_heading("Session démarrée le 14 février 2008");
    /// assert_eq!(date, NaiveDate::from_ymd_opt(2008, 2, 14));
    /// ```
    pub fn parse_heading(self, heading: &str) -> Option<NaiveDate> {
        let caps = HEADING_DATE.captures(heading)?;
        let day: u32 = caps[1].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;

        match self.month(&caps[2]) {
            Some(month) => NaiveDate::from_ymd_opt(year, month, day),
            None => NaiveDate::parse_from_str(&caps[0], "%d %B %Y").ok(),
        }
    }
}

/// Renders a session date as `yy.mm.dd`, or [`UNKNOWN_DATE`].
pub fn format_session_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%y.%m.%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_months() {
        assert_eq!(MonthTable::French.month("août"), Some(8));
        assert_eq!(MonthTable::French.month("Décembre"), Some(12));
        assert_eq!(MonthTable::French.month("may"), None);
    }

    #[test]
    fn test_parse_french_heading() {
        let date = MonthTable::French.parse_heading("Session du 1 mai 2009");
        assert_eq!(date, NaiveDate::from_ymd_opt(2009, 5, 1));
        assert_eq!(format_session_date(date), "09.05.01");
    }

    #[test]
    fn test_english_fallback() {
        let date = MonthTable::French.parse_heading("Session started on 3 March 2007");
        assert_eq!(date, NaiveDate::from_ymd_opt(2007, 3, 3));
    }

    #[test]
    fn test_english_table() {
        let date = MonthTable::English.parse_heading("12 October 2010");
        assert_eq!(date, NaiveDate::from_ymd_opt(2010, 10, 12));
    }

    #[test]
    fn test_unparseable_headings() {
        assert_eq!(MonthTable::French.parse_heading("Session"), None);
        assert_eq!(MonthTable::French.parse_heading("1 brumaire 2009"), None);
        assert_eq!(MonthTable::French.parse_heading("31 février 2009"), None);
        assert_eq!(format_session_date(None), UNKNOWN_DATE);
    }

    #[test]
    fn test_month_table_serde() {
        let json = serde_json::to_string(&MonthTable::French).unwrap();
        assert_eq!(json, "\"french\"");
    }
}
