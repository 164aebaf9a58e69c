//! Pattern-based rendering of a [`NumDate`].

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::NumDate;

/// Names and default patterns used by the formatter.
///
/// This is plain configuration: it can be built in code or deserialized,
/// and the arithmetic never consults it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Month abbreviations for `MMM`, January first
    pub months_short: [String; 12],
    /// Weekday abbreviations for `ddd`, Sunday first
    pub weekdays_short: [String; 7],
    /// Two-letter weekday names for `dd`, Sunday first
    pub weekdays_min: [String; 7],
    /// Pattern substituted for `ll`
    pub long_date: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            months_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]
            .map(String::from),
            weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from),
            weekdays_min: ["SU", "MO", "TU", "WE", "TH", "FR", "SA"].map(String::from),
            long_date: "MMM D YYYY".to_owned(),
        }
    }
}

static ENGLISH: LazyLock<Locale> = LazyLock::new(Locale::default);

/// Recognised pattern tokens, longest first so scanning is greedy.
const TOKENS: [&str; 13] = [
    "YYYY", "MMM", "ddd", "ll", "MM", "DD", "HH", "mm", "ss", "dd", "D", "H", "m",
];

/// A date paired with a pattern, rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    date: &'a NumDate,
    pattern: &'a str,
    locale: &'a Locale,
}

impl NumDate {
    /// Formats with the default English [`Locale`].
    ///
    /// ```
    /// use numdate::NumDate;
    ///
    /// let date: NumDate = "20241205080709".parse().unwrap();
    /// assert_eq!(date.format("YYYY-MM-DD HH:mm:ss").to_string(), "2024-12-05 08:07:09");
    /// assert_eq!(date.format("ll").to_string(), "Dec 5 2024");
    /// ```
    pub fn format<'a>(&'a self, pattern: &'a str) -> Formatted<'a> {
        self.format_with(pattern, &ENGLISH)
    }

    /// Formats with the given [`Locale`].
    pub const fn format_with<'a>(&'a self, pattern: &'a str, locale: &'a Locale) -> Formatted<'a> {
        Formatted {
            date: self,
            pattern,
            locale,
        }
    }
}

impl Formatted<'_> {
    fn render(&self, f: &mut fmt::Formatter<'_>, pattern: &str, expand_long: bool) -> fmt::Result {
        let date = self.date;
        let mut rest = pattern;
        while let Some(ch) = rest.chars().next() {
            let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) else {
                write!(f, "{ch}")?;
                rest = &rest[ch.len_utf8()..];
                continue;
            };
            match *token {
                "ll" if expand_long => self.render(f, &self.locale.long_date, false)?,
                "ll" => f.write_str("ll")?,
                "YYYY" => write!(f, "{}", date.year)?,
                "MMM" => f.write_str(&self.locale.months_short[usize::from(date.month)])?,
                "MM" => write!(f, "{:02}", date.month + 1)?,
                "DD" => write!(f, "{:02}", date.day)?,
                "D" => write!(f, "{}", date.day)?,
                "ddd" => f.write_str(&self.locale.weekdays_short[usize::from(date.weekday())])?,
                "dd" => f.write_str(&self.locale.weekdays_min[usize::from(date.weekday())])?,
                "HH" => write!(f, "{:02}", date.hour)?,
                "H" => write!(f, "{}", date.hour)?,
                "mm" => write!(f, "{:02}", date.minute)?,
                "m" => write!(f, "{}", date.minute)?,
                _ => write!(f, "{:02}", date.second)?,
            }
            rest = &rest[token.len()..];
        }
        Ok(())
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, self.pattern, true)
    }
}
